//! Round phase transition event and observer.
//!
//! Systems request a phase change by setting
//! [`NextRoundPhase`](crate::resources::roundstate::NextRoundPhase); the
//! `check_pending_phase` system then triggers a [`RoundPhaseChangedEvent`],
//! and the observer here applies the transition and runs the enter hook
//! registered in [`SystemsStore`](crate::resources::systemsstore::SystemsStore).
//! This keeps the intent to change phase separate from the mechanics of
//! tearing down and rebuilding a level.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

use crate::resources::roundstate::PendingPhase::{Pending, Unchanged};
use crate::resources::roundstate::{NextRoundPhase, RoundPhase, RoundState};
use crate::resources::systemsstore::SystemsStore;

/// Event indicating that a pending round phase transition should be applied.
#[derive(Event, Debug, Clone, Copy)]
pub struct RoundPhaseChangedEvent {}

/// Observer that applies a pending phase transition.
///
/// Contract
/// - Reads the intention from [`NextRoundPhase`]; does nothing if unchanged.
/// - Copies the new phase into [`RoundState`], resets the pending value, and
///   runs the enter hook for the new phase.
/// - A missing resource is logged and skipped, never fatal.
pub fn observe_round_phase_change(
    _trigger: On<RoundPhaseChangedEvent>,
    mut commands: Commands,
    mut next_phase: Option<ResMut<NextRoundPhase>>,
    mut round: Option<ResMut<RoundState>>,
    systems_store: Res<SystemsStore>,
) {
    debug!("RoundPhaseChangedEvent triggered");

    let (Some(next_phase), Some(round)) = (next_phase.as_deref_mut(), round.as_deref_mut())
    else {
        warn!("round resources missing in observe_round_phase_change");
        return;
    };

    match next_phase.get() {
        Pending(new_phase) => {
            info!("Round phase {:?} -> {:?}", round.phase, new_phase);
            round.phase = new_phase;
            next_phase.reset();
            on_phase_enter(new_phase, &mut commands, &systems_store);
        }
        Unchanged => {
            debug!("No phase change pending");
        }
    }
}

/// Internal: run the enter hook for the given phase.
fn on_phase_enter(phase: RoundPhase, commands: &mut Commands, systems_store: &SystemsStore) {
    match phase {
        RoundPhase::Intro => debug!("Entered Intro"),
        RoundPhase::Playing => {
            if let Some(id) = systems_store.get("enter_play") {
                commands.run_system(id);
            } else {
                warn!("enter_play hook not registered");
            }
        }
        RoundPhase::Finished => info!("Round finished"),
    }
}
