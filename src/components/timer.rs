//! Simulation timers.
//!
//! Timers are plain components advanced by the simulation clock inside the
//! tick; when they fire they only trigger an event, and the observer applies
//! the resulting state change at that defined point in the tick. Nothing ever
//! mutates entity state from outside the tick function.
//!
//! Two shapes exist:
//! - [`DelayTimer`] – one-shot; removed from the entity after firing
//! - [`StalkTimer`] – periodic; resets by subtracting the interval
//!
//! Timers ride on entities, so tearing a level down cancels every pending
//! timer that belonged to it.

use bevy_ecs::prelude::Component;

/// Action requested when a [`DelayTimer`] fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// End the enemy spawn-in sequence and start pursuit.
    EnemyActivate,
    /// Return the player to idle if the jump has settled with no keys held.
    JumpSettle,
}

/// One-shot countdown. Fires a [`TimerFired`](crate::events::timer::TimerFired)
/// event on the owning entity, then is removed.
#[derive(Component, Debug, Clone, Copy)]
pub struct DelayTimer {
    pub remaining_ms: f32,
    pub action: TimerAction,
}

impl DelayTimer {
    pub fn new(duration_ms: f32, action: TimerAction) -> Self {
        Self {
            remaining_ms: duration_ms,
            action,
        }
    }
}

/// Periodic re-target clock for enemy pursuit.
///
/// Lives on a dedicated controller entity per level; each expiry triggers a
/// [`StalkTick`](crate::events::timer::StalkTick) that re-evaluates pursuit
/// direction for every living enemy. Enemies commit to a direction for the
/// whole interval rather than homing every frame.
#[derive(Component, Debug, Clone, Copy)]
pub struct StalkTimer {
    pub elapsed_ms: f32,
    pub interval_ms: f32,
}

impl StalkTimer {
    pub fn new(interval_ms: f32) -> Self {
        Self {
            elapsed_ms: 0.0,
            interval_ms,
        }
    }
}
