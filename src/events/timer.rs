//! Timer expiry events.
//!
//! When a [`DelayTimer`](crate::components::timer::DelayTimer) runs out, a
//! [`TimerFired`] event is triggered carrying the owning entity and the
//! requested action; the AI observer applies the state change inside the same
//! tick. [`StalkTick`] is the periodic pursuit re-evaluation pulse.

use bevy_ecs::prelude::*;

use crate::components::timer::TimerAction;

/// Event emitted when a one-shot delay timer expires.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerFired {
    /// The entity whose timer expired.
    pub entity: Entity,
    pub action: TimerAction,
}

/// Event emitted on every stalk interval boundary. Each pulse re-evaluates
/// pursuit direction for every living, non-defeated enemy.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct StalkTick {}
