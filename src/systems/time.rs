//! Clock update and timer systems.
//!
//! [`update_world_time`] advances the shared clock once per tick.
//! [`update_delay_timers`] and [`update_stalk_timers`] run at the start of
//! the tick so that everything a timer queued is applied before input and
//! physics read the world.

use bevy_ecs::prelude::*;

use crate::components::timer::{DelayTimer, StalkTimer};
use crate::events::timer::{StalkTick, TimerFired};
use crate::resources::worldtime::WorldTime;

/// Update elapsed and delta milliseconds on the [`WorldTime`] resource.
///
/// `dt_ms` is the unscaled tick duration; the current `time_scale` applies
/// to both the delta and the accumulated total.
pub fn update_world_time(world: &mut World, dt_ms: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled = dt_ms * wt.time_scale;
    wt.elapsed_ms += scaled;
    wt.delta_ms = scaled;
}

/// Count down one-shot timers and fire their action on expiry.
///
/// The timer component is removed after firing; the entity itself stays.
pub fn update_delay_timers(
    time: Res<WorldTime>,
    mut query: Query<(Entity, &mut DelayTimer)>,
    mut commands: Commands,
) {
    for (entity, mut timer) in query.iter_mut() {
        timer.remaining_ms -= time.delta_ms;
        if timer.remaining_ms <= 0.0 {
            let action = timer.action;
            commands.entity(entity).remove::<DelayTimer>();
            commands.trigger(TimerFired { entity, action });
        }
    }
}

/// Advance the periodic stalk clock, pulsing once per interval.
///
/// Resets by subtracting the interval so the period stays exact across
/// uneven tick durations.
pub fn update_stalk_timers(
    time: Res<WorldTime>,
    mut query: Query<&mut StalkTimer>,
    mut commands: Commands,
) {
    for mut timer in query.iter_mut() {
        timer.elapsed_ms += time.delta_ms;
        if timer.elapsed_ms >= timer.interval_ms {
            timer.elapsed_ms -= timer.interval_ms;
            commands.trigger(StalkTick {});
        }
    }
}
