//! Physics integration.
//!
//! Applies the gravity force to bodies that opt in, then integrates velocity
//! into position. Velocity updates before position so a full-tick fall
//! accumulates exactly `g * dt` of speed per tick.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::simconfig::SimConfig;
use crate::resources::worldtime::WorldTime;

pub fn movement(
    mut query: Query<(&mut MapPosition, &mut RigidBody)>,
    time: Res<WorldTime>,
    config: Res<SimConfig>,
) {
    let dt = time.delta_ms;
    for (mut position, mut body) in query.iter_mut() {
        if body.frozen {
            continue;
        }
        if body.gravity {
            body.velocity.y += config.gravity * dt;
        }
        let delta = body.velocity * dt;
        position.pos += delta;
    }
}
