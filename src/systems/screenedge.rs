//! World-bound resolution.
//!
//! Keeps every walker inside the map: entities that sink below the floor are
//! snapped to rest on it (with a per-kind margin, since player and enemy
//! sprite anchors differ), the player is clamped at the horizontal world
//! edges while enemies bounce off them, and nothing may rise above the top
//! margin. Each actor's [`EdgeContact`] records whether it is pinned against
//! a side edge this tick; the camera reads that instead of a shared global
//! flag.

use bevy_ecs::prelude::*;

use crate::components::actor::{Actor, ActorKind};
use crate::components::boxcollider::BoxCollider;
use crate::components::edgecontact::EdgeContact;
use crate::components::facing::Facing;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::camera::Camera;
use crate::resources::simconfig::SimConfig;
use crate::resources::tilegrid::TileGrid;

pub fn screen_edge(
    grid: Option<Res<TileGrid>>,
    camera: Res<Camera>,
    config: Res<SimConfig>,
    mut query: Query<(
        &Actor,
        &mut MapPosition,
        &mut RigidBody,
        &mut Facing,
        &mut EdgeContact,
        &BoxCollider,
    )>,
) {
    let Some(grid) = grid else {
        return;
    };
    let map_w = grid.pixel_width();
    let map_h = grid.pixel_height();

    for (actor, mut position, mut body, mut facing, mut edge, bbox) in query.iter_mut() {
        // Coins are placed statically and the asteroid falls from above the
        // map on purpose; only walkers are bound to the world.
        if !matches!(actor.kind, ActorKind::Player | ActorKind::Enemy) {
            continue;
        }
        let width = bbox.size.x;
        let height = bbox.size.y;

        if position.pos.y + height + config.floor_test_margin > map_h {
            position.pos.y = map_h - (height + config.floor_margin(actor.kind));
        }

        let world_x = position.world_x(camera.offset_x);

        if world_x < 0.0 {
            position.pos.x = camera.offset_x + 1.0;
            if !actor.is(ActorKind::Player) {
                body.velocity.x = -body.velocity.x;
                facing.flip();
            }
            edge.touching = true;
            continue;
        }

        if world_x > map_w - width {
            position.pos.x = camera.offset_x + map_w - width;
            if !actor.is(ActorKind::Player) {
                body.velocity.x = -body.velocity.x;
                facing.flip();
            }
            edge.touching = true;
            continue;
        }

        if position.pos.y < config.top_margin {
            position.pos.y = config.top_margin;
        }
        edge.touching = false;
    }
}
