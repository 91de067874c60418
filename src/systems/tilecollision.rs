//! Tile probe: circular multi-sample collision against the grid.
//!
//! Six points evenly spaced around an entity's collision circle are mapped
//! to grid cells. The first sample that lands in a solid cell resolves the
//! whole probe ("first contact wins"): approaching from above lands the
//! entity on the platform's support anchor, approaching from below bumps it
//! back down. Out-of-range samples read as empty cells, so the probe is
//! total and the tick can never fault here.

use bevy_ecs::prelude::*;
use glam::Vec2;
use smallvec::SmallVec;

use crate::components::circlecollider::CircleCollider;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::camera::Camera;
use crate::resources::simconfig::SimConfig;
use crate::resources::tilegrid::TileGrid;

/// Outcome of a probe. "No contact" is the normal case and is represented by
/// `None` at the call site, not by an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TileContact {
    /// Solid cell reached from above; `anchor_y` is the support height.
    Landing { anchor_y: f32 },
    /// Solid cell reached from below.
    Ceiling,
}

/// Probe a collision circle against the grid.
///
/// `center` is in world space. Samples are taken at 0°, 60°, ... 300° on the
/// circle; the first sample inside a solid cell decides the outcome by
/// comparing the circle center against the cell's support anchor.
pub fn probe_circle(grid: &TileGrid, center: Vec2, radius: f32) -> Option<TileContact> {
    let samples: SmallVec<[Vec2; 6]> = (0..6)
        .map(|i| {
            let theta = (i as f32) * 60.0_f32.to_radians();
            center + radius * Vec2::new(theta.cos(), theta.sin())
        })
        .collect();

    for sample in samples {
        let (col, row) = grid.cell_of(sample.x, sample.y);
        if !grid.tile_at(col, row).is_solid() {
            continue;
        }
        let anchor_y = grid.support_anchor_y(row);
        if anchor_y < center.y {
            return Some(TileContact::Ceiling);
        }
        return Some(TileContact::Landing { anchor_y });
    }
    None
}

/// Resolve every moving entity against the tile grid.
///
/// At most one correction applies per entity per tick. Landing zeroes
/// vertical velocity and rests the circle's lowest point exactly on the
/// support anchor; a ceiling contact imparts a small downward bounce.
pub fn tile_collision(
    grid: Option<Res<TileGrid>>,
    camera: Res<Camera>,
    config: Res<SimConfig>,
    mut query: Query<(&mut MapPosition, &mut RigidBody, &CircleCollider)>,
) {
    let Some(grid) = grid else {
        return;
    };
    for (mut position, mut body, circle) in query.iter_mut() {
        if body.frozen {
            continue;
        }
        let r = circle.radius;
        let center = Vec2::new(position.world_x(camera.offset_x) + r, position.pos.y + r);
        match probe_circle(&grid, center, r) {
            Some(TileContact::Landing { anchor_y }) => {
                body.velocity.y = 0.0;
                position.pos.y = anchor_y - 2.0 * r;
            }
            Some(TileContact::Ceiling) => {
                body.velocity.y = config.ceiling_bump;
            }
            None => {}
        }
    }
}
