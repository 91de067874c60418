//! Camera controller.
//!
//! The player moves freely until its screen-space x crosses the midline
//! threshold while heading away from it and the camera still has scroll
//! headroom. Past that point the player is held at the midline and the world
//! scrolls instead: the per-tick frame shift is subtracted from every other
//! actor's x, and the tile grid is drawn translated by the accumulated
//! offset. The offset never leaves `[-(map_w - screen_w), 0]`.

use bevy_ecs::prelude::*;

use crate::components::actor::{Actor, ActorKind};
use crate::components::boxcollider::BoxCollider;
use crate::components::edgecontact::EdgeContact;
use crate::components::facing::Facing;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::camera::Camera;
use crate::resources::screensize::ScreenSize;
use crate::resources::simconfig::SimConfig;
use crate::resources::tilegrid::TileGrid;

/// Pure midline-scroll computation.
///
/// Returns `(new_player_x, new_offset, frame_shift)`. The shift magnitude is
/// one pixel plus the floor of the player's speed times the configured scale
/// factor, signed by travel direction.
pub fn scroll_for_player(
    player_x: f32,
    velocity_x: f32,
    facing: f32,
    player_width: f32,
    map_pixel_width: f32,
    screen_width: f32,
    offset: f32,
    scale_factor: f32,
) -> (f32, f32, f32) {
    let midline = screen_width / 2.0 - player_width;
    let min_offset = -(map_pixel_width - screen_width).max(0.0);

    if facing > 0.0 && player_x > midline && offset > min_offset {
        let shift = 1.0 + (velocity_x.abs() * scale_factor).floor();
        let new_offset = (offset - shift).clamp(min_offset, 0.0);
        return (midline, new_offset, shift);
    }
    if facing < 0.0 && player_x < midline && offset < 0.0 {
        let shift = -(1.0 + (velocity_x.abs() * scale_factor).floor());
        let new_offset = (offset - shift).clamp(min_offset, 0.0);
        return (midline, new_offset, shift);
    }
    (player_x, offset, 0.0)
}

/// Apply the midline scroll and shift the rest of the world.
///
/// A player pinned against a world edge never scrolls the camera; that is
/// the edge system's territory.
pub fn camera_update(
    grid: Option<Res<TileGrid>>,
    screen: Res<ScreenSize>,
    config: Res<SimConfig>,
    mut camera: ResMut<Camera>,
    mut query: Query<(
        &Actor,
        &mut MapPosition,
        &RigidBody,
        &Facing,
        &BoxCollider,
        Option<&EdgeContact>,
    )>,
) {
    let Some(grid) = grid else {
        return;
    };
    camera.frame_shift = 0.0;

    let mut shift = 0.0;
    for (actor, mut position, body, facing, bbox, edge) in query.iter_mut() {
        if !actor.is(ActorKind::Player) {
            continue;
        }
        if edge.is_some_and(|e| e.touching) {
            break;
        }
        let (new_x, new_offset, frame_shift) = scroll_for_player(
            position.pos.x,
            body.velocity.x,
            facing.dir,
            bbox.size.x,
            grid.pixel_width(),
            screen.w,
            camera.offset_x,
            config.camera_scale,
        );
        position.pos.x = new_x;
        camera.offset_x = new_offset;
        camera.frame_shift = frame_shift;
        shift = frame_shift;
        break;
    }

    if shift != 0.0 {
        for (actor, mut position, _, _, _, _) in query.iter_mut() {
            if actor.is(ActorKind::Player) {
                continue;
            }
            position.pos.x -= shift;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_right_shifts_world() {
        // Player past the midline, moving right, camera at the left edge.
        let (x, offset, shift) =
            scroll_for_player(300.0, 0.08, 1.0, 64.0, 2048.0, 512.0, 0.0, 20.0);
        assert_eq!(shift, 2.0); // 1 + floor(0.08 * 20)
        assert_eq!(offset, -2.0);
        assert_eq!(x, 512.0 / 2.0 - 64.0);
    }

    #[test]
    fn no_scroll_without_headroom() {
        let min_offset = -(2048.0 - 512.0);
        let (x, offset, shift) =
            scroll_for_player(300.0, 0.08, 1.0, 64.0, 2048.0, 512.0, min_offset, 20.0);
        assert_eq!(shift, 0.0);
        assert_eq!(offset, min_offset);
        assert_eq!(x, 300.0);
    }

    #[test]
    fn scroll_left_is_symmetric() {
        let (x, offset, shift) =
            scroll_for_player(100.0, -0.08, -1.0, 64.0, 2048.0, 512.0, -100.0, 20.0);
        assert_eq!(shift, -2.0);
        assert_eq!(offset, -98.0);
        assert_eq!(x, 512.0 / 2.0 - 64.0);
    }

    #[test]
    fn offset_never_leaves_bounds() {
        let (_, offset, _) =
            scroll_for_player(100.0, -0.5, -1.0, 64.0, 2048.0, 512.0, -3.0, 20.0);
        assert!(offset <= 0.0);
        let (_, offset, _) =
            scroll_for_player(400.0, 0.5, 1.0, 64.0, 2048.0, 512.0, -1535.0, 20.0);
        assert!(offset >= -(2048.0 - 512.0));
    }
}
