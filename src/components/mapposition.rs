use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Camera-space position (top-left pivot) of an entity.
///
/// Actor positions are kept in camera space, matching how the camera scroll
/// works: when the world scrolls, the per-tick frame shift is subtracted
/// from every non-player actor's x. The tile grid alone is addressed in
/// world space, so grid queries subtract the camera offset first.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub pos: Vec2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
        }
    }

    /// World-space x for a given camera offset.
    pub fn world_x(&self, camera_offset: f32) -> f32 {
        self.pos.x - camera_offset
    }
}
