//! Scrolling camera state.
//!
//! A single horizontal scroll offset applied to world-space draw coordinates,
//! plus the per-tick frame shift subtracted from non-player actors while the
//! player is held at the camera midline. The offset is clamped so the view
//! never scrolls past either map edge.

use bevy_ecs::prelude::Resource;

/// Horizontal camera state for the current level.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct Camera {
    /// Scroll offset in pixels, always within `[-(map_w - screen_w), 0]`.
    pub offset_x: f32,
    /// Pixel delta applied to non-player actors this tick (0 when the
    /// player is not pinned to the midline).
    pub frame_shift: f32,
}

impl Camera {
    pub fn reset(&mut self) {
        self.offset_x = 0.0;
        self.frame_shift = 0.0;
    }

    /// Clamp the offset to the legal scroll range for a map/screen pair.
    pub fn clamp_offset(&mut self, map_pixel_width: f32, screen_width: f32) {
        let min = -(map_pixel_width - screen_width).max(0.0);
        self.offset_x = self.offset_x.clamp(min, 0.0);
    }
}
