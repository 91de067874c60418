//! Screen size resource.
//!
//! Fixed view dimensions in pixels. The camera and edge-resolution systems
//! read this; the simulation never resizes it at runtime.

use bevy_ecs::prelude::Resource;

/// View size in pixels.
#[derive(Resource, Clone, Copy)]
pub struct ScreenSize {
    pub w: f32,
    pub h: f32,
}
