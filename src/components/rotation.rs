use bevy_ecs::prelude::Component;

/// Rotation angle in degrees. Only the falling asteroid spins; the renderer
/// applies it as a sprite transform.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Rotation {
    pub degrees: f32,
}

impl Rotation {
    pub fn new(degrees: f32) -> Self {
        Self { degrees }
    }
}
