use bevy_ecs::prelude::Component;

/// Horizontal mirroring flag, also used as movement-direction memory.
///
/// `dir` is always -1.0 (facing left) or +1.0 (facing right); renderers use
/// it as an x-scale, AI and edge resolution use it as a direction sign.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Facing {
    pub dir: f32,
}

impl Facing {
    pub fn right() -> Self {
        Self { dir: 1.0 }
    }

    pub fn left() -> Self {
        Self { dir: -1.0 }
    }

    pub fn flip(&mut self) {
        self.dir = -self.dir;
    }

    /// Face toward a target x given our own x.
    pub fn face_towards(&mut self, own_x: f32, target_x: f32) {
        self.dir = if own_x < target_x { 1.0 } else { -1.0 };
    }
}
