use bevy_ecs::prelude::Component;

/// Collision circle used by the tile probe.
///
/// Centered at the entity position plus the radius on both axes, so the
/// circle sits inside the sprite's frame. The radius follows the active
/// animation's frame size, like [`BoxCollider`](super::boxcollider::BoxCollider).
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct CircleCollider {
    pub radius: f32,
}

impl CircleCollider {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }
}
