use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Axis-aligned bounding box used for pairwise entity collision tests.
///
/// The box hangs from the entity's [`MapPosition`](super::mapposition::MapPosition)
/// (top-left corner). Its size follows the active animation's frame size and
/// is refreshed whenever the clip changes.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vec2,
}

impl BoxCollider {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
        }
    }

    /// Returns (min, max) of the AABB for a given entity position.
    pub fn aabb(&self, position: Vec2) -> (Vec2, Vec2) {
        (position, position + self.size)
    }

    /// AABB vs AABB overlap test against another collider at a different
    /// entity position. Zero-width or zero-height boxes never overlap.
    pub fn overlaps(&self, position: Vec2, other: &Self, other_position: Vec2) -> bool {
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);
        min_a.x < max_b.x && max_a.x > min_b.x && min_a.y < max_b.y && max_a.y > min_b.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_boxes() {
        let a = BoxCollider::new(20.0, 20.0);
        let b = BoxCollider::new(20.0, 20.0);
        assert!(a.overlaps(Vec2::new(10.0, 10.0), &b, Vec2::new(15.0, 5.0)));
    }

    #[test]
    fn separated_boxes() {
        let a = BoxCollider::new(10.0, 10.0);
        let b = BoxCollider::new(10.0, 10.0);
        assert!(!a.overlaps(Vec2::new(0.0, 0.0), &b, Vec2::new(20.0, 0.0)));
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = BoxCollider::new(10.0, 10.0);
        let b = BoxCollider::new(10.0, 10.0);
        assert!(!a.overlaps(Vec2::new(0.0, 0.0), &b, Vec2::new(10.0, 0.0)));
    }

    #[test]
    fn zero_size_never_overlaps() {
        let a = BoxCollider::new(0.0, 0.0);
        let b = BoxCollider::new(10.0, 10.0);
        assert!(!a.overlaps(Vec2::new(5.0, 5.0), &b, Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = BoxCollider::new(20.0, 20.0);
        let b = BoxCollider::new(20.0, 20.0);
        let pa = Vec2::new(10.0, 10.0);
        let pb = Vec2::new(15.0, 5.0);
        assert_eq!(a.overlaps(pa, &b, pb), b.overlaps(pb, &a, pa));
    }
}
