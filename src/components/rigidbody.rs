//! Kinematic body component.
//!
//! The [`RigidBody`] component stores velocity in units per millisecond plus
//! two switches the movement system honors: `gravity` (coins and the idle
//! asteroid opt out of the gravity force) and `frozen` (defeated actors keep
//! their position but skip all integration).

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Velocity and integration switches for a simulated entity.
#[derive(Component, Clone, Copy, Debug)]
pub struct RigidBody {
    /// Current velocity in world units per millisecond.
    pub velocity: Vec2,
    /// Whether the per-tick gravity force applies to this body.
    pub gravity: bool,
    /// When true, the movement system skips this entity entirely.
    pub frozen: bool,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Zero velocity, gravity on, not frozen.
    pub fn new() -> Self {
        Self {
            velocity: Vec2::ZERO,
            gravity: true,
            frozen: false,
        }
    }

    pub fn without_gravity() -> Self {
        Self {
            gravity: false,
            ..Self::new()
        }
    }

    /// Zero out velocity, keeping flags.
    pub fn stop(&mut self) {
        self.velocity = Vec2::ZERO;
    }
}
