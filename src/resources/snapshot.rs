//! Per-tick render snapshot.
//!
//! The external renderer never queries the world directly; at the end of
//! every tick the snapshot system rebuilds this resource with everything a
//! draw pass needs: entity views, camera offset, and HUD data. The core
//! issues no drawing calls.

use bevy_ecs::prelude::{Entity, Resource};
use glam::Vec2;

use crate::components::actor::ActorKind;
use crate::components::actorstate::ActorState;
use crate::resources::roundstate::RoundPhase;

/// Read-only view of one entity for the renderer.
#[derive(Debug, Clone)]
pub struct EntityView {
    pub entity: Entity,
    pub kind: ActorKind,
    pub state: ActorState,
    /// Camera-space position.
    pub pos: Vec2,
    /// Horizontal mirroring: -1.0 or +1.0.
    pub facing: f32,
    pub clip_key: String,
    pub frame_index: usize,
    /// Rotation in degrees (only the asteroid spins).
    pub rotation_deg: f32,
    /// Collider size, present only while debug mode is on.
    pub debug_collider: Option<Vec2>,
}

/// Everything the renderer consumes for one frame.
#[derive(Resource, Debug, Clone, Default)]
pub struct FrameSnapshot {
    pub views: Vec<EntityView>,
    pub camera_offset: f32,
    pub frame_shift: f32,
    pub phase: RoundPhase,
    pub display_score: i64,
    pub coins_remaining: u32,
    pub player_dead: bool,
}
