//! Render snapshot production.
//!
//! Rebuilds the [`FrameSnapshot`](crate::resources::snapshot::FrameSnapshot)
//! resource at the end of every tick. The renderer reads only this; the
//! simulation issues no drawing calls and exposes no live world access.

use bevy_ecs::prelude::*;

use crate::components::actor::Actor;
use crate::components::actorstate::ActorState;
use crate::components::animation::SpriteAnimation;
use crate::components::boxcollider::BoxCollider;
use crate::components::facing::Facing;
use crate::components::mapposition::MapPosition;
use crate::components::rotation::Rotation;
use crate::resources::camera::Camera;
use crate::resources::debugmode::DebugMode;
use crate::resources::roundstate::RoundState;
use crate::resources::snapshot::{EntityView, FrameSnapshot};

pub fn build_snapshot(
    camera: Res<Camera>,
    round: Res<RoundState>,
    debug: Option<Res<DebugMode>>,
    mut snapshot: ResMut<FrameSnapshot>,
    query: Query<(
        Entity,
        &Actor,
        &ActorState,
        &MapPosition,
        &Facing,
        &SpriteAnimation,
        Option<&Rotation>,
        Option<&BoxCollider>,
    )>,
) {
    snapshot.views.clear();
    for (entity, actor, state, position, facing, anim, rotation, bbox) in query.iter() {
        snapshot.views.push(EntityView {
            entity,
            kind: actor.kind,
            state: *state,
            pos: position.pos,
            facing: facing.dir,
            clip_key: anim.clip_key.clone(),
            frame_index: anim.frame_index,
            rotation_deg: rotation.map(|r| r.degrees).unwrap_or(0.0),
            debug_collider: debug
                .as_ref()
                .and_then(|_| bbox.map(|b| b.size)),
        });
    }
    snapshot.camera_offset = camera.offset_x;
    snapshot.frame_shift = camera.frame_shift;
    snapshot.phase = round.phase;
    snapshot.display_score = round.display_score();
    snapshot.coins_remaining = round.coins_remaining;
    snapshot.player_dead = round.player_dead;
}
