//! Animation systems.
//!
//! - [`animation_state_sync`] makes each actor play the clip its behavior
//!   state maps to, refreshing collider sizes when the clip changes. The
//!   clip is always looked up *from* the state; no behavior is ever decided
//!   by comparing animation identities.
//! - [`animation_advance`] progresses playback clocks against the per-frame
//!   durations, honoring pause-at-frame and non-looping clips.
//!
//! Re-applying the current state every tick is free: the clip switch is a
//! no-op when the key is unchanged, so held movement keys do not stutter
//! playback.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::actorstate::{ActorState, StateClips};
use crate::components::animation::SpriteAnimation;
use crate::components::boxcollider::BoxCollider;
use crate::components::circlecollider::CircleCollider;
use crate::resources::animationstore::AnimationStore;
use crate::resources::worldtime::WorldTime;

/// Follow the behavior state into the mapped clip.
///
/// Collider sizes derive from the new clip's frame size, so they can differ
/// per animation as the actor changes behavior.
pub fn animation_state_sync(
    store: Res<AnimationStore>,
    mut query: Query<(
        &ActorState,
        &StateClips,
        &mut SpriteAnimation,
        Option<&mut BoxCollider>,
        Option<&mut CircleCollider>,
    )>,
) {
    for (state, clips, mut anim, bbox, circle) in query.iter_mut() {
        let Some(target_key) = clips.clip_for(*state) else {
            continue;
        };
        if anim.clip_key == target_key {
            continue;
        }
        anim.set_clip(target_key);

        let Some(clip) = store.get(target_key) else {
            debug!("state {:?} maps to unknown clip '{}'", state, target_key);
            continue;
        };
        let (w, h) = clip.frame_size();
        if let Some(mut bbox) = bbox {
            bbox.size.x = w;
            bbox.size.y = h;
        }
        if let Some(mut circle) = circle {
            circle.radius = w.min(h) / 2.0;
        }
    }
}

/// Advance playback clocks.
///
/// When the accumulated time exceeds the current frame's duration the cursor
/// moves on, wrapping for looping clips and holding the last frame
/// otherwise. A pause target halts playback exactly at that frame.
pub fn animation_advance(
    store: Res<AnimationStore>,
    time: Res<WorldTime>,
    mut query: Query<&mut SpriteAnimation>,
) {
    for mut anim in query.iter_mut() {
        if !anim.playing {
            continue;
        }
        let Some(clip) = store.get(&anim.clip_key) else {
            debug!("entity references unknown clip '{}'", anim.clip_key);
            continue;
        };
        if clip.frames.is_empty() {
            continue;
        }

        anim.elapsed_ms += time.delta_ms;
        loop {
            let index = anim.frame_index.min(clip.last_frame());
            let duration = clip.frames[index].duration_ms;
            if anim.elapsed_ms < duration {
                break;
            }
            anim.elapsed_ms -= duration;

            if anim.paused_at == Some(index) {
                anim.playing = false;
                break;
            }
            if index + 1 > clip.last_frame() {
                if clip.looped {
                    anim.frame_index = 0;
                } else {
                    anim.playing = false;
                    break;
                }
            } else {
                anim.frame_index = index + 1;
            }
            if anim.paused_at == Some(anim.frame_index) {
                anim.playing = false;
                break;
            }
        }
    }
}
