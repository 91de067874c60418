//! Input intent application.
//!
//! Translates the held/edge intents in
//! [`IntentState`](crate::resources::intents::IntentState) into player
//! velocity and explicit state switches. State is never inferred from
//! velocity; holding a direction re-applies `Running` every tick, which the
//! animation component treats as a no-op so playback does not stutter.

use bevy_ecs::prelude::*;

use crate::components::actor::{Actor, ActorKind};
use crate::components::actorstate::ActorState;
use crate::components::edgecontact::EdgeContact;
use crate::components::facing::Facing;
use crate::components::rigidbody::RigidBody;
use crate::components::timer::{DelayTimer, TimerAction};
use crate::resources::intents::IntentState;
use crate::resources::roundstate::RoundState;
use crate::resources::simconfig::SimConfig;

/// Apply movement and jump intents to the player.
///
/// A dead player ignores input entirely. Facing only follows the movement
/// direction while the player is not pinned against a world edge, matching
/// the edge-bounce rules.
pub fn player_intent_system(
    intents: Res<IntentState>,
    round: Res<RoundState>,
    config: Res<SimConfig>,
    mut commands: Commands,
    mut query: Query<(
        Entity,
        &Actor,
        &mut ActorState,
        &mut RigidBody,
        &mut Facing,
        &EdgeContact,
    )>,
) {
    if round.player_dead {
        return;
    }

    for (entity, actor, mut state, mut body, mut facing, edge) in query.iter_mut() {
        if !actor.is(ActorKind::Player) {
            continue;
        }
        if state.is_terminal() {
            continue;
        }

        let left = intents.move_left.held;
        let right = intents.move_right.held;

        if left && !right {
            body.velocity.x = -config.run_speed;
            if !edge.touching {
                facing.dir = -1.0;
            }
            if *state != ActorState::Jumping {
                *state = ActorState::Running;
            }
        } else if right && !left {
            body.velocity.x = config.run_speed;
            if !edge.touching {
                facing.dir = 1.0;
            }
            if *state != ActorState::Jumping {
                *state = ActorState::Running;
            }
        } else {
            body.velocity.x = 0.0;
            let released = intents.move_left.just_released || intents.move_right.just_released;
            if *state == ActorState::Running || (released && *state == ActorState::Jumping) {
                *state = ActorState::Idle;
            }
        }

        if intents.jump.just_pressed {
            *state = ActorState::Jumping;
            body.velocity.y = config.jump_velocity;
        }
        if intents.jump.just_released {
            // Settle back to idle a moment after the jump, if nothing else
            // claimed the state in the meantime.
            commands
                .entity(entity)
                .insert(DelayTimer::new(config.jump_settle_ms, TimerAction::JumpSettle));
        }
    }
}

/// Forget intent edges at the end of the tick.
pub fn clear_intent_edges(mut intents: ResMut<IntentState>) {
    intents.clear_edges();
}
