//! Enemy behavior control.
//!
//! Enemies run `Spawning -> Running -> (Attacking | Defeated)`. The spawn-in
//! sequence holds the enemy still in its spawn pose for a fixed delay; when
//! the delay timer fires the enemy picks its initial pursuit direction
//! toward the player. Independently, the stalk pulse re-evaluates pursuit
//! for every living enemy at a fixed interval; between pulses an enemy
//! commits to its direction, which is what makes the pursuit deliberately
//! coarse.
//!
//! All of this runs from timer events inside the tick; nothing mutates an
//! enemy from outside the tick function. A fired timer whose entity is gone
//! (level was reset) is a logged no-op.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::actor::{Actor, ActorKind};
use crate::components::actorstate::ActorState;
use crate::components::facing::Facing;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::timer::TimerAction;
use crate::events::timer::{StalkTick, TimerFired};
use crate::resources::intents::IntentState;
use crate::resources::roundstate::RoundState;
use crate::resources::simconfig::SimConfig;

/// Observer applying one-shot timer actions.
pub fn ai_timer_observer(
    trigger: On<TimerFired>,
    config: Res<SimConfig>,
    intents: Res<IntentState>,
    positions: Query<(&Actor, &MapPosition)>,
    mut movers: Query<(&Actor, &mut ActorState, &mut RigidBody, &mut Facing)>,
) {
    let event = trigger.event();
    match event.action {
        TimerAction::EnemyActivate => {
            let Some(player_x) = player_x(&positions) else {
                debug!("enemy activation with no player present, skipping");
                return;
            };
            let Ok((actor, mut state, mut body, mut facing)) = movers.get_mut(event.entity)
            else {
                debug!("activation timer fired for missing entity {:?}", event.entity);
                return;
            };
            if !actor.is(ActorKind::Enemy) || state.is_terminal() {
                return;
            }
            let Ok((_, own_pos)) = positions.get(event.entity) else {
                return;
            };
            pursue(own_pos.pos.x, player_x, &mut body, &mut facing, &config);
            *state = ActorState::Running;
        }
        TimerAction::JumpSettle => {
            let Ok((actor, mut state, _, _)) = movers.get_mut(event.entity) else {
                debug!("jump settle timer fired for missing entity {:?}", event.entity);
                return;
            };
            if !actor.is(ActorKind::Player) {
                return;
            }
            if *state == ActorState::Jumping
                && !intents.move_left.held
                && !intents.move_right.held
            {
                *state = ActorState::Idle;
            }
        }
    }
}

/// Observer applying the periodic stalk re-target to every living enemy.
///
/// Spawning, dying, and defeated enemies are excluded; everyone else turns
/// toward where the player is right now and keeps that heading for the next
/// interval.
pub fn stalk_observer(
    _trigger: On<StalkTick>,
    config: Res<SimConfig>,
    positions: Query<(&Actor, &MapPosition)>,
    mut movers: Query<(Entity, &Actor, &ActorState, &mut RigidBody, &mut Facing)>,
) {
    let Some(player_x) = player_x(&positions) else {
        return;
    };
    for (entity, actor, state, mut body, mut facing) in movers.iter_mut() {
        if !actor.is(ActorKind::Enemy) {
            continue;
        }
        if *state == ActorState::Spawning || state.is_terminal() {
            continue;
        }
        let Ok((_, own_pos)) = positions.get(entity) else {
            continue;
        };
        pursue(own_pos.pos.x, player_x, &mut body, &mut facing, &config);
    }
}

/// Raise the "all enemies active" readiness signal once every enemy in the
/// level has finished spawn-in.
pub fn enemy_readiness(
    mut round: ResMut<RoundState>,
    query: Query<(&Actor, &ActorState)>,
) {
    if round.all_enemies_active {
        return;
    }
    let mut seen = false;
    for (actor, state) in query.iter() {
        if !actor.is(ActorKind::Enemy) {
            continue;
        }
        if *state == ActorState::Spawning {
            return;
        }
        seen = true;
    }
    if seen {
        round.all_enemies_active = true;
        info!("all enemies active");
    }
}

fn player_x(positions: &Query<(&Actor, &MapPosition)>) -> Option<f32> {
    positions
        .iter()
        .find(|(actor, _)| actor.is(ActorKind::Player))
        .map(|(_, pos)| pos.pos.x)
}

/// Point an enemy's velocity and facing at a target x.
fn pursue(own_x: f32, target_x: f32, body: &mut RigidBody, facing: &mut Facing, config: &SimConfig) {
    if own_x < target_x {
        body.velocity.x = config.enemy_speed;
        facing.dir = 1.0;
    } else {
        body.velocity.x = -config.enemy_speed;
        facing.dir = -1.0;
    }
}
