//! Pairwise collision events and the combat observer.
//!
//! The collision detector only reports overlapping pairs; all game meaning
//! lives here. The observer resolves, in order of the pair's kinds:
//! player-vs-enemy combat (stomp or lethal contact), player-vs-coin pickup,
//! player-vs-asteroid instant defeat, and enemy-vs-enemy redirection.
//!
//! A stale pair (either entity despawned earlier in the tick) is a no-op for
//! this tick, logged and skipped, never a fault of the simulation step.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::actor::{Actor, ActorKind};
use crate::components::actorstate::ActorState;
use crate::components::boxcollider::BoxCollider;
use crate::components::facing::Facing;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::events::sfx::SfxCmd;
use crate::resources::roundstate::RoundState;
use crate::resources::simconfig::SimConfig;

/// Event fired when two actors' bounding boxes overlap.
///
/// No ordering guarantee between `a` and `b`; the observer sorts out which
/// rule applies from the actors' kinds.
#[derive(Event, Debug, Clone, Copy)]
pub struct CollisionEvent {
    pub a: Entity,
    pub b: Entity,
}

type ActorQuery = (
    &'static Actor,
    &'static mut ActorState,
    &'static mut MapPosition,
    &'static mut RigidBody,
    &'static mut Facing,
    &'static BoxCollider,
);

type ActorItem<'a> = (
    &'a Actor,
    Mut<'a, ActorState>,
    Mut<'a, MapPosition>,
    Mut<'a, RigidBody>,
    Mut<'a, Facing>,
    &'a BoxCollider,
);

/// Observer resolving every entity-pair interaction.
///
/// Contract
/// - Never despawns enemies: a defeated enemy stays in the world, frozen in
///   its death pose, until the level resets.
/// - Contact other than a clean stomp is always lethal to the player; there
///   is no health model.
/// - Re-triggering an outcome on an already-resolved actor (attacking an
///   already-dying player, stomping a defeated enemy) is a no-op.
pub fn combat_observer(
    trigger: On<CollisionEvent>,
    mut commands: Commands,
    mut round: ResMut<RoundState>,
    config: Res<SimConfig>,
    mut sfx: MessageWriter<SfxCmd>,
    mut actors: Query<ActorQuery>,
) {
    let a = trigger.event().a;
    let b = trigger.event().b;

    let Ok([ea, eb]) = actors.get_many_mut([a, b]) else {
        debug!("collision pair {:?}/{:?} no longer resolvable, skipping", a, b);
        return;
    };

    let kinds = (ea.0.kind, eb.0.kind);
    match kinds {
        (ActorKind::Player, ActorKind::Enemy) => {
            resolve_combat(ea, eb, &mut round, &config, &mut sfx);
        }
        (ActorKind::Enemy, ActorKind::Player) => {
            resolve_combat(eb, ea, &mut round, &config, &mut sfx);
        }
        (ActorKind::Player, ActorKind::Coin) => {
            resolve_pickup(b, &mut commands, &mut round, &config, &mut sfx);
        }
        (ActorKind::Coin, ActorKind::Player) => {
            resolve_pickup(a, &mut commands, &mut round, &config, &mut sfx);
        }
        (ActorKind::Player, ActorKind::Asteroid) => {
            resolve_hazard_contact(ea, &mut round, &config);
        }
        (ActorKind::Asteroid, ActorKind::Player) => {
            resolve_hazard_contact(eb, &mut round, &config);
        }
        (ActorKind::Enemy, ActorKind::Enemy) => {
            resolve_enemy_bounce(ea, eb);
        }
        _ => {}
    }
}

/// Player-vs-enemy contact: stomp defeats the enemy, anything else kills the
/// player.
fn resolve_combat(
    player: ActorItem<'_>,
    enemy: ActorItem<'_>,
    round: &mut RoundState,
    config: &SimConfig,
    sfx: &mut MessageWriter<SfxCmd>,
) {
    let (_, mut p_state, mut p_pos, mut p_body, p_facing, p_box) = player;
    let (_, mut e_state, e_pos, mut e_body, mut e_facing, e_box) = enemy;

    if round.player_dead || p_state.is_terminal() || e_state.is_terminal() {
        return;
    }

    // Stomp: contact from above, judged against the enemy's vertical
    // midpoint so the test is symmetric in x.
    let player_bottom = p_pos.pos.y + p_box.size.y;
    let enemy_mid = e_pos.pos.y + e_box.size.y * 0.5;
    if player_bottom < enemy_mid {
        *e_state = ActorState::Defeated;
        e_body.stop();
        e_body.frozen = true;
        sfx.write(SfxCmd::Moan);
        if !round.hazard_active {
            round.score += config.stomp_bonus;
        }
    } else {
        e_facing.face_towards(e_pos.pos.x, p_pos.pos.x);
        e_body.stop();
        *e_state = ActorState::Attacking;
        sfx.write(SfxCmd::Roar);
        kill_player(&mut p_state, &mut p_pos, &mut p_body, &p_facing, round, config);
    }
}

/// Coin pickup: the coin is removed, score and the remaining count move.
fn resolve_pickup(
    coin: Entity,
    commands: &mut Commands,
    round: &mut RoundState,
    config: &SimConfig,
    sfx: &mut MessageWriter<SfxCmd>,
) {
    if round.player_dead {
        return;
    }
    commands.entity(coin).try_despawn();
    round.score += config.coin_value;
    round.coins_remaining = round.coins_remaining.saturating_sub(1);
    sfx.write(SfxCmd::Coin);
}

/// Touching the falling asteroid is instantly lethal.
fn resolve_hazard_contact(player: ActorItem<'_>, round: &mut RoundState, config: &SimConfig) {
    let (_, mut p_state, mut p_pos, mut p_body, p_facing, _) = player;
    if round.player_dead || p_state.is_terminal() {
        return;
    }
    kill_player(&mut p_state, &mut p_pos, &mut p_body, &p_facing, round, config);
}

/// Two living enemies overlapping bounce apart: both reverse velocity and
/// facing, which keeps them from stacking.
fn resolve_enemy_bounce(ea: ActorItem<'_>, eb: ActorItem<'_>) {
    let (_, a_state, _, mut a_body, mut a_facing, _) = ea;
    let (_, b_state, _, mut b_body, mut b_facing, _) = eb;
    if a_state.is_terminal() || b_state.is_terminal() {
        return;
    }
    a_body.velocity.x = -a_body.velocity.x;
    b_body.velocity.x = -b_body.velocity.x;
    a_facing.flip();
    b_facing.flip();
}

/// The player death sequence: stop, nudge forward, fall out of the frame in
/// the death pose. The clip switch follows from the state change.
pub fn kill_player(
    state: &mut ActorState,
    pos: &mut MapPosition,
    body: &mut RigidBody,
    facing: &Facing,
    round: &mut RoundState,
    config: &SimConfig,
) {
    *state = ActorState::Dying;
    body.stop();
    body.velocity.y = config.death_fall_velocity;
    pos.pos.x += 10.0 * facing.dir;
    round.player_dead = true;
}
