//! Round state machine systems.
//!
//! Phase transitions: `Intro` accepts a single begin intent, `Playing` runs
//! the full pipeline and tracks level progress, `Finished` is terminal until
//! a restart. Completing a level (collecting every coin) starts the terminal
//! hazard sequence: an asteroid falls from above the player, homes on it
//! horizontally with the same incremental nudge the camera scroll uses, and
//! on reaching its trigger altitude defeats every living enemy, kills the
//! player, and advances the level.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::info;

use crate::components::actor::{Actor, ActorKind};
use crate::components::actorstate::{ActorState, StateClips};
use crate::components::animation::SpriteAnimation;
use crate::components::boxcollider::BoxCollider;
use crate::components::facing::Facing;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::rotation::Rotation;
use crate::components::timer::{DelayTimer, TimerAction};
use crate::events::collision::kill_player;
use crate::events::round::RoundPhaseChangedEvent;
use crate::events::sfx::SfxCmd;
use crate::resources::animationstore::AnimationStore;
use crate::resources::debugmode::DebugMode;
use crate::resources::intents::IntentState;
use crate::resources::levelstore::LevelStore;
use crate::resources::roundstate::{NextRoundPhase, PendingPhase, RoundPhase, RoundState};
use crate::resources::simconfig::SimConfig;

/// Run condition: the full per-tick pipeline only runs while playing.
pub fn phase_is_playing(round: Res<RoundState>) -> bool {
    round.phase == RoundPhase::Playing
}

/// Trigger the phase-change event if a transition is pending.
pub fn check_pending_phase(mut commands: Commands, next: Res<NextRoundPhase>) {
    if let PendingPhase::Pending(_) = next.get() {
        commands.trigger(RoundPhaseChangedEvent {});
    }
}

/// Handle the round-level intents: begin, restart, debug toggle, and the
/// debug-only enemy respawn.
pub fn round_intents(
    intents: Res<IntentState>,
    config: Res<SimConfig>,
    debug: Option<Res<DebugMode>>,
    mut round: ResMut<RoundState>,
    mut next: ResMut<NextRoundPhase>,
    mut commands: Commands,
    mut enemies: Query<(Entity, &Actor, &mut ActorState, &mut RigidBody)>,
) {
    if intents.toggle_debug.just_pressed {
        if debug.is_some() {
            commands.remove_resource::<DebugMode>();
        } else {
            commands.insert_resource(DebugMode {});
        }
    }

    match round.phase {
        RoundPhase::Intro => {
            if intents.begin.just_pressed {
                next.set(RoundPhase::Playing);
            }
        }
        RoundPhase::Playing => {
            if intents.restart.just_pressed && round.player_dead {
                next.set(RoundPhase::Playing);
            }
            if intents.respawn_enemy.just_pressed && debug.is_some() {
                for (entity, actor, mut state, mut body) in enemies.iter_mut() {
                    if actor.is(ActorKind::Enemy) && *state == ActorState::Defeated {
                        *state = ActorState::Spawning;
                        body.stop();
                        body.frozen = false;
                        commands.entity(entity).insert(DelayTimer::new(
                            config.spawn_delay_ms,
                            TimerAction::EnemyActivate,
                        ));
                    }
                }
            }
        }
        RoundPhase::Finished => {
            if intents.restart.just_pressed {
                round.level_index = 1;
                next.set(RoundPhase::Playing);
            }
        }
    }
}

/// Watch the remaining-coins count and start the hazard sequence exactly
/// once when it reaches zero.
pub fn level_complete_check(
    store: Res<AnimationStore>,
    config: Res<SimConfig>,
    mut round: ResMut<RoundState>,
    mut commands: Commands,
    positions: Query<(&Actor, &MapPosition)>,
) {
    if round.level_complete || round.coins_total == 0 || round.coins_remaining > 0 {
        return;
    }
    round.level_complete = true;
    round.hazard_active = true;
    info!("level {} complete, hazard falling", round.level_index);

    let player_x = positions
        .iter()
        .find(|(actor, _)| actor.is(ActorKind::Player))
        .map(|(_, pos)| pos.pos.x)
        .unwrap_or(0.0);

    let size = store
        .get("asteroid")
        .map(|clip| Vec2::from(clip.frame_size()))
        .unwrap_or(Vec2::splat(32.0));

    commands.spawn((
        Actor::new(ActorKind::Asteroid),
        ActorState::Idle,
        StateClips::new()
            .with(ActorState::Idle, "asteroid")
            .with(ActorState::Dying, "explosion"),
        SpriteAnimation::new("asteroid"),
        MapPosition::new(player_x, -20.0),
        {
            let mut body = RigidBody::without_gravity();
            body.velocity.y = config.hazard_fall_velocity;
            body
        },
        Facing::right(),
        BoxCollider::new(size.x, size.y),
        Rotation::new(90.0),
    ));
}

/// Drive the falling hazard: horizontal homing while airborne, then the
/// detonation that ends the level.
pub fn asteroid_control(
    config: Res<SimConfig>,
    levels: Res<LevelStore>,
    mut round: ResMut<RoundState>,
    mut next: ResMut<NextRoundPhase>,
    mut sfx: MessageWriter<SfxCmd>,
    mut actors: Query<(
        Entity,
        &Actor,
        &mut ActorState,
        &mut MapPosition,
        &mut RigidBody,
        &mut Facing,
        &mut SpriteAnimation,
        Option<&mut Rotation>,
    )>,
) {
    if !round.hazard_active {
        return;
    }

    let mut player_x = None;
    let mut asteroid = None;
    for (entity, actor, state, position, ..) in actors.iter_mut() {
        match actor.kind {
            ActorKind::Player => player_x = Some(position.pos.x),
            ActorKind::Asteroid => asteroid = Some((entity, position.pos, *state)),
            _ => {}
        }
    }
    let Some((asteroid_entity, asteroid_pos, asteroid_state)) = asteroid else {
        return;
    };
    if asteroid_state == ActorState::Dying {
        return;
    }

    if asteroid_pos.y <= config.hazard_trigger_y {
        // Still falling: nudge toward the player, keep spinning.
        if let Ok((_, _, _, _, mut body, _, _, rotation)) = actors.get_mut(asteroid_entity) {
            match player_x {
                Some(px) if asteroid_pos.x > px => body.velocity.x -= config.hazard_nudge,
                Some(_) => body.velocity.x += config.hazard_nudge,
                None => {}
            }
            if let Some(mut rotation) = rotation {
                rotation.degrees += 1.0;
            }
        }
        return;
    }

    // Detonation: freeze the asteroid in its explosion pose, defeat every
    // living enemy, and the level is over for the player too.
    if let Ok((_, _, mut state, _, mut body, _, mut anim, _)) = actors.get_mut(asteroid_entity) {
        *state = ActorState::Dying;
        body.stop();
        body.frozen = true;
        anim.set_clip("explosion");
        anim.pause_at_frame(20);
    }

    for (_, actor, mut state, mut position, mut body, facing, _, _) in actors.iter_mut() {
        match actor.kind {
            ActorKind::Enemy if !state.is_terminal() => {
                *state = ActorState::Defeated;
                body.stop();
                body.frozen = true;
                sfx.write(SfxCmd::Moan);
            }
            ActorKind::Player if !state.is_terminal() => {
                kill_player(&mut state, &mut position, &mut body, &facing, &mut round, &config);
            }
            _ => {}
        }
    }

    round.level_index += 1;
    if round.level_index > levels.last_level() {
        next.set(RoundPhase::Finished);
    } else {
        next.set(RoundPhase::Playing);
    }
}
