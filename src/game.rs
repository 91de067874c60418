//! World construction and level orchestration.
//!
//! [`init_world`] builds the ECS world with every resource and observer the
//! simulation needs; [`build_schedule`] wires the per-tick pipeline in its
//! fixed order; [`tick`] advances the clock and runs one full pass. The
//! embedder owns the loop: push intents, call `tick`, read the snapshot.
//!
//! Level construction lives in the `enter_play` hook, which the round
//! observer runs on every transition into `Playing`: the previous level's
//! entities (and with them all pending timers) are despawned, the new tile
//! grid is installed, and the player, enemies, and coins are spawned fresh.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use bevy_ecs::schedule::ExecutorKind;
use crossbeam_channel::Receiver;
use glam::Vec2;
use log::{error, info};

use crate::components::actor::{Actor, ActorKind};
use crate::components::actorstate::{ActorState, StateClips};
use crate::components::animation::SpriteAnimation;
use crate::components::boxcollider::BoxCollider;
use crate::components::circlecollider::CircleCollider;
use crate::components::edgecontact::EdgeContact;
use crate::components::facing::Facing;
use crate::components::mapposition::MapPosition;
use crate::components::persistent::Persistent;
use crate::components::rigidbody::RigidBody;
use crate::components::timer::{DelayTimer, StalkTimer, TimerAction};
use crate::events::collision::combat_observer;
use crate::events::round::observe_round_phase_change;
use crate::events::sfx::SfxCmd;
use crate::resources::animationstore::AnimationStore;
use crate::resources::camera::Camera;
use crate::resources::intents::IntentState;
use crate::resources::levelstore::LevelStore;
use crate::resources::roundstate::{NextRoundPhase, RoundState};
use crate::resources::screensize::ScreenSize;
use crate::resources::sfx::setup_sfx;
use crate::resources::simconfig::SimConfig;
use crate::resources::snapshot::FrameSnapshot;
use crate::resources::systemsstore::SystemsStore;
use crate::resources::worldtime::WorldTime;
use crate::systems::ai::{ai_timer_observer, enemy_readiness, stalk_observer};
use crate::systems::animation::{animation_advance, animation_state_sync};
use crate::systems::camera::camera_update;
use crate::systems::entitycollision::collision_detector;
use crate::systems::intents::{clear_intent_edges, player_intent_system};
use crate::systems::movement::movement;
use crate::systems::round::{
    asteroid_control, check_pending_phase, level_complete_check, phase_is_playing, round_intents,
};
use crate::systems::screenedge::screen_edge;
use crate::systems::sfx::{forward_sfx_cmds, update_sfx_messages};
use crate::systems::snapshot::build_snapshot;
use crate::systems::tilecollision::tile_collision;
use crate::systems::time::{update_delay_timers, update_stalk_timers, update_world_time};

/// Build the world: resources, observers, and the enter-play hook.
///
/// Returns the receiver half of the sound request channel; the embedder
/// drains it (or drops it, silencing the game).
pub fn init_world(
    config: SimConfig,
    levels: LevelStore,
    animations: AnimationStore,
) -> (World, Receiver<SfxCmd>) {
    let mut world = World::new();

    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(ScreenSize {
        w: config.screen_width,
        h: config.screen_height,
    });
    world.insert_resource(config);
    world.insert_resource(levels);
    world.insert_resource(animations);
    world.insert_resource(IntentState::default());
    world.insert_resource(RoundState::new());
    world.insert_resource(NextRoundPhase::new());
    world.insert_resource(Camera::default());
    world.insert_resource(FrameSnapshot::default());

    let sfx_rx = setup_sfx(&mut world);

    let mut systems_store = SystemsStore::new();
    let enter_play_id = world.register_system(enter_play);
    world.entity_mut(enter_play_id.entity()).insert(Persistent);
    systems_store.insert("enter_play", enter_play_id);
    world.insert_resource(systems_store);

    world.spawn((Observer::new(observe_round_phase_change), Persistent));
    world.spawn((Observer::new(combat_observer), Persistent));
    world.spawn((Observer::new(ai_timer_observer), Persistent));
    world.spawn((Observer::new(stalk_observer), Persistent));
    world.flush();

    (world, sfx_rx)
}

/// Wire the per-tick pipeline.
///
/// The order is the contract: timers fire first so everything they queued is
/// visible before intents and physics, collisions resolve tile-then-pair,
/// the camera runs after positions settle, animation follows state, and the
/// snapshot sees the finished tick. The executor is single-threaded and the
/// chain is total, so two runs of the same inputs are bit-identical.
pub fn build_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.set_executor_kind(ExecutorKind::SingleThreaded);
    schedule.add_systems(
        (
            round_intents,
            check_pending_phase,
            update_delay_timers.run_if(phase_is_playing),
            update_stalk_timers.run_if(phase_is_playing),
            player_intent_system.run_if(phase_is_playing),
            movement.run_if(phase_is_playing),
            tile_collision.run_if(phase_is_playing),
            screen_edge.run_if(phase_is_playing),
            collision_detector.run_if(phase_is_playing),
            camera_update.run_if(phase_is_playing),
        )
            .chain(),
    );
    schedule.add_systems(
        (
            enemy_readiness.run_if(phase_is_playing),
            level_complete_check.run_if(phase_is_playing),
            asteroid_control.run_if(phase_is_playing),
            animation_state_sync,
            animation_advance,
            update_sfx_messages,
            forward_sfx_cmds,
            build_snapshot,
            clear_intent_edges,
        )
            .chain()
            .after(camera_update),
    );
    schedule
}

/// Advance the simulation by one tick of `dt_ms` milliseconds.
pub fn tick(world: &mut World, schedule: &mut Schedule, dt_ms: f32) {
    update_world_time(world, dt_ms);
    schedule.run(world);
    world.clear_trackers();
}

/// Enter-play hook: tear the previous level down and build the next one.
///
/// Despawning the old entities also cancels every timer that rode on them,
/// so nothing stale can fire into the fresh level.
pub fn enter_play(
    mut commands: Commands,
    levels: Res<LevelStore>,
    store: Res<AnimationStore>,
    config: Res<SimConfig>,
    mut round: ResMut<RoundState>,
    mut camera: ResMut<Camera>,
    mut sfx: MessageWriter<SfxCmd>,
    previous: Query<Entity, Without<Persistent>>,
) {
    let Some(level) = levels.get(round.level_index) else {
        error!("level {} is not authored, cannot enter play", round.level_index);
        return;
    };

    for entity in previous.iter() {
        commands.entity(entity).despawn();
    }

    let grid = level.build_grid();
    let coins = spawn_coins(&mut commands, &store, &config, grid.pixel_width(), round.level_index);
    round.reset_level_progress(coins);
    camera.reset();

    spawn_player(&mut commands, &store, &config);
    if level.enemy_spawns.is_empty() {
        spawn_enemy(
            &mut commands,
            &store,
            &config,
            Vec2::new(300.0, config.screen_height - 76.0),
        );
    } else {
        for spawn in &level.enemy_spawns {
            spawn_enemy(&mut commands, &store, &config, Vec2::new(spawn[0], spawn[1]));
        }
    }
    sfx.write(SfxCmd::Roar);

    // The stalk clock rides on its own entity so a level reset cancels it.
    commands.spawn((StalkTimer::new(config.stalk_interval_ms),));

    commands.insert_resource(grid);
    sfx.write(SfxCmd::LevelUp);
    info!("entered level {} with {} coins", round.level_index, coins);
}

/// Collider pair derived from a clip's frame size.
fn colliders_for(store: &AnimationStore, clip_key: &str) -> (BoxCollider, CircleCollider) {
    let (w, h) = store
        .get(clip_key)
        .map(|clip| clip.frame_size())
        .unwrap_or((32.0, 32.0));
    (BoxCollider::new(w, h), CircleCollider::new(w.min(h) / 2.0))
}

fn spawn_player(commands: &mut Commands, store: &AnimationStore, config: &SimConfig) {
    let (bbox, circle) = colliders_for(store, "player_idle");
    commands.spawn((
        Actor::new(ActorKind::Player),
        ActorState::Idle,
        StateClips::new()
            .with(ActorState::Idle, "player_idle")
            .with(ActorState::Running, "player_run")
            .with(ActorState::Jumping, "player_jump")
            .with(ActorState::Dying, "player_dead"),
        SpriteAnimation::new("player_idle"),
        MapPosition::new(50.0, config.screen_height - 100.0),
        RigidBody::new(),
        Facing::right(),
        bbox,
        circle,
        EdgeContact::default(),
    ));
}

fn spawn_enemy(commands: &mut Commands, store: &AnimationStore, config: &SimConfig, pos: Vec2) {
    let (bbox, circle) = colliders_for(store, "enemy_spawn");
    commands.spawn((
        Actor::new(ActorKind::Enemy),
        ActorState::Spawning,
        StateClips::new()
            .with(ActorState::Spawning, "enemy_spawn")
            .with(ActorState::Idle, "enemy_idle")
            .with(ActorState::Running, "enemy_walk")
            .with(ActorState::Attacking, "enemy_attack")
            .with(ActorState::Dying, "enemy_death")
            .with(ActorState::Defeated, "enemy_death"),
        SpriteAnimation::new("enemy_spawn"),
        MapPosition::new(pos.x, pos.y),
        RigidBody::new(),
        Facing::left(),
        bbox,
        circle,
        EdgeContact::default(),
        DelayTimer::new(config.spawn_delay_ms, TimerAction::EnemyActivate),
    ));
}

/// One coin per 100 pixels of map width, at a seeded-random height, so a
/// given level always lays out the same way.
fn spawn_coins(
    commands: &mut Commands,
    store: &AnimationStore,
    config: &SimConfig,
    map_pixel_width: f32,
    level_index: u32,
) -> u32 {
    let (bbox, _) = colliders_for(store, "coin_spin");
    let mut rng = fastrand::Rng::with_seed(0xC01_u64 + level_index as u64);
    let count = (map_pixel_width / 100.0) as u32;
    for i in 0..count {
        let y = 50.0 + rng.f32() * (config.screen_height - 100.0);
        commands.spawn((
            Actor::new(ActorKind::Coin),
            ActorState::Idle,
            StateClips::new().with(ActorState::Idle, "coin_spin"),
            SpriteAnimation::new("coin_spin"),
            MapPosition::new(100.0 * i as f32, y),
            RigidBody::without_gravity(),
            Facing::right(),
            bbox,
        ));
    }
    count
}
