//! Dune Runner headless demo loop.
//!
//! Runs the simulation core at a fixed tick with a scripted intent track:
//! begin the round, hold right, hop periodically. Snapshots are summarized
//! to the log once a second; sound requests drain to the log sink. This
//! binary is the reference embedder: a real front end would feed device
//! input into [`IntentState`] and draw the
//! [`FrameSnapshot`](dunerunner::resources::snapshot::FrameSnapshot) instead.

use clap::Parser;
use log::info;

use dunerunner::game;
use dunerunner::resources::animationstore::AnimationStore;
use dunerunner::resources::debugmode::DebugMode;
use dunerunner::resources::intents::IntentState;
use dunerunner::resources::levelstore::LevelStore;
use dunerunner::resources::roundstate::RoundState;
use dunerunner::resources::simconfig::SimConfig;
use dunerunner::resources::snapshot::FrameSnapshot;

/// Dune Runner simulation core demo
#[derive(Parser)]
#[command(version, about = "Headless demo loop for the Dune Runner simulation core")]
struct Cli {
    /// Number of ticks to simulate.
    #[arg(long, default_value_t = 3600)]
    ticks: u32,

    /// Fixed tick duration in milliseconds.
    #[arg(long, default_value_t = 16.0)]
    delta_ms: f32,

    /// Starting level index (1-based).
    #[arg(long, default_value_t = 1)]
    level: u32,

    /// Path to the INI configuration file.
    #[arg(long, default_value = "./config.ini")]
    config: String,

    /// Directory containing levelN.json files.
    #[arg(long, default_value = "./assets/levels")]
    levels: String,

    /// Animation clip definitions.
    #[arg(long, default_value = "./assets/animations.json")]
    animations: String,

    /// Enable debug data in snapshots.
    #[arg(long)]
    debug: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = SimConfig::with_path(&cli.config);
    config.load_from_file().ok(); // ignore errors, use defaults

    // Asset loading is the only place a failure is fatal; once the loop
    // starts nothing can take it down.
    let levels = LevelStore::load_dir(&cli.levels).expect("failed to load levels");
    let animations = AnimationStore::load_file(&cli.animations).expect("failed to load animations");

    let (mut world, sfx_rx) = game::init_world(config, levels, animations);
    if cli.debug {
        world.insert_resource(DebugMode {});
    }
    {
        let mut round = world.resource_mut::<RoundState>();
        round.level_index = cli.level;
    }
    let mut schedule = game::build_schedule();

    info!("starting demo loop: {} ticks at {}ms", cli.ticks, cli.delta_ms);

    let ticks_per_second = (1000.0 / cli.delta_ms).round() as u32;
    for tick_index in 0..cli.ticks {
        script_intents(&mut world, tick_index, ticks_per_second);

        game::tick(&mut world, &mut schedule, cli.delta_ms);

        for cmd in sfx_rx.try_iter() {
            info!("sfx request: {:?}", cmd);
        }

        if ticks_per_second > 0 && tick_index % ticks_per_second == 0 {
            let snapshot = world.resource::<FrameSnapshot>();
            info!(
                "t+{:>4} phase={:?} score={} coins={} offset={:.0} entities={}",
                tick_index,
                snapshot.phase,
                snapshot.display_score,
                snapshot.coins_remaining,
                snapshot.camera_offset,
                snapshot.views.len()
            );
        }
    }

    let snapshot = world.resource::<FrameSnapshot>();
    info!(
        "demo finished: phase={:?} score={} coins remaining={}",
        snapshot.phase, snapshot.display_score, snapshot.coins_remaining
    );
}

/// Scripted intent track: begin on the first tick, hold right from the
/// second second on, hop every second and a half.
fn script_intents(world: &mut bevy_ecs::prelude::World, tick_index: u32, ticks_per_second: u32) {
    let mut intents = world.resource_mut::<IntentState>();
    if tick_index == 0 {
        intents.begin.press();
    }
    if tick_index == ticks_per_second {
        intents.move_right.press();
    }
    let hop_period = ticks_per_second * 3 / 2;
    if hop_period > 0 && tick_index > ticks_per_second {
        if tick_index % hop_period == 0 {
            intents.jump.press();
        } else if tick_index % hop_period == 1 {
            intents.jump.release();
        }
    }
}
