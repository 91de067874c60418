//! ECS resources made available to systems.
//!
//! Long-lived data injected into the world and read or mutated by systems
//! during the tick: the tile grid, asset stores, camera, timing, intents,
//! round bookkeeping, and configuration.
//!
//! Overview
//! - `animationstore` – immutable animation clips shared across entities
//! - `camera` – horizontal scroll offset and per-tick frame shift
//! - `debugmode` – presence toggles debug data in snapshots
//! - `intents` – logical input intents pushed by the embedder
//! - `levelstore` – level descriptions loaded at startup
//! - `roundstate` – round phase, level index, score, and progress flags
//! - `screensize` – fixed view dimensions in pixels
//! - `sfx` – fire-and-forget sound request channel
//! - `simconfig` – tunable constants loaded from an INI file
//! - `snapshot` – read-only per-tick view for the external renderer
//! - `systemsstore` – registry of phase enter hooks by name
//! - `tilegrid` – the current level's tile grid, queried by the probe
//! - `worldtime` – simulation clock and per-tick delta

pub mod animationstore;
pub mod camera;
pub mod debugmode;
pub mod intents;
pub mod levelstore;
pub mod roundstate;
pub mod screensize;
pub mod sfx;
pub mod simconfig;
pub mod snapshot;
pub mod systemsstore;
pub mod tilegrid;
pub mod worldtime;
