//! Simulation systems.
//!
//! One tick runs these in a fixed order: timers fire first (their queued
//! intents apply at the start of the tick), then input intents, physics
//! integration, tile collision, world-bound resolution, pairwise collision,
//! camera, animation, round bookkeeping, and finally the render snapshot.
//!
//! Submodules overview
//! - [`ai`] – enemy spawn sequencing, stalk re-targeting, readiness signal
//! - [`animation`] – state-to-clip sync and frame advancement
//! - [`camera`] – midline scroll, frame shift, offset clamping
//! - [`entitycollision`] – pairwise AABB detection, event emission
//! - [`intents`] – logical input intents applied to the player
//! - [`movement`] – gravity and kinematic integration
//! - [`round`] – phase transitions, level completion, the hazard sequence
//! - [`screenedge`] – world-bound clamping and edge bounces
//! - [`sfx`] – forward sound requests to the embedder's channel
//! - [`snapshot`] – rebuild the per-tick renderer view
//! - [`tilecollision`] – circular multi-sample probe against the tile grid
//! - [`time`] – advance the simulation clock, drive timers

pub mod ai;
pub mod animation;
pub mod camera;
pub mod entitycollision;
pub mod intents;
pub mod movement;
pub mod round;
pub mod screenedge;
pub mod sfx;
pub mod snapshot;
pub mod tilecollision;
pub mod time;
