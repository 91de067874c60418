//! Dune Runner simulation core.
//!
//! The deterministic per-tick heart of a side-scrolling platformer: entity
//! kinematics, tile-grid collision, entity-pair combat and pickups, the
//! scrolling camera, animation-driven state machines, and the round state
//! machine that gates them. Rendering, asset decoding, input devices, and
//! audio playback are external collaborators: the core consumes logical
//! intents and produces a read-only snapshot per tick.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
