//! Event types and observers used by the simulation.
//!
//! Events are how systems communicate outcomes without direct coupling: the
//! collision detector only reports overlapping pairs, the combat observer
//! decides what they mean; timers only report expiry, the AI observer applies
//! the state change.
//!
//! Submodules:
//! - [`collision`] – pairwise overlap notifications and the combat observer
//! - [`round`] – round phase transition event and observer
//! - [`sfx`] – fire-and-forget sound request messages
//! - [`timer`] – delay-timer expiry and periodic stalk tick events

pub mod collision;
pub mod round;
pub mod sfx;
pub mod timer;
