//! ECS components for simulation entities.
//!
//! This module groups all component types that can be attached to entities in
//! the simulation world. Components hold the per-entity data the systems
//! operate on: kinematics, collision shapes, animation playback, actor state,
//! and timers.
//!
//! Submodules overview:
//! - [`actor`] – entity kind tag (player, enemy, coin, asteroid)
//! - [`actorstate`] – explicit behavior state and the state-to-clip mapping
//! - [`animation`] – per-entity animation playback state
//! - [`boxcollider`] – axis-aligned rectangle for pairwise overlap tests
//! - [`circlecollider`] – collision circle for the tile probe
//! - [`edgecontact`] – per-tick world-edge contact flag
//! - [`facing`] – horizontal mirroring and movement-direction memory
//! - [`mapposition`] – camera-space position (pivot) for an entity
//! - [`persistent`] – marker for entities that survive level resets
//! - [`rigidbody`] – kinematic body storing velocity and gravity/frozen flags
//! - [`rotation`] – sprite rotation angle in degrees
//! - [`timer`] – one-shot delay and periodic stalk timers

pub mod actor;
pub mod actorstate;
pub mod animation;
pub mod boxcollider;
pub mod circlecollider;
pub mod edgecontact;
pub mod facing;
pub mod mapposition;
pub mod persistent;
pub mod rigidbody;
pub mod rotation;
pub mod timer;
