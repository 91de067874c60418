//! Persistent entity marker component.
//!
//! Entities with the [`Persistent`] component are not despawned when a level
//! is torn down and rebuilt. Observers and registered systems live on
//! entities, so they carry this marker to survive round resets.

use bevy_ecs::prelude::Component;

/// Tag component for entities that survive level resets.
#[derive(Component, Clone, Debug)]
pub struct Persistent;
