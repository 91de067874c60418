//! Registry of phase enter hooks.
//!
//! Round phase transitions need to run setup systems (tear down the old
//! level, build the new one) without the observer holding direct references
//! to them. Hooks register here by name at startup and are looked up by the
//! round observer when a transition applies.

use bevy_ecs::prelude::Resource;
use bevy_ecs::system::SystemId;
use rustc_hash::FxHashMap;

/// Named registry of registered systems.
#[derive(Resource, Default)]
pub struct SystemsStore {
    hooks: FxHashMap<String, SystemId>,
}

impl SystemsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a system ID under a well-known name (e.g. `"enter_play"`).
    pub fn insert(&mut self, name: impl Into<String>, id: SystemId) {
        self.hooks.insert(name.into(), id);
    }

    /// Look up a registered system by name.
    pub fn get(&self, name: &str) -> Option<SystemId> {
        self.hooks.get(name).copied()
    }
}
