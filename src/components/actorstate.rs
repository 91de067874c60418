//! Explicit behavior state for actors.
//!
//! Every actor carries a discrete [`ActorState`]; the animation clip to play
//! is looked up *from* the state via [`StateClips`], never the other way
//! around. Controllers (input, AI, collision outcomes) switch state
//! explicitly; the animation systems only follow.

use bevy_ecs::prelude::Component;
use rustc_hash::FxHashMap;

/// Discrete behavior states an actor can be in.
///
/// `Dying` is the transitional death state (player falling out of the world,
/// asteroid exploding); `Defeated` is the terminal state for enemies, which
/// remain in the world as non-hostile decoration until the level resets.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActorState {
    Spawning,
    Idle,
    Running,
    Jumping,
    Attacking,
    Dying,
    Defeated,
}

impl ActorState {
    /// States in which an enemy no longer pursues, attacks, or redirects.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ActorState::Dying | ActorState::Defeated)
    }
}

/// Per-kind mapping from behavior state to animation clip key.
///
/// Shared structure, per-entity instance: each spawn function builds the map
/// for its kind once. States without an entry keep the current clip.
#[derive(Component, Debug, Clone, Default)]
pub struct StateClips {
    clips: FxHashMap<ActorState, String>,
}

impl StateClips {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style registration of a state-to-clip entry.
    pub fn with(mut self, state: ActorState, clip_key: impl Into<String>) -> Self {
        self.clips.insert(state, clip_key.into());
        self
    }

    /// Clip key for a state, if one is mapped.
    pub fn clip_for(&self, state: ActorState) -> Option<&str> {
        self.clips.get(&state).map(String::as_str)
    }
}
