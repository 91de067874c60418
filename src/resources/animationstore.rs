//! Animation clip registry.
//!
//! Clips are immutable once loaded and shared by key across every entity of
//! the same kind; per-entity state is only the frame cursor and clock in
//! [`SpriteAnimation`](crate::components::animation::SpriteAnimation), never
//! the frame data.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// One frame of a clip: source rectangle in the sheet plus display duration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimFrame {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub duration_ms: f32,
}

/// Ordered frame timeline for one logical behavior (idle, run, death, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationClip {
    pub frames: Vec<AnimFrame>,
    /// Looping clips wrap to frame 0; non-looping clips hold the last frame.
    pub looped: bool,
}

impl AnimationClip {
    pub fn frame(&self, index: usize) -> Option<&AnimFrame> {
        self.frames.get(index)
    }

    pub fn last_frame(&self) -> usize {
        self.frames.len().saturating_sub(1)
    }

    /// Size of the first frame, used to derive collider dimensions.
    pub fn frame_size(&self) -> (f32, f32) {
        self.frames
            .first()
            .map(|f| (f.width, f.height))
            .unwrap_or((0.0, 0.0))
    }
}

/// Central registry of clips keyed by string IDs.
#[derive(Resource, Debug, Clone, Default)]
pub struct AnimationStore {
    pub clips: FxHashMap<String, AnimationClip>,
}

impl AnimationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the clip registry from a JSON file mapping key -> clip.
    /// Failing to load or parse is a startup error for the caller.
    pub fn load_file(path: &str) -> Result<Self, String> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {}", path, e))?;
        let clips: FxHashMap<String, AnimationClip> = serde_json::from_str(&text)
            .map_err(|e| format!("failed to parse {}: {}", path, e))?;
        Ok(Self { clips })
    }

    pub fn insert(&mut self, key: impl Into<String>, clip: AnimationClip) {
        self.clips.insert(key.into(), clip);
    }

    pub fn get(&self, key: &str) -> Option<&AnimationClip> {
        self.clips.get(key)
    }
}
