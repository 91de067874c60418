use bevy_ecs::prelude::Component;

/// Per-entity animation playback state.
///
/// The frame data itself lives in the shared
/// [`AnimationStore`](crate::resources::animationstore::AnimationStore);
/// entities only carry the clip key, the frame cursor, and the clock.
#[derive(Debug, Clone, Component)]
pub struct SpriteAnimation {
    pub clip_key: String,
    pub frame_index: usize,
    pub elapsed_ms: f32,
    pub playing: bool,
    /// When set, playback halts exactly at this frame and does not wrap.
    pub paused_at: Option<usize>,
}

impl SpriteAnimation {
    pub fn new(clip_key: impl Into<String>) -> Self {
        Self {
            clip_key: clip_key.into(),
            frame_index: 0,
            elapsed_ms: 0.0,
            playing: true,
            paused_at: None,
        }
    }

    /// Switch to a different clip, resetting the cursor and clearing any
    /// pause. Switching to the already-active clip is a no-op so that
    /// re-applying a state every tick does not visibly stutter.
    pub fn set_clip(&mut self, clip_key: &str) {
        if self.clip_key == clip_key {
            return;
        }
        self.clip_key = clip_key.to_string();
        self.frame_index = 0;
        self.elapsed_ms = 0.0;
        self.playing = true;
        self.paused_at = None;
    }

    /// Request playback to halt when the cursor reaches `frame`.
    pub fn pause_at_frame(&mut self, frame: usize) {
        self.paused_at = Some(frame);
        if self.frame_index >= frame {
            self.frame_index = frame;
            self.playing = false;
        }
    }
}
