//! Logical input intents.
//!
//! The core never polls input devices; the embedder translates whatever it
//! reads into these intents before running a tick. Held intents stay active
//! until released, edge intents are consumed at the end of every tick.

use bevy_ecs::prelude::Resource;

/// State of one logical button.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntentButton {
    /// Currently held down.
    pub held: bool,
    /// Transitioned to held since the last tick.
    pub just_pressed: bool,
    /// Transitioned to released since the last tick.
    pub just_released: bool,
}

impl IntentButton {
    pub fn press(&mut self) {
        if !self.held {
            self.just_pressed = true;
        }
        self.held = true;
    }

    pub fn release(&mut self) {
        if self.held {
            self.just_released = true;
        }
        self.held = false;
    }

    fn clear_edges(&mut self) {
        self.just_pressed = false;
        self.just_released = false;
    }
}

/// Resource capturing the per-tick intent state relevant to the simulation.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct IntentState {
    pub move_left: IntentButton,
    pub move_right: IntentButton,
    pub jump: IntentButton,
    pub begin: IntentButton,
    pub restart: IntentButton,
    pub toggle_debug: IntentButton,
    /// Debug-only request to re-run a defeated enemy's spawn sequence.
    pub respawn_enemy: IntentButton,
}

impl IntentState {
    /// Forget press/release edges; called once at the end of every tick.
    pub fn clear_edges(&mut self) {
        self.move_left.clear_edges();
        self.move_right.clear_edges();
        self.jump.clear_edges();
        self.begin.clear_edges();
        self.restart.clear_edges();
        self.toggle_debug.clear_edges();
        self.respawn_enemy.clear_edges();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_sets_edge_once() {
        let mut b = IntentButton::default();
        b.press();
        assert!(b.held && b.just_pressed);
        b.clear_edges();
        b.press();
        assert!(b.held);
        assert!(!b.just_pressed);
    }

    #[test]
    fn release_sets_edge() {
        let mut b = IntentButton::default();
        b.press();
        b.clear_edges();
        b.release();
        assert!(!b.held);
        assert!(b.just_released);
    }

    #[test]
    fn clear_edges_keeps_held() {
        let mut intents = IntentState::default();
        intents.move_right.press();
        intents.jump.press();
        intents.clear_edges();
        assert!(intents.move_right.held);
        assert!(!intents.jump.just_pressed);
    }
}
