//! Round phase and progress bookkeeping.
//!
//! The round advances `Intro -> Playing -> Finished` with level progression
//! inside `Playing`. Systems request a transition by setting
//! [`NextRoundPhase`]; the observer in
//! [`crate::events::round`] applies it and runs the enter hook for the new
//! phase.

use bevy_ecs::prelude::Resource;

/// Top-level phases of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundPhase {
    #[default]
    Intro,
    Playing,
    Finished,
}

/// A requested phase transition, applied by the round observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PendingPhase {
    #[default]
    Unchanged,
    Pending(RoundPhase),
}

/// Intent to change to a new round phase.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct NextRoundPhase {
    next: PendingPhase,
}

impl NextRoundPhase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> PendingPhase {
        self.next
    }

    /// Mark a transition as pending; `check_pending_phase` triggers the
    /// change event which applies it.
    pub fn set(&mut self, phase: RoundPhase) {
        self.next = PendingPhase::Pending(phase);
    }

    pub fn reset(&mut self) {
        self.next = PendingPhase::Unchanged;
    }
}

/// Authoritative round state: phase, level progression, score, and the
/// per-level progress flags the systems coordinate through.
#[derive(Resource, Debug, Clone)]
pub struct RoundState {
    pub phase: RoundPhase,
    /// 1-based level index.
    pub level_index: u32,
    /// Raw score; the displayed value is `score / 100`.
    pub score: i64,
    pub coins_total: u32,
    pub coins_remaining: u32,
    /// Set exactly once per level, when the last coin is collected.
    pub level_complete: bool,
    /// The terminal hazard sequence is falling.
    pub hazard_active: bool,
    /// Readiness signal raised once every enemy has finished spawn-in.
    pub all_enemies_active: bool,
    pub player_dead: bool,
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundState {
    pub fn new() -> Self {
        Self {
            phase: RoundPhase::Intro,
            level_index: 1,
            score: 0,
            coins_total: 0,
            coins_remaining: 0,
            level_complete: false,
            hazard_active: false,
            all_enemies_active: false,
            player_dead: false,
        }
    }

    /// Reset the per-level flags when a level is built. Score survives level
    /// advancement and only resets back at level 1.
    pub fn reset_level_progress(&mut self, coins: u32) {
        self.coins_total = coins;
        self.coins_remaining = coins;
        self.level_complete = false;
        self.hazard_active = false;
        self.all_enemies_active = false;
        self.player_dead = false;
        if self.level_index == 1 {
            self.score = 0;
        }
    }

    pub fn display_score(&self) -> i64 {
        self.score / 100
    }
}
