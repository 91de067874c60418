//! Simulation configuration resource.
//!
//! Tunable constants loaded from an INI file. Defaults are compiled in so a
//! missing file starts the simulation with the authored feel.
//!
//! # Configuration File Format
//!
//! ```ini
//! [screen]
//! width = 512
//! height = 384
//!
//! [physics]
//! gravity = 0.001
//! run_speed = 0.08
//! jump_velocity = -0.4
//!
//! [ai]
//! spawn_delay_ms = 5000
//! stalk_interval_ms = 10000
//! ```

use bevy_ecs::prelude::Resource;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::components::actor::ActorKind;

const DEFAULT_SCREEN_WIDTH: f32 = 512.0;
const DEFAULT_SCREEN_HEIGHT: f32 = 384.0;
const DEFAULT_GRAVITY: f32 = 0.001;
const DEFAULT_RUN_SPEED: f32 = 0.08;
const DEFAULT_JUMP_VELOCITY: f32 = -0.4;
const DEFAULT_CEILING_BUMP: f32 = 0.2;
const DEFAULT_DEATH_FALL_VELOCITY: f32 = 0.3;
const DEFAULT_CAMERA_SCALE: f32 = 20.0;
const DEFAULT_SPAWN_DELAY_MS: f32 = 5000.0;
const DEFAULT_STALK_INTERVAL_MS: f32 = 10000.0;
const DEFAULT_JUMP_SETTLE_MS: f32 = 1000.0;
const DEFAULT_ENEMY_SPEED: f32 = 0.05;
const DEFAULT_COIN_VALUE: i64 = 500;
const DEFAULT_STOMP_BONUS: i64 = 5000;
const DEFAULT_HAZARD_FALL_VELOCITY: f32 = 0.4;
const DEFAULT_HAZARD_NUDGE: f32 = 0.001;
const DEFAULT_HAZARD_TRIGGER_Y: f32 = 300.0;
const DEFAULT_FLOOR_TEST_MARGIN: f32 = 32.0;
const DEFAULT_FLOOR_MARGIN_PLAYER: f32 = 31.0;
const DEFAULT_FLOOR_MARGIN_ENEMY: f32 = 18.0;
const DEFAULT_TOP_MARGIN: f32 = 20.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Simulation constants.
///
/// Velocities are in pixels per millisecond, times in milliseconds,
/// distances in pixels.
#[derive(Resource, Debug, Clone)]
pub struct SimConfig {
    pub screen_width: f32,
    pub screen_height: f32,
    pub gravity: f32,
    pub run_speed: f32,
    pub jump_velocity: f32,
    /// Downward velocity imparted when bumping a platform from below.
    pub ceiling_bump: f32,
    /// Downward velocity given to the player by the death sequence.
    pub death_fall_velocity: f32,
    /// Multiplier from player velocity to camera frame shift.
    pub camera_scale: f32,
    pub spawn_delay_ms: f32,
    pub stalk_interval_ms: f32,
    pub jump_settle_ms: f32,
    pub enemy_speed: f32,
    pub coin_value: i64,
    pub stomp_bonus: i64,
    pub hazard_fall_velocity: f32,
    /// Per-tick horizontal velocity nudge while the hazard homes.
    pub hazard_nudge: f32,
    /// Altitude at which the falling hazard detonates.
    pub hazard_trigger_y: f32,
    /// Margin used to detect that an entity sank below the floor.
    pub floor_test_margin: f32,
    /// Per-kind rest margins; sprite anchor conventions differ.
    pub floor_margin_player: f32,
    pub floor_margin_enemy: f32,
    /// Minimum y an entity may reach.
    pub top_margin: f32,
    pub config_path: PathBuf,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SimConfig {
    /// Compiled-in defaults.
    pub fn new() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            gravity: DEFAULT_GRAVITY,
            run_speed: DEFAULT_RUN_SPEED,
            jump_velocity: DEFAULT_JUMP_VELOCITY,
            ceiling_bump: DEFAULT_CEILING_BUMP,
            death_fall_velocity: DEFAULT_DEATH_FALL_VELOCITY,
            camera_scale: DEFAULT_CAMERA_SCALE,
            spawn_delay_ms: DEFAULT_SPAWN_DELAY_MS,
            stalk_interval_ms: DEFAULT_STALK_INTERVAL_MS,
            jump_settle_ms: DEFAULT_JUMP_SETTLE_MS,
            enemy_speed: DEFAULT_ENEMY_SPEED,
            coin_value: DEFAULT_COIN_VALUE,
            stomp_bonus: DEFAULT_STOMP_BONUS,
            hazard_fall_velocity: DEFAULT_HAZARD_FALL_VELOCITY,
            hazard_nudge: DEFAULT_HAZARD_NUDGE,
            hazard_trigger_y: DEFAULT_HAZARD_TRIGGER_Y,
            floor_test_margin: DEFAULT_FLOOR_TEST_MARGIN,
            floor_margin_player: DEFAULT_FLOOR_MARGIN_PLAYER,
            floor_margin_enemy: DEFAULT_FLOOR_MARGIN_ENEMY,
            top_margin: DEFAULT_TOP_MARGIN,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file. Missing values retain their
    /// current (default) values.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        let mut getf = |section: &str, key: &str, slot: &mut f32| {
            if let Some(v) = config.getfloat(section, key).ok().flatten() {
                *slot = v as f32;
            }
        };

        getf("screen", "width", &mut self.screen_width);
        getf("screen", "height", &mut self.screen_height);
        getf("physics", "gravity", &mut self.gravity);
        getf("physics", "run_speed", &mut self.run_speed);
        getf("physics", "jump_velocity", &mut self.jump_velocity);
        getf("physics", "ceiling_bump", &mut self.ceiling_bump);
        getf("physics", "death_fall_velocity", &mut self.death_fall_velocity);
        getf("camera", "scale_factor", &mut self.camera_scale);
        getf("ai", "spawn_delay_ms", &mut self.spawn_delay_ms);
        getf("ai", "stalk_interval_ms", &mut self.stalk_interval_ms);
        getf("ai", "jump_settle_ms", &mut self.jump_settle_ms);
        getf("ai", "enemy_speed", &mut self.enemy_speed);
        getf("round", "hazard_fall_velocity", &mut self.hazard_fall_velocity);
        getf("round", "hazard_nudge", &mut self.hazard_nudge);
        getf("round", "hazard_trigger_y", &mut self.hazard_trigger_y);
        getf("bounds", "floor_test_margin", &mut self.floor_test_margin);
        getf("bounds", "floor_margin_player", &mut self.floor_margin_player);
        getf("bounds", "floor_margin_enemy", &mut self.floor_margin_enemy);
        getf("bounds", "top_margin", &mut self.top_margin);

        if let Some(v) = config.getint("round", "coin_value").ok().flatten() {
            self.coin_value = v;
        }
        if let Some(v) = config.getint("round", "stomp_bonus").ok().flatten() {
            self.stomp_bonus = v;
        }

        info!(
            "Loaded config: {}x{} screen, gravity={}, spawn_delay={}ms, stalk_interval={}ms",
            self.screen_width,
            self.screen_height,
            self.gravity,
            self.spawn_delay_ms,
            self.stalk_interval_ms
        );

        Ok(())
    }

    /// Rest margin for the floor snap of a given actor kind.
    pub fn floor_margin(&self, kind: ActorKind) -> f32 {
        match kind {
            ActorKind::Player => self.floor_margin_player,
            _ => self.floor_margin_enemy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let cfg = SimConfig::new();
        assert_eq!(cfg.screen_width, 512.0);
        assert_eq!(cfg.gravity, 0.001);
        assert!(cfg.jump_velocity < 0.0);
        assert!(cfg.floor_margin(ActorKind::Player) != cfg.floor_margin(ActorKind::Enemy));
    }
}
