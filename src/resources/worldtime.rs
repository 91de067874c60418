use bevy_ecs::prelude::Resource;

/// Simulation clock. All times are in milliseconds; `delta_ms` is the scaled
/// duration of the current tick.
#[derive(Resource, Clone, Copy)]
pub struct WorldTime {
    pub elapsed_ms: f32,
    pub delta_ms: f32,
    pub time_scale: f32,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed_ms: 0.0,
            delta_ms: 0.0,
            time_scale: 1.0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }
}
