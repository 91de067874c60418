use bevy_ecs::prelude::Component;

/// Per-tick world-edge contact flag.
///
/// Written by the screen-edge system every tick and read by the camera and
/// intent systems, replacing a shared global "touching edge" boolean with an
/// explicit per-entity value.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct EdgeContact {
    pub touching: bool,
}
