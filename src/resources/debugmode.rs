//! Debug toggle resource.
//!
//! The mere presence of this resource enables debug data in the per-tick
//! snapshot (collider outlines) and the debug-only enemy respawn intent.
//! Remove it to disable debug behavior.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, snapshots include debug data.
#[derive(Resource, Clone, Copy)]
pub struct DebugMode {}
