//! Debug toggle resource.
//!
//! The mere presence of this resource indicates that debug overlays should be
//! drawn. Remove it to disable debug behavior.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the renderer draws colliders, pivots and stats.
#[derive(Resource, Clone, Copy)]
pub struct DebugMode {}
