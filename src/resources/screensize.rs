//! Screen size resource.
//!
//! Stores the framebuffer dimensions in pixels. The camera offset and the
//! renderer's culling rectangle are derived from it.

use bevy_ecs::prelude::Resource;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy, Debug)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
