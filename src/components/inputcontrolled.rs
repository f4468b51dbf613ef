//! Input-controlled movement component.
//!
//! The [`InputControlled`] component marks an entity as driven by the
//! keyboard. [`crate::systems::inputwalkcontroller`] reads it together with
//! the shared [`InputState`](crate::resources::input::InputState) to update
//! velocity, facing and the `moving` signal.

use bevy_ecs::prelude::Component;

/// Movement intent derived from player keyboard input.
///
/// `speed` is applied independently per axis, so a diagonal walk is faster
/// than a straight one.
#[derive(Component, Clone, Copy, Debug)]
pub struct InputControlled {
    /// Speed in world units per second on each active axis.
    pub speed: f32,
}

impl InputControlled {
    pub fn new(speed: f32) -> Self {
        Self { speed }
    }
}
