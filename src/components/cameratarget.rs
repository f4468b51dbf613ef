use bevy_ecs::prelude::Component;

/// Marks the entity the camera follows. Only the first match is used.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct CameraTarget;
