use bevy_ecs::prelude::Component;

/// On-screen instructions that fade out the first time a walker starts moving.
#[derive(Component, Clone, Copy, Debug)]
pub struct HelperHint {
    /// Fade duration in seconds.
    pub fade_duration: f32,
    /// Latch; set when the fade has been started.
    pub fading: bool,
}

impl HelperHint {
    pub fn new(fade_duration: f32) -> Self {
        Self {
            fade_duration,
            fading: false,
        }
    }
}
