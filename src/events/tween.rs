//! Tween completion events.
//!
//! When a [`TweenAlpha`](crate::components::tween::TweenAlpha) reaches its
//! duration, [`tween_alpha_system`](crate::systems::tween::tween_alpha_system)
//! triggers a [`TweenFinishedEvent`]. Observers run during the same frame's
//! command flush, which is how the reveal sequence chains its stages.

use bevy_ecs::prelude::*;

/// Event emitted once when a tween completes.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct TweenFinishedEvent {
    /// The entity whose tween finished.
    pub entity: Entity,
    /// The signal label configured on the tween.
    pub signal: String,
}
