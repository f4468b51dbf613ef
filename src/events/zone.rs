//! Trigger zone events.
//!
//! [`trigger_zone_system`](crate::systems::triggerzone::trigger_zone_system)
//! emits a [`ZoneEnteredEvent`] the first time a watched entity overlaps a
//! [`TriggerZone`](crate::components::triggerzone::TriggerZone). The event is
//! never repeated for the same zone.

use bevy_ecs::prelude::*;

#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct ZoneEnteredEvent {
    /// The zone that fired.
    pub zone: Entity,
    /// The entity that walked into it.
    pub visitor: Entity,
    /// The zone's signal label.
    pub signal: String,
}
