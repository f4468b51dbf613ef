//! One-shot overlap trigger.
//!
//! A [`TriggerZone`] together with a [`BoxCollider`](super::boxcollider::BoxCollider)
//! and a [`MapPosition`](super::mapposition::MapPosition) describes a static
//! region. [`trigger_zone_system`](crate::systems::triggerzone::trigger_zone_system)
//! tests it against every entity of the watched group and emits a
//! [`ZoneEnteredEvent`](crate::events::zone::ZoneEnteredEvent) the first time
//! one of them overlaps. After that the zone is spent.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Debug)]
pub struct TriggerZone {
    /// Group whose members can fire the zone.
    pub watch_group: String,
    /// Label carried by the emitted event.
    pub signal: String,
    /// Latch; set once the zone has fired.
    pub fired: bool,
}

impl TriggerZone {
    pub fn new(watch_group: impl Into<String>, signal: impl Into<String>) -> Self {
        Self {
            watch_group: watch_group.into(),
            signal: signal.into(),
            fired: false,
        }
    }

    /// Set the latch. Returns true only for the first call.
    pub fn fire(&mut self) -> bool {
        if self.fired {
            return false;
        }
        self.fired = true;
        true
    }
}
