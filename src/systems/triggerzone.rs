//! One-shot trigger zone detection.
//!
//! Every frame each unfired [`TriggerZone`] is tested against the colliders of
//! the entities in its watched [`Group`]. The first overlap fires the zone's
//! latch and triggers a [`ZoneEnteredEvent`]. A fired zone is never tested
//! again, so walking around inside it or leaving and re-entering changes
//! nothing.

use bevy_ecs::prelude::*;
use log::info;

use crate::components::boxcollider::BoxCollider;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::triggerzone::TriggerZone;
use crate::events::zone::ZoneEnteredEvent;

pub fn trigger_zone_system(
    mut zones: Query<(Entity, &MapPosition, &BoxCollider, &mut TriggerZone)>,
    visitors: Query<(Entity, &Group, &MapPosition, &BoxCollider), Without<TriggerZone>>,
    mut commands: Commands,
) {
    for (zone_entity, zone_pos, zone_box, mut zone) in zones.iter_mut() {
        if zone.fired {
            continue;
        }
        let hit = visitors.iter().find(|(_, group, pos, collider)| {
            group.name() == zone.watch_group && zone_box.overlaps(zone_pos.pos, collider, pos.pos)
        });
        let Some((visitor, ..)) = hit else {
            continue;
        };
        if !zone.fire() {
            continue;
        }
        info!("{:?} entered zone {:?} ('{}')", visitor, zone_entity, zone.signal);
        commands.trigger(ZoneEnteredEvent {
            zone: zone_entity,
            visitor,
            signal: zone.signal.clone(),
        });
    }
}
