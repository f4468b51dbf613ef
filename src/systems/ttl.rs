//! TTL (Time-to-live) system.
//!
//! [`ttl_system`] counts down every [`Ttl`](crate::components::ttl::Ttl) by
//! the frame delta and despawns the entity once nothing is left.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::ttl::Ttl;
use crate::resources::worldtime::WorldTime;

/// Decrements TTL and despawns entities when it reaches zero.
pub fn ttl_system(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut Ttl)>,
    mut commands: Commands,
) {
    let dt = world_time.delta; // already scaled by time_scale
    for (entity, mut ttl) in query.iter_mut() {
        ttl.remaining -= dt;
        if ttl.remaining <= 0.0 {
            debug!("TTL expired for {:?}", entity);
            commands.entity(entity).try_despawn();
        }
    }
}
