//! Helper hint fade-out.
//!
//! The on-screen instructions stay until a keyboard-driven walker first
//! moves. At that point every [`HelperHint`] latches, gets a linear fade to
//! transparent and a matching [`Ttl`] so it is removed once invisible.

use bevy_ecs::prelude::*;
use log::info;

use crate::components::helperhint::HelperHint;
use crate::components::inputcontrolled::InputControlled;
use crate::components::signals::Signals;
use crate::components::ttl::Ttl;
use crate::components::tween::TweenAlpha;
use crate::systems::inputwalkcontroller::MOVING_FLAG;

pub const HINT_SIGNAL: &str = "hint_faded";

pub fn helper_hint_system(
    walkers: Query<&Signals, With<InputControlled>>,
    mut hints: Query<(Entity, &mut HelperHint)>,
    mut commands: Commands,
) {
    if !walkers.iter().any(|signals| signals.has_flag(MOVING_FLAG)) {
        return;
    }
    for (entity, mut hint) in hints.iter_mut() {
        if hint.fading {
            continue;
        }
        hint.fading = true;
        info!("Player started moving, fading out hint {:?}", entity);
        commands.entity(entity).insert((
            TweenAlpha::fade_out(hint.fade_duration).with_signal(HINT_SIGNAL),
            Ttl::new(hint.fade_duration),
        ));
    }
}
