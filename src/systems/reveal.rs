//! Reveal sequence observers.
//!
//! - [`start_reveal_observer`] reacts to the trail-end zone firing and starts
//!   the heart fade.
//! - [`advance_reveal_observer`] reacts to finished tweens. The heart's
//!   completion starts the character and title fades; the last of those
//!   settles the sequence.
//!
//! Stage bookkeeping lives in [`RevealSequence`]. Observers run during the
//! command flush of the frame that emitted the event, so the second stage is
//! queued in the same frame the heart finishes.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

use crate::components::tween::{Easing, TweenAlpha};
use crate::events::tween::TweenFinishedEvent;
use crate::events::zone::ZoneEnteredEvent;
use crate::resources::reveal::{
    CHARACTER_FADE_SECS, CHARACTER_SIGNAL, HEART_FADE_SECS, HEART_SIGNAL, RevealSequence,
    RevealStage, TITLE_FADE_SECS, TITLE_SIGNAL,
};

pub fn start_reveal_observer(
    trigger: On<ZoneEnteredEvent>,
    reveal: Option<ResMut<RevealSequence>>,
    mut commands: Commands,
) {
    let event = trigger.event();
    let Some(mut reveal) = reveal else {
        warn!("Zone {:?} fired without a reveal sequence", event.zone);
        return;
    };
    if event.zone != reveal.zone {
        return;
    }
    if reveal.stage != RevealStage::Hidden {
        debug!("Reveal already started, ignoring zone event");
        return;
    }

    let heart = reveal.heart;
    commands.entity(heart).insert(
        TweenAlpha::fade_in(HEART_FADE_SECS)
            .with_easing(Easing::SineInOut)
            .with_signal(HEART_SIGNAL),
    );
    reveal.stage = RevealStage::HeartFadingIn;
    reveal.pending = vec![heart];
    info!("Reveal: {}", reveal.stage.label());
}

pub fn advance_reveal_observer(
    trigger: On<TweenFinishedEvent>,
    reveal: Option<ResMut<RevealSequence>>,
    mut commands: Commands,
) {
    let event = trigger.event();
    let Some(mut reveal) = reveal else {
        return;
    };

    let stage = reveal.stage;
    match stage {
        RevealStage::HeartFadingIn if event.entity == reveal.heart => {
            reveal.complete(event.entity);
            let fades = [
                (reveal.lovely, CHARACTER_FADE_SECS, CHARACTER_SIGNAL),
                (reveal.pooks, CHARACTER_FADE_SECS, CHARACTER_SIGNAL),
                (reveal.title, TITLE_FADE_SECS, TITLE_SIGNAL),
            ];
            for (entity, duration, signal) in fades {
                commands.entity(entity).insert(
                    TweenAlpha::fade_in(duration)
                        .with_easing(Easing::SineInOut)
                        .with_signal(signal),
                );
            }
            reveal.pending = reveal.second_stage().to_vec();
            reveal.stage = RevealStage::CharactersAndTitleFadingIn;
            info!("Reveal: {}", reveal.stage.label());
        }
        RevealStage::CharactersAndTitleFadingIn => {
            if reveal.complete(event.entity) {
                reveal.stage = RevealStage::Settled;
                info!("Reveal: {}", reveal.stage.label());
            }
        }
        _ => {
            debug!(
                "Tween '{}' on {:?} does not advance the reveal",
                event.signal, event.entity
            );
        }
    }
}
