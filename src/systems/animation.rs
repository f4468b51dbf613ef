//! Animation systems.
//!
//! - [`animation`] advances animations based on elapsed time and points the
//!   sprite at the texture of the current frame.
//! - [`animation_controller`] selects which animation should be active based
//!   on a set of rule conditions evaluated against entity [`Signals`](crate::components::signals::Signals).
//!
//! # Animation Flow
//!
//! 1. Animation data is defined in [`AnimationStore`](crate::resources::animationstore::AnimationStore)
//! 2. Entities have an [`Animation`](crate::components::animation::Animation) component pointing to a key
//! 3. The `animation_controller` system evaluates rules against signals to switch animations
//! 4. The `animation` system advances frames based on `fps` and updates [`Sprite::tex_key`](crate::components::sprite::Sprite)
//!
//! Switching to a different key restarts playback at the first frame. Keeping
//! the same key leaves playback untouched.

use bevy_ecs::prelude::*;

use crate::components::animation::{Animation, AnimationController, CmpOp, Condition};
use crate::components::signals::Signals;
use crate::components::sprite::Sprite;
use crate::resources::animationstore::AnimationStore;
use crate::resources::worldtime::WorldTime;

/// Advance animation playback and update the sprite frame.
///
/// Contract
/// - Reads [`WorldTime`] for the frame delta.
/// - Looks up animation data from [`AnimationStore`].
/// - Mutates [`Animation`] component state and [`Sprite`] texture key.
/// - Sets the `animation_ended` flag when a non-looping animation reaches its last frame.
pub fn animation(
    mut query: Query<(&mut Animation, &mut Sprite, Option<&mut Signals>)>,
    animation_store: Res<AnimationStore>,
    time: Res<WorldTime>,
) {
    for (mut anim_comp, mut sprite, mut maybe_signals) in query.iter_mut() {
        let Some(animation) = animation_store.get(&anim_comp.animation_key) else {
            continue;
        };
        let frame_count = animation.frame_count();
        if frame_count == 0 {
            continue;
        }

        if animation.fps > 0.0 {
            anim_comp.elapsed_time += time.delta;
            let frame_duration = 1.0 / animation.fps;
            while anim_comp.elapsed_time >= frame_duration {
                anim_comp.elapsed_time -= frame_duration;
                anim_comp.frame_index += 1;

                if anim_comp.frame_index >= frame_count {
                    if animation.looped {
                        anim_comp.frame_index = 0;
                    } else {
                        // stay on last frame
                        anim_comp.frame_index = frame_count - 1;
                        anim_comp.elapsed_time = 0.0;
                        if let Some(signals) = maybe_signals.as_mut() {
                            signals.set_flag("animation_ended");
                        }
                        break;
                    }
                }
            }
        }

        if let Some(frame_key) = animation.frame(anim_comp.frame_index) {
            if sprite.tex_key != frame_key {
                sprite.tex_key = frame_key.to_string();
            }
        }
    }
}

/// Evaluate a controller condition against an entity's current signals.
///
/// Recursively evaluates conditions including `All`, `Any`, and `Not`
/// combinators. Returns true if the condition is satisfied.
fn evaluate_condition(signals: &Signals, condition: &Condition) -> bool {
    match condition {
        Condition::IntegerCmp { key, op, value } => {
            if let Some(signal_value) = signals.get_integer(key) {
                match op {
                    CmpOp::Lt => signal_value < *value,
                    CmpOp::Le => signal_value <= *value,
                    CmpOp::Gt => signal_value > *value,
                    CmpOp::Ge => signal_value >= *value,
                    CmpOp::Eq => signal_value == *value,
                    CmpOp::Ne => signal_value != *value,
                }
            } else {
                false
            }
        }
        Condition::HasFlag { key } => signals.has_flag(key),
        Condition::LacksFlag { key } => !signals.has_flag(key),
        Condition::All(conditions) => conditions
            .iter()
            .all(|cond| evaluate_condition(signals, cond)),
        Condition::Any(conditions) => conditions
            .iter()
            .any(|cond| evaluate_condition(signals, cond)),
        Condition::Not(cond) => !evaluate_condition(signals, cond),
    }
}

/// Switch each controlled entity to the first animation whose rule holds.
pub fn animation_controller(
    mut query: Query<(&mut AnimationController, &mut Animation, &Signals)>,
) {
    for (mut controller, mut animation, signals) in query.iter_mut() {
        let selected = controller
            .rules
            .iter()
            .find(|rule| evaluate_condition(signals, &rule.when))
            .map(|rule| rule.set_key.as_str())
            .unwrap_or(controller.fallback_key.as_str());
        if animation.animation_key != selected {
            let target_key = selected.to_string();
            animation.animation_key = target_key.clone();
            animation.frame_index = 0;
            animation.elapsed_time = 0.0;
            controller.current_key = target_key;
        }
    }
}
