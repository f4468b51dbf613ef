//! Tween components for animated interpolation.
//!
//! [`TweenAlpha`] animates the opacity stored in an entity's
//! [`Tint`](super::tint::Tint). It plays once, then stays parked at its final
//! value and the tween system emits a
//! [`TweenFinishedEvent`](crate::events::tween::TweenFinishedEvent).
//!
//! See [`crate::systems::tween`] for the update system and easing curves.

use bevy_ecs::prelude::Component;

/// Easing functions for smooth interpolation.
///
/// These functions transform a linear `t` value (0.0 to 1.0) to create
/// different acceleration/deceleration curves.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Easing {
    /// Constant speed (no easing).
    Linear,
    /// Starts slow, accelerates (quadratic).
    QuadIn,
    /// Starts fast, decelerates (quadratic).
    QuadOut,
    /// Slow start and end (quadratic).
    QuadInOut,
    /// Starts slow, accelerates (cubic).
    CubicIn,
    /// Starts fast, decelerates (cubic).
    CubicOut,
    /// Slow start and end (cubic).
    CubicInOut,
    /// Quarter sine wave, slow start.
    SineIn,
    /// Quarter sine wave, slow end.
    SineOut,
    /// Half sine wave, slow start and end.
    SineInOut,
}

/// Animates an entity's opacity between two values.
///
/// The tween interpolates `from` to `to` over `duration` seconds using the
/// specified `easing` function. `signal` is copied into the finished event so
/// observers can tell tweens apart.
#[derive(Component, Clone, Debug)]
pub struct TweenAlpha {
    /// Starting opacity.
    pub from: f32,
    /// Ending opacity.
    pub to: f32,
    /// Duration in seconds.
    pub duration: f32,
    /// Easing function to use.
    pub easing: Easing,
    /// Whether the tween is currently playing.
    pub playing: bool,
    /// Current time within the tween.
    pub time: f32,
    /// Label reported when the tween finishes.
    pub signal: String,
}

impl TweenAlpha {
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        TweenAlpha {
            from,
            to,
            duration,
            easing: Easing::Linear,
            playing: true,
            time: 0.0,
            signal: String::new(),
        }
    }

    /// Opacity 0 → 1.
    pub fn fade_in(duration: f32) -> Self {
        Self::new(0.0, 1.0, duration)
    }

    /// Opacity 1 → 0.
    pub fn fade_out(duration: f32) -> Self {
        Self::new(1.0, 0.0, duration)
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_signal(mut self, signal: impl Into<String>) -> Self {
        self.signal = signal.into();
        self
    }

    /// Normalized progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.time / self.duration).clamp(0.0, 1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tween_alpha_new() {
        let tw = TweenAlpha::new(0.2, 0.8, 2.0);
        assert_eq!(tw.from, 0.2);
        assert_eq!(tw.to, 0.8);
        assert_eq!(tw.duration, 2.0);
        assert_eq!(tw.easing, Easing::Linear);
        assert!(tw.playing);
        assert_eq!(tw.time, 0.0);
        assert!(tw.signal.is_empty());
    }

    #[test]
    fn test_fade_helpers() {
        let fin = TweenAlpha::fade_in(1.5).with_easing(Easing::SineInOut);
        assert_eq!((fin.from, fin.to), (0.0, 1.0));
        assert_eq!(fin.easing, Easing::SineInOut);

        let fout = TweenAlpha::fade_out(0.6).with_signal("hint");
        assert_eq!((fout.from, fout.to), (1.0, 0.0));
        assert_eq!(fout.signal, "hint");
    }

    #[test]
    fn test_progress_handles_zero_duration() {
        let tw = TweenAlpha::fade_in(0.0);
        assert_eq!(tw.progress(), 1.0);

        let mut tw = TweenAlpha::fade_in(2.0);
        tw.time = 0.5;
        assert_eq!(tw.progress(), 0.25);
    }
}
