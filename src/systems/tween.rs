//! Tween animation system.
//!
//! [`tween_alpha_system`] drives every [`TweenAlpha`] by writing the eased
//! opacity into the entity's [`Tint`]. A tween plays once: when its time
//! reaches the duration it stops, parks at `to` and triggers a
//! [`TweenFinishedEvent`] carrying the tween's signal label.
//!
//! The system reads delta time from [`WorldTime`](crate::resources::worldtime::WorldTime).

use crate::components::tint::Tint;
use crate::components::tween::{Easing, TweenAlpha};
use crate::events::tween::TweenFinishedEvent;
use crate::resources::worldtime::WorldTime;
use bevy_ecs::prelude::*;
use log::debug;
use std::f32::consts::PI;

/// Apply an easing function to a normalized time value.
///
/// The input `t` is clamped to [0.0, 1.0] and transformed according to the
/// easing curve.
pub(crate) fn ease(e: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    match e {
        Easing::Linear => t,
        Easing::QuadIn => t * t,
        Easing::QuadOut => t * (2.0 - t),
        Easing::QuadInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                -1.0 + (4.0 - 2.0 * t) * t
            }
        }
        Easing::CubicIn => t * t * t,
        Easing::CubicOut => {
            let p = t - 1.0;
            p * p * p + 1.0
        }
        Easing::CubicInOut => {
            if t < 0.5 {
                4.0 * t * t * t
            } else {
                let p = 2.0 * t - 2.0;
                0.5 * p * p * p + 1.0
            }
        }
        Easing::SineIn => 1.0 - (t * PI * 0.5).cos(),
        Easing::SineOut => (t * PI * 0.5).sin(),
        Easing::SineInOut => -((PI * t).cos() - 1.0) * 0.5,
    }
}

/// Linearly interpolate between two floats.
pub(crate) fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Advance tween time. Returns true on the step that completes the tween.
pub(crate) fn advance(time: &mut f32, duration: f32, playing: &mut bool, dt: f32) -> bool {
    if !*playing {
        return false;
    }
    *time += dt;
    if *time >= duration {
        *time = duration.max(0.0);
        *playing = false;
        return true;
    }
    false
}

/// Animate entity opacity based on [`TweenAlpha`] components.
pub fn tween_alpha_system(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut Tint, &mut TweenAlpha)>,
    mut commands: Commands,
) {
    let dt = world_time.delta.max(0.0);
    for (entity, mut tint, mut tw) in query.iter_mut() {
        if !tw.playing {
            continue;
        }
        let duration = tw.duration;
        let mut t = tw.time;
        let mut playing = tw.playing;
        let finished = advance(&mut t, duration, &mut playing, dt);
        tw.time = t;
        tw.playing = playing;

        let opacity = if finished {
            tw.to
        } else {
            lerp_f32(tw.from, tw.to, ease(tw.easing, tw.progress()))
        };
        tint.set_opacity(opacity);

        if finished {
            debug!("Tween on {:?} finished (signal '{}')", entity, tw.signal);
            commands.trigger(TweenFinishedEvent {
                entity,
                signal: tw.signal.clone(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::observer::On;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    const ALL_EASINGS: [Easing; 10] = [
        Easing::Linear,
        Easing::QuadIn,
        Easing::QuadOut,
        Easing::QuadInOut,
        Easing::CubicIn,
        Easing::CubicOut,
        Easing::CubicInOut,
        Easing::SineIn,
        Easing::SineOut,
        Easing::SineInOut,
    ];

    // ==================== EASING FUNCTION TESTS ====================

    #[test]
    fn test_ease_endpoints() {
        for easing in ALL_EASINGS {
            assert!(
                approx_eq(ease(easing, 0.0), 0.0),
                "{:?} at t=0.0 should be 0.0",
                easing
            );
            assert!(
                (ease(easing, 1.0) - 1.0).abs() < 1e-5,
                "{:?} at t=1.0 should be 1.0",
                easing
            );
        }
    }

    #[test]
    fn test_ease_clamps_out_of_range_input() {
        for easing in ALL_EASINGS {
            assert!(approx_eq(ease(easing, -0.5), 0.0), "{:?}", easing);
            assert!((ease(easing, 1.5) - 1.0).abs() < 1e-5, "{:?}", easing);
        }
    }

    #[test]
    fn test_ease_quad_and_cubic_points() {
        assert!(approx_eq(ease(Easing::QuadIn, 0.5), 0.25));
        assert!(approx_eq(ease(Easing::QuadOut, 0.5), 0.75));
        assert!(approx_eq(ease(Easing::QuadInOut, 0.75), 0.875));
        assert!(approx_eq(ease(Easing::CubicIn, 0.5), 0.125));
        assert!(approx_eq(ease(Easing::CubicOut, 0.5), 0.875));
        assert!(approx_eq(ease(Easing::CubicInOut, 0.25), 0.0625));
    }

    #[test]
    fn test_ease_sine_in_out_symmetry() {
        assert!(approx_eq(ease(Easing::SineInOut, 0.5), 0.5));
        let a = ease(Easing::SineInOut, 0.2);
        let b = ease(Easing::SineInOut, 0.8);
        assert!((a + b - 1.0).abs() < 1e-5);
        // Slow start
        assert!(a < 0.2);
    }

    #[test]
    fn test_ease_sine_in_and_out() {
        assert!((ease(Easing::SineIn, 0.5) - (1.0 - (PI * 0.25).cos())).abs() < 1e-6);
        assert!((ease(Easing::SineOut, 0.5) - (PI * 0.25).sin()).abs() < 1e-6);
    }

    #[test]
    fn test_ease_monotonicity() {
        for easing in ALL_EASINGS {
            let mut prev = ease(easing, 0.0);
            for i in 1..=100 {
                let t = i as f32 / 100.0;
                let curr = ease(easing, t);
                assert!(
                    curr >= prev - EPSILON,
                    "{:?} should be monotonic at t={}",
                    easing,
                    t
                );
                prev = curr;
            }
        }
    }

    // ==================== INTERPOLATION / ADVANCE ====================

    #[test]
    fn test_lerp_f32() {
        assert!(approx_eq(lerp_f32(0.0, 10.0, 0.5), 5.0));
        assert!(approx_eq(lerp_f32(1.0, 0.0, 0.25), 0.75));
        assert!(approx_eq(lerp_f32(5.0, 5.0, 0.7), 5.0));
    }

    #[test]
    fn test_advance_finishes_once() {
        let mut time = 0.0;
        let mut playing = true;
        assert!(!advance(&mut time, 1.0, &mut playing, 0.6));
        assert!(playing);
        assert!(advance(&mut time, 1.0, &mut playing, 0.6));
        assert!(!playing);
        assert_eq!(time, 1.0);
        assert!(!advance(&mut time, 1.0, &mut playing, 0.6));
    }

    #[test]
    fn test_advance_zero_duration_finishes_immediately() {
        let mut time = 0.0;
        let mut playing = true;
        assert!(advance(&mut time, 0.0, &mut playing, 0.0));
        assert!(!playing);
    }

    // ==================== SYSTEM ====================

    #[derive(Resource, Default)]
    struct Finished(Vec<TweenFinishedEvent>);

    fn record(trigger: On<TweenFinishedEvent>, mut finished: ResMut<Finished>) {
        finished.0.push(trigger.event().clone());
    }

    fn world_with_dt(dt: f32) -> World {
        let mut world = World::new();
        world.insert_resource(WorldTime {
            delta: dt,
            ..WorldTime::default()
        });
        world.insert_resource(Finished::default());
        world.spawn(Observer::new(record));
        world
    }

    #[test]
    fn test_system_writes_opacity_and_emits_once() {
        let mut world = world_with_dt(0.25);
        let e = world
            .spawn((Tint::hidden(), TweenAlpha::fade_in(1.0).with_signal("heart")))
            .id();
        let mut schedule = Schedule::default();
        schedule.add_systems(tween_alpha_system);

        schedule.run(&mut world);
        let op = world.get::<Tint>(e).unwrap().opacity();
        assert!((op - 0.25).abs() < 0.01, "opacity {op}");
        assert!(world.resource::<Finished>().0.is_empty());

        for _ in 0..6 {
            schedule.run(&mut world);
        }
        assert_eq!(world.get::<Tint>(e).unwrap().opacity(), 1.0);
        assert!(!world.get::<TweenAlpha>(e).unwrap().playing);
        let finished = &world.resource::<Finished>().0;
        assert_eq!(finished.len(), 1);
        assert_eq!(finished[0].entity, e);
        assert_eq!(finished[0].signal, "heart");
    }

    #[test]
    fn test_fade_out_reaches_zero() {
        let mut world = world_with_dt(0.4);
        let e = world.spawn((Tint::default(), TweenAlpha::fade_out(0.6))).id();
        let mut schedule = Schedule::default();
        schedule.add_systems(tween_alpha_system);
        schedule.run(&mut world);
        schedule.run(&mut world);
        assert_eq!(world.get::<Tint>(e).unwrap().opacity(), 0.0);
        assert_eq!(world.resource::<Finished>().0.len(), 1);
    }
}
