//! Shared 2D camera resources.
//!
//! [`Camera2DRes`] wraps raylib's [`raylib::prelude::Camera2D`] so that
//! systems agree on a single world/screen transform. [`CameraFollow`] holds
//! the smoothing parameters used by
//! [`camera_follow_system`](crate::systems::camera::camera_follow_system).

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Camera2D, Vector2};

/// ECS resource that holds the active 2D camera parameters.
#[derive(Resource, Clone, Copy)]
pub struct Camera2DRes(pub Camera2D);

impl Camera2DRes {
    /// Camera centered on `target` for a screen of the given size.
    pub fn looking_at(target: Vector2, screen_w: f32, screen_h: f32, zoom: f32) -> Self {
        Camera2DRes(Camera2D {
            target,
            offset: Vector2 {
                x: screen_w * 0.5,
                y: screen_h * 0.5,
            },
            rotation: 0.0,
            zoom,
        })
    }
}

/// Smoothed follow state.
///
/// `lerp` is the fraction of the remaining distance covered each frame, per axis.
/// `smoothed` is the unrounded camera position; the camera target itself is
/// snapped to whole pixels when `round_pixels` is set.
#[derive(Resource, Clone, Copy, Debug)]
pub struct CameraFollow {
    pub lerp: Vector2,
    pub round_pixels: bool,
    pub smoothed: Vector2,
}

impl CameraFollow {
    pub fn new(lerp: Vector2, round_pixels: bool, start: Vector2) -> Self {
        Self {
            lerp,
            round_pixels,
            smoothed: start,
        }
    }

    /// Move `smoothed` toward `target` and return the position to show.
    pub fn step(&mut self, target: Vector2) -> Vector2 {
        self.smoothed.x += (target.x - self.smoothed.x) * self.lerp.x;
        self.smoothed.y += (target.y - self.smoothed.y) * self.lerp.y;
        self.shown()
    }

    /// Jump straight to `target`, dropping any smoothing in progress.
    pub fn snap(&mut self, target: Vector2) -> Vector2 {
        self.smoothed = target;
        self.shown()
    }

    fn shown(&self) -> Vector2 {
        if self.round_pixels {
            Vector2 {
                x: self.smoothed.x.round(),
                y: self.smoothed.y.round(),
            }
        } else {
            self.smoothed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_covers_lerp_fraction() {
        let mut follow = CameraFollow::new(Vector2 { x: 0.08, y: 0.08 }, false, Vector2::zero());
        let shown = follow.step(Vector2 { x: 100.0, y: -50.0 });
        assert!((shown.x - 8.0).abs() < 1e-5);
        assert!((shown.y + 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_step_rounds_pixels() {
        let mut follow = CameraFollow::new(Vector2 { x: 0.08, y: 0.08 }, true, Vector2::zero());
        let shown = follow.step(Vector2 { x: 10.0, y: 10.0 });
        assert_eq!(shown, Vector2 { x: 1.0, y: 1.0 });
        // Unrounded state keeps the fraction
        assert!((follow.smoothed.x - 0.8).abs() < 1e-5);
    }

    #[test]
    fn test_snap_jumps_and_rounds() {
        let mut follow = CameraFollow::new(Vector2 { x: 0.08, y: 0.08 }, true, Vector2::zero());
        let shown = follow.snap(Vector2 { x: 400.4, y: 739.6 });
        assert_eq!(shown, Vector2 { x: 400.0, y: 740.0 });
        assert_eq!(follow.smoothed, Vector2 { x: 400.4, y: 739.6 });
    }

    #[test]
    fn test_step_converges() {
        let mut follow = CameraFollow::new(Vector2 { x: 0.08, y: 0.08 }, false, Vector2::zero());
        let target = Vector2 { x: 400.0, y: 740.0 };
        for _ in 0..500 {
            follow.step(target);
        }
        assert!((follow.smoothed.x - target.x).abs() < 0.01);
        assert!((follow.smoothed.y - target.y).abs() < 0.01);
    }

    #[test]
    fn test_looking_at_centers_offset() {
        let cam = Camera2DRes::looking_at(Vector2 { x: 1.0, y: 2.0 }, 800.0, 600.0, 2.0);
        assert_eq!(cam.0.offset.x, 400.0);
        assert_eq!(cam.0.offset.y, 300.0);
        assert_eq!(cam.0.zoom, 2.0);
    }
}
