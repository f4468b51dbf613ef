//! Camera follow system.
//!
//! Eases the shared [`Camera2DRes`] toward the entity marked with
//! [`CameraTarget`]. The world is unbounded, so the camera is never clamped.

use bevy_ecs::prelude::*;

use crate::components::cameratarget::CameraTarget;
use crate::components::mapposition::MapPosition;
use crate::resources::camera2d::{Camera2DRes, CameraFollow};
use crate::resources::screensize::ScreenSize;

pub fn camera_follow_system(
    target: Query<&MapPosition, With<CameraTarget>>,
    mut follow: ResMut<CameraFollow>,
    mut camera: ResMut<Camera2DRes>,
    screen: Res<ScreenSize>,
) {
    let Some(position) = target.iter().next() else {
        return;
    };
    let shown = follow.step(position.pos);
    camera.0.target = shown;
    camera.0.offset.x = screen.w as f32 * 0.5;
    camera.0.offset.y = screen.h as f32 * 0.5;
}
