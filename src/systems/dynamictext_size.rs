//! DynamicText size caching system.
//!
//! Calculates and caches the bounding box size of [`DynamicText`] components
//! when they are added or modified. The renderer centers text on its position
//! using this cached size, so it avoids per-frame `MeasureTextEx` calls.

use bevy_ecs::change_detection::DetectChangesMut;
use bevy_ecs::prelude::*;
use raylib::ffi;
use raylib::math::Vector2;

use log::{debug, warn};

use crate::components::dynamictext::DynamicText;

/// Recalculates the cached size for any [`DynamicText`] that was added or changed.
///
/// Uses `bypass_change_detection` when updating the size field to avoid
/// re-triggering this system on the next frame. Requires the raylib handle so
/// the default font is guaranteed to exist.
pub fn dynamictext_size_system(
    mut query: Query<&mut DynamicText, Changed<DynamicText>>,
    _rl: NonSend<raylib::RaylibHandle>,
) {
    for mut text in query.iter_mut() {
        debug!("Calculating size for DynamicText: '{}'", text.text);
        let Ok(text_c_string) = std::ffi::CString::new(text.text.as_bytes()) else {
            warn!("DynamicText '{}' contains a NUL byte, size left unchanged", text.text);
            continue;
        };

        let measured = unsafe {
            ffi::MeasureTextEx(
                ffi::GetFontDefault(),
                text_c_string.as_ptr(),
                text.font_size,
                text.spacing(),
            )
        };

        let size = Vector2::new(measured.x, measured.y);
        text.bypass_change_detection().set_size(size);
    }
}
