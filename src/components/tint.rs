//! Color tint component for rendering sprites and text.
//!
//! The [`Tint`] component applies color modulation to entities during rendering:
//! - For sprites: replaces `Color::WHITE` in draw calls
//! - For text: multiplies with the text fill and stroke colors
//!
//! Its alpha channel doubles as the entity's opacity, which is what
//! [`TweenAlpha`](super::tween::TweenAlpha) animates.

use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

/// Color tint component for rendering modulation.
#[derive(Component, Clone, Debug, Copy)]
pub struct Tint {
    pub color: Color,
}

impl Tint {
    /// Create a new Tint with the specified RGBA values.
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            color: Color::new(r, g, b, a),
        }
    }

    /// White tint with the given opacity in `[0, 1]`.
    pub fn with_opacity(opacity: f32) -> Self {
        let mut tint = Self::default();
        tint.set_opacity(opacity);
        tint
    }

    /// Fully transparent white tint.
    pub fn hidden() -> Self {
        Self::with_opacity(0.0)
    }

    /// Opacity in `[0, 1]` derived from the alpha channel.
    pub fn opacity(&self) -> f32 {
        self.color.a as f32 / 255.0
    }

    /// Set the alpha channel from an opacity value; clamped to `[0, 1]`.
    pub fn set_opacity(&mut self, opacity: f32) {
        self.color.a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    }

    /// Multiply this tint with another color (component-wise).
    ///
    /// Used for text rendering where the tint modulates the text's base color.
    pub fn multiply(&self, other: Color) -> Color {
        Color::new(
            ((self.color.r as u16 * other.r as u16) / 255) as u8,
            ((self.color.g as u16 * other.g as u16) / 255) as u8,
            ((self.color.b as u16 * other.b as u16) / 255) as u8,
            ((self.color.a as u16 * other.a as u16) / 255) as u8,
        )
    }
}

impl Default for Tint {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
        }
    }
}
