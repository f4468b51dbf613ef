use bevy_ecs::prelude::Component;
use raylib::prelude::{Color, Vector2};

/// Outline drawn around each glyph of a [`DynamicText`].
#[derive(Clone, Copy, Debug)]
pub struct TextStroke {
    pub color: Color,
    pub thickness: f32,
}

#[derive(Component, Clone, Debug)]
/// Text label rendered in the world, centered on its position.
pub struct DynamicText {
    /// The text content to render.
    pub text: String,
    /// Font size in world units.
    pub font_size: f32,
    /// Fill color of the text.
    pub color: Color,
    /// Optional outline.
    pub stroke: Option<TextStroke>,
    /// Cached measured size, filled in by the size system.
    size: Vector2,
}

impl DynamicText {
    pub fn new(text: impl Into<String>, font_size: f32, color: Color) -> Self {
        Self {
            text: text.into(),
            font_size,
            color,
            stroke: None,
            size: Vector2::zero(),
        }
    }

    pub fn with_stroke(mut self, color: Color, thickness: f32) -> Self {
        self.stroke = Some(TextStroke { color, thickness });
        self
    }

    /// Spacing between glyphs, scaled like raylib's default-font text.
    pub fn spacing(&self) -> f32 {
        self.font_size / 10.0
    }

    pub fn size(&self) -> Vector2 {
        self.size
    }

    pub fn set_size(&mut self, size: Vector2) {
        self.size = size;
    }
}
