use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Sprite is identified by a texture key and drawn at a display size in world units.
/// The whole texture is the source; `width`/`height` only scale the destination.
/// The origin selects the pivot point (in display units) relative to the sprite's
/// top-left corner used for placement when rendering.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub origin: Vector2,
    pub flip_h: bool,
}

impl Sprite {
    /// Sprite whose pivot sits in its center.
    pub fn centered(tex_key: impl Into<String>, size: Vector2) -> Self {
        Self {
            tex_key: tex_key.into(),
            width: size.x,
            height: size.y,
            origin: Vector2 {
                x: size.x * 0.5,
                y: size.y * 0.5,
            },
            flip_h: false,
        }
    }

    pub fn with_flip_h(mut self, flip_h: bool) -> Self {
        self.flip_h = flip_h;
        self
    }
}
