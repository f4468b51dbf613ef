//! Loaded textures and their dimensions.
//!
//! [`TextureStore`] owns the GPU handles and is only touched by the renderer.
//! [`TextureSizes`] mirrors the pixel size of every stored texture so that
//! spawning and layout code never needs a graphics context.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Texture2D, Vector2};
use rustc_hash::FxHashMap;

#[derive(Resource, Default)]
pub struct TextureStore {
    pub map: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, texture: Texture2D) {
        self.map.insert(key.into(), texture);
    }

    pub fn get(&self, key: &str) -> Option<&Texture2D> {
        self.map.get(key)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Pixel size of every stored texture.
    pub fn sizes(&self) -> TextureSizes {
        let mut sizes = TextureSizes::default();
        for (key, tex) in &self.map {
            sizes.insert(
                key.clone(),
                Vector2 {
                    x: tex.width as f32,
                    y: tex.height as f32,
                },
            );
        }
        sizes
    }
}

/// Texture dimensions in pixels, keyed like [`TextureStore`].
#[derive(Resource, Default, Debug, Clone)]
pub struct TextureSizes {
    pub map: FxHashMap<String, Vector2>,
}

impl TextureSizes {
    pub fn insert(&mut self, key: impl Into<String>, size: Vector2) {
        self.map.insert(key.into(), size);
    }

    pub fn get(&self, key: &str) -> Option<Vector2> {
        self.map.get(key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texture_sizes_lookup() {
        let mut sizes = TextureSizes::default();
        sizes.insert("heart_scene", Vector2 { x: 96.0, y: 80.0 });
        assert_eq!(sizes.get("heart_scene"), Some(Vector2 { x: 96.0, y: 80.0 }));
        assert_eq!(sizes.get("missing"), None);
    }
}
