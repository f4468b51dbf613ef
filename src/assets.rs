//! Static asset manifest and texture loading.
//!
//! The game ships a fixed list of images: four walk cycles of six frames
//! (`{dir}_{n}`) and four standalone pictures. [`load_textures`] loads the
//! whole list before the scene starts; the first failure aborts loading.

use std::path::{Path, PathBuf};

use log::{debug, info};
use raylib::ffi::{self, TextureFilter};
use raylib::prelude::*;
use thiserror::Error;

use crate::components::facing::Direction;
use crate::resources::animationstore::{WALK_FRAMES, walk_frame_key};
use crate::resources::texturestore::TextureStore;

pub const PETAL: &str = "petal";
pub const HEART_SCENE: &str = "heart_scene";
pub const LOVELY: &str = "lovely";
pub const POOKS: &str = "pooks";

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to load texture '{key}' from {path}: {reason}")]
    Texture {
        key: String,
        path: PathBuf,
        reason: String,
    },
}

/// One texture to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEntry {
    pub key: String,
    /// Path relative to the assets directory.
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default)]
pub struct AssetManifest {
    pub entries: Vec<AssetEntry>,
}

impl AssetManifest {
    pub fn push(&mut self, key: impl Into<String>, path: impl Into<PathBuf>) {
        self.entries.push(AssetEntry {
            key: key.into(),
            path: path.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every image the scene uses.
    pub fn petal_trail() -> Self {
        let mut manifest = AssetManifest::default();
        for dir in Direction::ALL {
            for n in 1..=WALK_FRAMES {
                manifest.push(walk_frame_key(dir, n), walk_frame_path(dir, n));
            }
        }
        manifest.push(PETAL, "Petal trail.png");
        manifest.push(HEART_SCENE, "HeartScene.png");
        manifest.push(LOVELY, "Lovely Sprite.png");
        manifest.push(POOKS, "PooksSprite.png");
        manifest
    }
}

fn walk_frame_path(dir: Direction, n: usize) -> PathBuf {
    let file = match dir {
        Direction::Down => format!("Down/Base_run_down_{n}.png"),
        Direction::Up => format!("Up/Base_run_up_{n}.png"),
        Direction::Left => format!("Left/base_run_left_{n}.png"),
        Direction::Right => format!("Right/base_run_right_{n}.png"),
    };
    Path::new("VicSprite").join(file)
}

/// Load every manifest entry from `base_dir`.
///
/// With `pixel_art` set, textures use nearest-neighbour filtering.
pub fn load_textures(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    manifest: &AssetManifest,
    base_dir: &Path,
    pixel_art: bool,
) -> Result<TextureStore, AssetError> {
    let mut store = TextureStore::new();
    for entry in &manifest.entries {
        let path = base_dir.join(&entry.path);
        let texture = rl
            .load_texture(thread, &path.to_string_lossy())
            .map_err(|e| AssetError::Texture {
                key: entry.key.clone(),
                path: path.clone(),
                reason: e.to_string(),
            })?;
        if pixel_art {
            unsafe {
                ffi::SetTextureFilter(*texture, TextureFilter::TEXTURE_FILTER_POINT as i32);
            }
        }
        debug!(
            "Loaded '{}' ({}x{}) from {:?}",
            entry.key, texture.width, texture.height, path
        );
        store.insert(entry.key.clone(), texture);
    }
    info!("Loaded {} textures from {:?}", store.len(), base_dir);
    Ok(store)
}
