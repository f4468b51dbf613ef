//! Animation resource registry.
//!
//! This module provides a minimal store for animation definitions that can be
//! reused by multiple entities. Systems look up an animation by a string key
//! and drive playback based on the immutable parameters stored here.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

use crate::components::facing::Direction;

/// Central registry of reusable animation definitions keyed by string IDs.
#[derive(Resource, Default)]
pub struct AnimationStore {
    pub animations: FxHashMap<String, AnimationResource>,
}

/// Immutable data describing a frame-sequence animation.
///
/// Each frame is a separate texture, referenced by its key in
/// [`crate::resources::texturestore::TextureStore`].
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationResource {
    /// Texture keys, in playback order.
    pub frames: Vec<String>,
    /// Frames per second playback speed.
    pub fps: f32,
    /// Whether the animation restarts after the last frame.
    pub looped: bool,
}

impl AnimationResource {
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Texture key of frame `index`, clamped to the last frame.
    pub fn frame(&self, index: usize) -> Option<&str> {
        let last = self.frames.len().checked_sub(1)?;
        self.frames.get(index.min(last)).map(String::as_str)
    }
}

/// Frames per walk cycle.
pub const WALK_FRAMES: usize = 6;
/// Walk cycle playback rate.
pub const WALK_FPS: f32 = 10.0;

/// Texture key of frame `n` (1-based) of the walk cycle for `dir`.
pub fn walk_frame_key(dir: Direction, n: usize) -> String {
    format!("{}_{}", dir.key(), n)
}

pub fn walk_animation_key(dir: Direction) -> String {
    format!("walk_{}", dir.key())
}

pub fn idle_animation_key(dir: Direction) -> String {
    format!("idle_{}", dir.key())
}

impl AnimationStore {
    pub fn insert(&mut self, key: impl Into<String>, anim: AnimationResource) {
        self.animations.insert(key.into(), anim);
    }

    pub fn get(&self, key: &str) -> Option<&AnimationResource> {
        self.animations.get(key)
    }

    /// Looping `walk_{dir}` cycles plus single-frame `idle_{dir}` poses for
    /// every direction. The idle pose is the first frame of the walk cycle.
    pub fn walk_cycles() -> Self {
        let mut store = AnimationStore::default();
        for dir in Direction::ALL {
            let frames = (1..=WALK_FRAMES).map(|n| walk_frame_key(dir, n)).collect();
            store.insert(
                walk_animation_key(dir),
                AnimationResource {
                    frames,
                    fps: WALK_FPS,
                    looped: true,
                },
            );
            store.insert(
                idle_animation_key(dir),
                AnimationResource {
                    frames: vec![walk_frame_key(dir, 1)],
                    fps: WALK_FPS,
                    looped: false,
                },
            );
        }
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_cycles_registers_eight_animations() {
        let store = AnimationStore::walk_cycles();
        assert_eq!(store.animations.len(), 8);
        let walk = store.get("walk_left").unwrap();
        assert_eq!(walk.frame_count(), 6);
        assert_eq!(walk.fps, 10.0);
        assert!(walk.looped);
        assert_eq!(walk.frame(0), Some("left_1"));
        assert_eq!(walk.frame(5), Some("left_6"));
    }

    #[test]
    fn test_idle_is_first_walk_frame() {
        let store = AnimationStore::walk_cycles();
        for dir in Direction::ALL {
            let idle = store.get(&idle_animation_key(dir)).unwrap();
            assert_eq!(idle.frames, vec![walk_frame_key(dir, 1)]);
            assert!(!idle.looped);
        }
    }

    #[test]
    fn test_frame_clamps_and_empty() {
        let anim = AnimationResource {
            frames: vec!["a".into(), "b".into()],
            fps: 1.0,
            looped: false,
        };
        assert_eq!(anim.frame(7), Some("b"));
        let empty = AnimationResource {
            frames: Vec::new(),
            fps: 1.0,
            looped: false,
        };
        assert_eq!(empty.frame(0), None);
    }
}
