//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: input state, timing, rendering
//! handles, asset stores, and scene state. Each submodule documents the
//! semantics and intended usage of its resource(s).
//!
//! Overview
//! - `animationstore` – frame-sequence animations reused across entities
//! - `camera2d` – shared 2D camera and its smoothed follow state
//! - `debugmode` – presence toggles optional debug overlays
//! - `gameconfig` – settings loaded from the INI config file
//! - `input` – per-frame keyboard state of keys relevant to the game
//! - `reveal` – progress of the one-shot reveal sequence
//! - `screensize` – current framebuffer dimensions in pixels
//! - `texturestore` – loaded textures keyed by string IDs, plus their sizes
//! - `trail` – generated petal trail geometry
//! - `worldtime` – simulation time and delta
pub mod animationstore;
pub mod camera2d;
pub mod debugmode;
pub mod gameconfig;
pub mod input;
pub mod reveal;
pub mod screensize;
pub mod texturestore;
pub mod trail;
pub mod worldtime;
