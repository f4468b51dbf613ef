//! Game systems.
//!
//! This module groups all ECS systems and observers that advance simulation,
//! input, and rendering.
//!
//! Submodules overview
//! - [`animation`] – advance frame animations and select tracks via rules
//! - [`camera`] – smoothed camera follow
//! - [`dynamictext_size`] – cache measured text sizes
//! - [`helperhint`] – fade the instructions out on first movement
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`inputwalkcontroller`] – translate input state into velocity, facing and walk signals
//! - [`movement`] – integrate positions from rigid body velocities and time
//! - [`render`] – draw world and debug overlays using Raylib
//! - [`reveal`] – observers that drive the reveal sequence
//! - [`time`] – update simulation time and delta
//! - [`triggerzone`] – one-shot overlap detection
//! - [`ttl`] – despawn entities whose time ran out
//! - [`tween`] – animate opacity over time

pub mod animation;
pub mod camera;
pub mod dynamictext_size;
pub mod helperhint;
pub mod input;
pub mod inputwalkcontroller;
pub mod movement;
pub mod render;
pub mod reveal;
pub mod time;
pub mod triggerzone;
pub mod ttl;
pub mod tween;
