//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the scene. Components define data such as position, rendering, collision,
//! animation and input control.
//!
//! Submodules overview:
//! - [`animation`] – playback state and a rule-based controller for frame animations
//! - [`boxcollider`] – axis-aligned rectangular collider for overlap tests
//! - [`cameratarget`] – marker for the entity the camera follows
//! - [`dynamictext`] – text label with optional outline
//! - [`facing`] – four-way [`facing::Direction`] and the `Facing` component
//! - [`group`] – tag component for grouping entities by name
//! - [`helperhint`] – instructions that fade away once the player moves
//! - [`inputcontrolled`] – keyboard-driven walking speed
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`rigidbody`] – simple kinematic body storing velocity
//! - [`signals`] – per-entity flags and integers for cross-system communication
//! - [`sprite`] – 2D sprite rendering component
//! - [`tint`] – color modulation and opacity
//! - [`triggerzone`] – one-shot overlap trigger
//! - [`ttl`] – despawn after a delay
//! - [`tween`] – animated opacity with easing
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod animation;
pub mod boxcollider;
pub mod cameratarget;
pub mod dynamictext;
pub mod facing;
pub mod group;
pub mod helperhint;
pub mod inputcontrolled;
pub mod mapposition;
pub mod rigidbody;
pub mod signals;
pub mod sprite;
pub mod tint;
pub mod triggerzone;
pub mod ttl;
pub mod tween;
pub mod zindex;
