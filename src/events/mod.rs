//! Event types and observers used by the game.
//!
//! Events provide a decoupled way for systems to communicate: a system
//! triggers an event and observers react during the same frame.
//!
//! Submodules:
//! - [`switchdebug`] – toggle debug rendering on/off
//! - [`tween`] – a tween reached its end
//! - [`zone`] – a trigger zone fired
pub mod switchdebug;
pub mod tween;
pub mod zone;
