//! Four-directional walk controller.
//!
//! Reads the shared [`InputState`](crate::resources::input::InputState) and
//! drives entities carrying [`InputControlled`]:
//!
//! - horizontal: left wins over right; vertical: up wins over down
//! - each active axis moves at `speed`; diagonals are not normalized
//! - facing follows the horizontal key first, then the vertical key, so the
//!   vertical direction is shown when both axes are held
//! - with no key held the velocity is zero and the facing is kept
//!
//! The outcome is also mirrored into [`Signals`] (`moving` flag and `facing`
//! integer) so animation rules can pick the matching walk or idle cycle.
use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::facing::{Direction, Facing};
use crate::components::inputcontrolled::InputControlled;
use crate::components::rigidbody::RigidBody;
use crate::components::signals::Signals;
use crate::resources::input::InputState;

pub const MOVING_FLAG: &str = "moving";
pub const FACING_KEY: &str = "facing";

/// Resolved intent for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkIntent {
    /// Per-axis sign in `{-1, 0, 1}`.
    pub axis: Vector2,
    /// New facing, or `None` when no key is held.
    pub facing: Option<Direction>,
}

impl WalkIntent {
    pub fn is_moving(&self) -> bool {
        self.axis.x != 0.0 || self.axis.y != 0.0
    }
}

/// Resolve the held keys into per-axis movement and a facing.
pub fn resolve_walk(input: &InputState) -> WalkIntent {
    let mut axis = Vector2::zero();
    let mut facing = None;

    if input.held(Direction::Left) {
        axis.x = -1.0;
        facing = Some(Direction::Left);
    } else if input.held(Direction::Right) {
        axis.x = 1.0;
        facing = Some(Direction::Right);
    }

    if input.held(Direction::Up) {
        axis.y = -1.0;
        facing = Some(Direction::Up);
    } else if input.held(Direction::Down) {
        axis.y = 1.0;
        facing = Some(Direction::Down);
    }

    WalkIntent { axis, facing }
}

/// Update velocity, facing and walk signals of every controlled entity.
pub fn input_walk_controller(
    mut query: Query<(
        &InputControlled,
        &mut RigidBody,
        &mut Facing,
        Option<&mut Signals>,
    )>,
    input_state: Res<InputState>,
) {
    let intent = resolve_walk(&input_state);
    for (controlled, mut rigidbody, mut facing, maybe_signals) in query.iter_mut() {
        rigidbody.set_velocity(intent.axis.scale_by(controlled.speed));
        if let Some(dir) = intent.facing {
            if facing.0 != dir {
                facing.0 = dir;
            }
        }
        if let Some(mut signals) = maybe_signals {
            signals.put_flag(MOVING_FLAG, intent.is_moving());
            if signals.get_integer(FACING_KEY) != Some(facing.0.code()) {
                signals.set_integer(FACING_KEY, facing.0.code());
            }
        }
    }
}
