//! Facing direction for four-directional walkers.
//!
//! [`Direction`] is shared by the input controller (which direction the player
//! looks at), the animation rules (which walk cycle to show) and the trail
//! generator (which way a segment runs).

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// One of the four compass directions in screen space (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in the order their walk cycles are registered.
    pub const ALL: [Direction; 4] = [
        Direction::Down,
        Direction::Up,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step for one world unit in this direction.
    pub fn unit(self) -> Vector2 {
        match self {
            Direction::Up => Vector2 { x: 0.0, y: -1.0 },
            Direction::Down => Vector2 { x: 0.0, y: 1.0 },
            Direction::Left => Vector2 { x: -1.0, y: 0.0 },
            Direction::Right => Vector2 { x: 1.0, y: 0.0 },
        }
    }

    /// Lowercase name used to build texture and animation keys.
    pub fn key(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Stable integer code stored in [`Signals`](super::signals::Signals).
    pub fn code(self) -> i32 {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }
}

/// The direction an entity is currently facing.
///
/// Persists while the entity is idle so the idle pose can match the last walk.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Facing(pub Direction);
