//! Kinematic body component.
//!
//! The [`RigidBody`] stores the velocity integrated by the
//! [`movement`](crate::systems::movement::movement) system. There is no
//! gravity and no acceleration model: controllers write the velocity directly
//! every frame.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Kinematic body storing a velocity in world units per second.
#[derive(Component, Clone, Copy, Debug)]
pub struct RigidBody {
    pub velocity: Vector2,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Create a RigidBody with zero velocity.
    pub fn new() -> Self {
        Self {
            velocity: Vector2 { x: 0.0, y: 0.0 },
        }
    }

    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
    }

    /// True when the velocity is non-zero on any axis.
    pub fn is_moving(&self) -> bool {
        self.velocity.x != 0.0 || self.velocity.y != 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rigidbody_new_is_still() {
        assert!(!RigidBody::new().is_moving());
    }

    #[test]
    fn test_single_axis_counts_as_moving() {
        let mut rb = RigidBody::default();
        rb.set_velocity(Vector2 { x: -120.0, y: 0.0 });
        assert!(rb.is_moving());
        rb.set_velocity(Vector2::zero());
        assert!(!rb.is_moving());
    }
}
