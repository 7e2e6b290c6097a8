//! Kinematic body component.
//!
//! [`RigidBody`] only stores a velocity; the
//! [`movement`](crate::systems::movement::movement) system integrates it into
//! [`MapPosition`](super::mapposition::MapPosition) and the animation selector
//! reads it to tell walking entities from idle ones.

use bevy_ecs::prelude::Component;

use crate::geometry::Vec2;

#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct RigidBody {
    /// Current velocity in pixels per second.
    pub velocity: Vec2,
}

impl RigidBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    pub fn stop(&mut self) {
        self.velocity = Vec2::ZERO;
    }

    pub fn is_moving(&self) -> bool {
        !self.velocity.is_zero()
    }
}
