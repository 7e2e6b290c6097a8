//! Input-controlled movement component.
//!
//! Marks the entity driven by the keyboard and stores how fast it moves in
//! each character mode. The
//! [`input_simple_controller`](crate::systems::inputsimplecontroller::input_simple_controller)
//! system reads the shared [`InputState`](crate::resources::input::InputState)
//! and writes the resulting velocity into the entity's
//! [`RigidBody`](super::rigidbody::RigidBody).

use bevy_ecs::prelude::Component;

use crate::components::entitykind::EntityKind;

/// Movement speeds in pixels per second.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct InputControlled {
    pub walk_speed: f32,
    pub run_speed: f32,
    pub bike_speed: f32,
}

impl InputControlled {
    pub fn new(walk_speed: f32, run_speed: f32, bike_speed: f32) -> Self {
        Self {
            walk_speed,
            run_speed,
            bike_speed,
        }
    }

    /// Speed for the kind's current mode. Biking wins over running.
    pub fn speed_for(&self, kind: &EntityKind) -> f32 {
        match kind {
            EntityKind::Character(mode) if mode.on_bike => self.bike_speed,
            EntityKind::Character(mode) if mode.running => self.run_speed,
            _ => self.walk_speed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::entitykind::CharacterMode;

    #[test]
    fn test_speed_for_modes() {
        let ic = InputControlled::new(60.0, 120.0, 200.0);
        assert_eq!(ic.speed_for(&EntityKind::character()), 60.0);
        let running = EntityKind::Character(CharacterMode {
            on_bike: false,
            running: true,
        });
        assert_eq!(ic.speed_for(&running), 120.0);
        let biking = EntityKind::Character(CharacterMode {
            on_bike: true,
            running: true,
        });
        assert_eq!(ic.speed_for(&biking), 200.0);
        assert_eq!(ic.speed_for(&EntityKind::Npc), 60.0);
    }
}
