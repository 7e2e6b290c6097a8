//! Simple input-to-velocity controller.
//!
//! Reads the shared [`InputState`](crate::resources::input::InputState) and
//! applies directional velocities to entities with an
//! [`InputControlled`](crate::components::inputcontrolled::InputControlled)
//! component. Diagonal movement is normalized to maintain constant speed.
use bevy_ecs::prelude::*;

use crate::components::entitykind::EntityKind;
use crate::components::facing::Facing;
use crate::components::inputcontrolled::InputControlled;
use crate::components::rigidbody::RigidBody;
use crate::events::input::InputAction;
use crate::geometry::Vec2;
use crate::resources::input::InputState;

/// Update each controlled entity's velocity, facing and running flag.
pub fn input_simple_controller(
    mut query: Query<(
        &InputControlled,
        &mut RigidBody,
        &mut Facing,
        &mut EntityKind,
    )>,
    input_state: Res<InputState>,
) {
    for (controlled, mut rigidbody, mut facing, mut kind) in query.iter_mut() {
        let mut next_kind = *kind;
        next_kind.set_running(input_state.is_active(InputAction::Run));
        kind.set_if_neq(next_kind);

        let mut direction = Vec2::ZERO;
        if input_state.is_active(InputAction::Up) {
            direction.y -= 1.0;
        }
        if input_state.is_active(InputAction::Down) {
            direction.y += 1.0;
        }
        if input_state.is_active(InputAction::Left) {
            direction.x -= 1.0;
        }
        if input_state.is_active(InputAction::Right) {
            direction.x += 1.0;
        }

        // Normalize diagonal movement
        if direction.x != 0.0 && direction.y != 0.0 {
            direction = direction.scale_by(std::f32::consts::FRAC_1_SQRT_2);
        }

        let velocity = direction.scale_by(controlled.speed_for(&kind));
        if rigidbody.velocity != velocity {
            rigidbody.set_velocity(velocity);
        }
        if let Some(new_facing) = Facing::from_velocity(direction) {
            facing.set_if_neq(new_facing);
        }
    }
}
