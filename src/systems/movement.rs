use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::worldtime::WorldTime;

pub fn movement(mut query: Query<(&mut MapPosition, &RigidBody)>, time: Res<WorldTime>) {
    for (mut position, rigidbody) in query.iter_mut() {
        if !rigidbody.is_moving() {
            continue;
        }
        let delta = rigidbody.velocity.scale_by(time.delta);
        position.pos += delta;
    }
}
