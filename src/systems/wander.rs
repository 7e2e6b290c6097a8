//! NPC wandering.
//!
//! Every [`Wander::interval`] seconds an NPC either stops or picks one of the
//! four directions at random and walks that way. The random stream is seeded
//! from [`GameConfig::seed`] so runs are reproducible.
use bevy_ecs::prelude::*;
use log::trace;

use crate::components::facing::Facing;
use crate::components::inputcontrolled::InputControlled;
use crate::components::rigidbody::RigidBody;
use crate::components::wander::Wander;
use crate::geometry::Vec2;
use crate::resources::gameconfig::GameConfig;
use crate::resources::worldtime::WorldTime;

pub fn npc_wander(
    mut query: Query<(Entity, &mut Wander, &mut RigidBody, &mut Facing), Without<InputControlled>>,
    time: Res<WorldTime>,
    config: Option<Res<GameConfig>>,
    mut rng: Local<Option<fastrand::Rng>>,
) {
    let rng = rng.get_or_insert_with(|| {
        let seed = config.as_ref().map(|c| c.seed).unwrap_or_default();
        fastrand::Rng::with_seed(seed.wrapping_add(1))
    });

    for (entity, mut wander, mut rigidbody, mut facing) in query.iter_mut() {
        if !wander.tick(time.delta) {
            continue;
        }
        if rng.f32() < wander.idle_chance {
            rigidbody.set_velocity(Vec2::ZERO);
            trace!("{:?} stops facing {:?}", entity, *facing);
        } else {
            let heading = Facing::ALL[rng.usize(..Facing::ALL.len())];
            *facing = heading;
            rigidbody.set_velocity(heading.unit().scale_by(wander.speed));
            trace!("{:?} wanders {:?}", entity, heading);
        }
    }
}
