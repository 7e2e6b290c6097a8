//! Event and observer to mount or dismount the bike.
//!
//! [`update_input_state`](crate::systems::input::update_input_state) fires a
//! [`ToggleBikeEvent`] on the frame the bike key goes down; the observer
//! flips bike mode on every input-controlled character. The next
//! [`animation_selector`](crate::systems::animation::animation_selector) pass
//! then switches the clip to the matching `bike_*` or walking variant.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::entitykind::EntityKind;
use crate::components::inputcontrolled::InputControlled;

#[derive(Event, Debug, Clone, Copy)]
pub struct ToggleBikeEvent {}

pub fn toggle_bike_observer(
    _trigger: On<ToggleBikeEvent>,
    mut query: Query<(Entity, &mut EntityKind), With<InputControlled>>,
) {
    for (entity, mut kind) in query.iter_mut() {
        if !kind.is_character() {
            continue;
        }
        kind.toggle_on_bike();
        debug!("{:?} on_bike={}", entity, kind.on_bike());
    }
}
