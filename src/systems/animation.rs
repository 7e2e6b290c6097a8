//! Animation systems.
//!
//! - [`animation_selector`] picks the clip an entity should show from its
//!   [`EntityKind`], [`Facing`] and whether it is moving.
//! - [`animation`] advances every [`AnimationController`] by the world delta
//!   and copies the current frame into the entity's [`Sprite`].
//!
//! # Animation Flow
//!
//! 1. Clip definitions live in [`AnimationStore`](crate::resources::animationstore::AnimationStore)
//! 2. Entities carry an [`AnimationController`] holding the clips they can show
//! 3. `animation_selector` calls `play` with names such as `walk_left`
//! 4. `animation` feeds [`WorldTime::delta`] to the controller and updates the sprite

use bevy_ecs::prelude::*;
use log::{trace, warn};
use rustc_hash::FxHashMap;

use crate::components::animation::AnimationController;
use crate::components::entitykind::EntityKind;
use crate::components::facing::Facing;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::error::AnimationError;
use crate::resources::worldtime::WorldTime;

/// Switch each entity's controller to the clip matching its state.
///
/// Props are left alone. Names missing from the controller are ignored by
/// [`AnimationController::play`], so entities without e.g. bike clips keep
/// their current clip.
pub fn animation_selector(
    mut query: Query<(Entity, &EntityKind, &Facing, &RigidBody, &mut AnimationController)>,
) {
    for (entity, kind, facing, rigidbody, mut controller) in query.iter_mut() {
        let Some(name) = kind.clip_name(*facing, rigidbody.is_moving()) else {
            continue;
        };
        if controller.current_animation_name() == name {
            continue;
        }
        trace!(
            "{:?}: '{}' -> '{}'",
            entity,
            controller.current_animation_name(),
            name
        );
        controller.play(&name);
    }
}

/// Advance animation playback and update the sprite frame.
///
/// Contract
/// - Reads [`WorldTime`] for the scaled delta in seconds.
/// - Mutates [`AnimationController`] playback state.
/// - Writes the current frame's crop rect and flip flag into [`Sprite`].
/// - An entity whose controller has no drawable frame keeps its sprite; the
///   failure is logged once until it changes or clears.
pub fn animation(
    mut query: Query<(Entity, &mut AnimationController, &mut Sprite)>,
    time: Res<WorldTime>,
    mut reported: Local<FxHashMap<Entity, AnimationError>>,
) {
    for (entity, mut controller, mut sprite) in query.iter_mut() {
        controller.update(time.delta);

        match controller.get_current_frame() {
            Ok(frame) => {
                if sprite.frame != frame.rect || sprite.flip_h != frame.is_flipped {
                    sprite.frame = frame.rect;
                    sprite.flip_h = frame.is_flipped;
                }
                reported.remove(&entity);
            }
            Err(err) => {
                if reported.get(&entity) != Some(&err) {
                    warn!("{:?}: no frame to show: {}", entity, err);
                    reported.insert(entity, err);
                }
            }
        }
    }

    if !reported.is_empty() {
        forget_missing(&mut reported, |entity| query.contains(entity));
    }
}

/// Drop memoized failures for entities that are no longer animated
/// (despawned, or stripped of their controller or sprite).
fn forget_missing(
    reported: &mut FxHashMap<Entity, AnimationError>,
    alive: impl Fn(Entity) -> bool,
) {
    reported.retain(|entity, _| {
        let keep = alive(*entity);
        if !keep {
            trace!("{:?}: forgetting reported animation failure", entity);
        }
        keep
    });
}
