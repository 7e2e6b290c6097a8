//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the game world. An animated entity is a sprite, a position and an
//! [`animation::AnimationController`]; the [`entitykind::EntityKind`] tag
//! decides which extra behavior applies.
//!
//! Submodules overview:
//! - [`animation`] – per-entity clip registry and playback state machine
//! - [`entitykind`] – prop / NPC / player character tag with mode flags
//! - [`facing`] – direction the entity looks at
//! - [`inputcontrolled`] – keyboard-driven movement speeds for the player
//! - [`mapposition`] – world-space position of the entity
//! - [`rigidbody`] – velocity integrated by the movement system
//! - [`sprite`] – texture key and source rectangle to draw
//! - [`wander`] – random walk timer for NPCs

pub mod animation;
pub mod entitykind;
pub mod facing;
pub mod inputcontrolled;
pub mod mapposition;
pub mod rigidbody;
pub mod sprite;
pub mod wander;
