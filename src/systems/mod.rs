//! Engine systems.
//!
//! This module groups all ECS systems that advance simulation, input, and
//! rendering.
//!
//! Submodules overview
//! - [`animation`] – pick clips from entity state and advance playback
//! - [`input`] – age key states and replay scripted input into [`crate::resources::input::InputState`]
//! - [`inputsimplecontroller`] – translate input state into velocity and facing on the player
//! - [`movement`] – integrate positions from rigid body velocities and time
//! - [`render`] – fill the render queue with sprites and debug text
//! - [`time`] – update simulation time and delta
//! - [`wander`] – random walking for NPCs

pub mod animation;
pub mod input;
pub mod inputsimplecontroller;
pub mod movement;
pub mod render;
pub mod time;
pub mod wander;
