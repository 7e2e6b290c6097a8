//! Pixelroam library.
//!
//! Sprite-sheet animation playback for a small top-down world, exposed as
//! ECS components, resources, systems and events so integration tests and
//! other front ends can drive it.

pub mod animation;
pub mod components;
pub mod error;
pub mod events;
pub mod game;
pub mod geometry;
pub mod renderer;
pub mod resources;
pub mod systems;
