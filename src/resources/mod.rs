//! ECS resources shared by the systems.
//!
//! - [`animationstore`] – named clip definitions shared between entities
//! - [`debugmode`] – marker present while the debug overlay is on
//! - [`gameconfig`] – INI-backed settings
//! - [`input`] – per-action key states
//! - [`inputscript`] – frame-stamped scripted key presses
//! - [`renderqueue`] – draw commands for the current frame
//! - [`worldtime`] – simulation clock

pub mod animationstore;
pub mod debugmode;
pub mod gameconfig;
pub mod input;
pub mod inputscript;
pub mod renderqueue;
pub mod worldtime;
