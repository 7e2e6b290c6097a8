//! Event types and observers.
//!
//! Events let the input system ask for world changes without reaching into
//! the components or resources those changes touch.
//!
//! Submodules:
//! - [`input`] – logical input actions and press/release notifications
//! - [`switchdebug`] – toggle the debug overlay on/off
//! - [`togglebike`] – mount or dismount the player's bike
pub mod input;
pub mod switchdebug;
pub mod togglebike;
