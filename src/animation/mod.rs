//! Sprite-sheet animation data.
//!
//! - [`frame`] – one crop region of a sprite sheet plus its display duration
//! - [`clip`] – a named, ordered list of frames and its playback direction
//!
//! Playback state (current frame, timer, ping-pong phase) lives in the
//! per-entity [`AnimationController`](crate::components::animation::AnimationController);
//! clips themselves are plain data and can be shared between entities through
//! the [`AnimationStore`](crate::resources::animationstore::AnimationStore).
//!
//! # Time units
//!
//! Frame durations are in **milliseconds**. Systems feed the controller a
//! delta in **seconds** (see [`WorldTime`](crate::resources::worldtime::WorldTime)).

pub mod clip;
pub mod frame;

pub use clip::{AnimationDirection, Clip};
pub use frame::Frame;

/// Conversion factor between the seconds fed to `update` and frame durations.
pub const MILLIS_PER_SECOND: f32 = 1000.0;
