//! Debug toggle resource.
//!
//! The mere presence of this resource makes the render system append debug
//! text (tick, entity count, player position and playback state) to the
//! render queue. Remove it to hide the overlay.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the debug text overlay is drawn.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct DebugMode {}
