use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// A single still image within a [`Clip`](super::Clip).
///
/// `rect` is the crop region inside the sprite sheet and `duration` is how
/// many milliseconds the frame stays on screen before the controller
/// advances. A zero or negative duration advances on every update.
///
/// `loop_count` and `current_loop_count` are carried along with the sheet data
/// but playback does not read them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub rect: Rect,
    pub duration: f32,
    #[serde(default)]
    pub is_flipped: bool,
    #[serde(default)]
    pub loop_count: i32,
    #[serde(default)]
    pub current_loop_count: i32,
}

impl Frame {
    pub fn new(rect: Rect, duration: f32) -> Self {
        Self {
            rect,
            duration,
            is_flipped: false,
            loop_count: 0,
            current_loop_count: 0,
        }
    }

    pub fn with_flipped(mut self, is_flipped: bool) -> Self {
        self.is_flipped = is_flipped;
        self
    }
}
