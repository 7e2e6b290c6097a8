//! Named frame sequences.
//!
//! A [`Clip`] owns its frames in playback order together with the
//! [`AnimationDirection`] that tells the controller how to step through them.
//! Clips are built either frame by frame with [`Clip::add_frame`] or sliced
//! out of a sprite sheet grid with [`Clip::from_grid`].

use serde::{Deserialize, Serialize};

use crate::animation::frame::Frame;
use crate::error::{AnimationError, AnimationResult};
use crate::geometry::Rect;

/// Largest number of cells [`Clip::grid_frames`] will slice.
pub const MAX_GRID_FRAMES: u32 = 1 << 16;

/// How the controller steps through a clip's frames.
///
/// - `Forward` – `i + 1`, wrapping back to 0 after the last frame
/// - `Reverse` – `i - 1`, wrapping to the last frame below 0
/// - `Loop` – same stepping as `Forward`
/// - `PingPong` – bounce between the first and last frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationDirection {
    #[default]
    Forward,
    Reverse,
    Loop,
    PingPong,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clip {
    pub name: String,
    #[serde(default)]
    pub frames: Vec<Frame>,
    #[serde(default)]
    pub direction: AnimationDirection,
}

impl Clip {
    pub fn new(name: impl Into<String>, direction: AnimationDirection) -> Self {
        Self {
            name: name.into(),
            frames: Vec::new(),
            direction,
        }
    }

    pub fn with_frames(
        name: impl Into<String>,
        frames: Vec<Frame>,
        direction: AnimationDirection,
    ) -> Self {
        Self {
            name: name.into(),
            frames,
            direction,
        }
    }

    /// Slice `rows` x `columns` frames out of a sprite sheet.
    ///
    /// Every frame has the size of `start`; frame (row, col) sits at
    /// `(start.x + col * start.w, start.y + row * start.h)`. Frames are
    /// emitted row-major: all of row 0 left to right, then row 1, ...
    ///
    /// A grid that [`Clip::grid_frames`] rejects yields an empty clip.
    pub fn from_grid(
        name: impl Into<String>,
        start: Rect,
        rows: u32,
        columns: u32,
        direction: AnimationDirection,
        duration: f32,
    ) -> Self {
        let name = name.into();
        let frames = Self::grid_frames(start, rows, columns, duration).unwrap_or_else(|| {
            log::warn!(
                "Clip '{}': {}x{} grid from {:?} does not fit, no frames sliced",
                name,
                rows,
                columns,
                start
            );
            Vec::new()
        });
        Self::with_frames(name, frames, direction)
    }

    /// Frames of a `rows` x `columns` grid in row-major order.
    ///
    /// `None` when the grid has more than [`MAX_GRID_FRAMES`] cells or a
    /// corner falls outside the `i32` pixel range.
    pub fn grid_frames(start: Rect, rows: u32, columns: u32, duration: f32) -> Option<Vec<Frame>> {
        let count = rows.checked_mul(columns)?;
        if count > MAX_GRID_FRAMES {
            return None;
        }
        let mut frames = Vec::with_capacity(count as usize);
        for row in 0..rows {
            let y = i32::try_from(row).ok()?.checked_mul(start.h)?.checked_add(start.y)?;
            for col in 0..columns {
                let x = i32::try_from(col).ok()?.checked_mul(start.w)?.checked_add(start.x)?;
                frames.push(Frame::new(start.at(x, y), duration));
            }
        }
        Some(frames)
    }

    /// Mark every frame as horizontally flipped (mirrored clips such as
    /// `walk_left` built from `walk_right` cells).
    pub fn with_flipped(mut self, is_flipped: bool) -> Self {
        for frame in &mut self.frames {
            frame.is_flipped = is_flipped;
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn direction(&self) -> AnimationDirection {
        self.direction
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Sum of all frame durations in milliseconds.
    pub fn total_duration(&self) -> f32 {
        self.frames.iter().map(|f| f.duration).sum()
    }

    pub fn add_frame(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Remove and return the frame at `index`.
    pub fn remove_frame(&mut self, index: usize) -> AnimationResult<Frame> {
        self.check_index(index as i64)?;
        Ok(self.frames.remove(index))
    }

    pub fn clear_frames(&mut self) {
        self.frames.clear();
    }

    pub fn get_frame(&self, index: usize) -> AnimationResult<&Frame> {
        self.get_frame_signed(i64::try_from(index).unwrap_or(i64::MAX))
    }

    /// Signed variant of [`Clip::get_frame`] for callers working with
    /// relative offsets; negative indices are out of range.
    pub fn get_frame_signed(&self, index: i64) -> AnimationResult<&Frame> {
        self.check_index(index)?;
        Ok(&self.frames[index as usize])
    }

    fn check_index(&self, index: i64) -> AnimationResult<()> {
        if index < 0 || index as u64 >= self.frames.len() as u64 {
            log::debug!(
                "Clip '{}': index {} not in [0, {})",
                self.name,
                index,
                self.frames.len()
            );
            return Err(AnimationError::IndexOutOfRange {
                index,
                len: self.frames.len(),
            });
        }
        Ok(())
    }
}
