//! Error types for animation playback and asset loading.

use thiserror::Error;

/// Failures surfaced by [`Clip`](crate::animation::Clip) frame access and the
/// [`AnimationController`](crate::components::animation::AnimationController).
///
/// These are programmer errors (bad index, nothing selected); callers are not
/// expected to retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnimationError {
    #[error("frame index out of range: {index} not in [0, {len})")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("no current animation: registry is empty or nothing is selected")]
    NoCurrentAnimation,

    #[error("animation '{0}' is not registered")]
    UnknownAnimation(String),
}

/// Failures while loading clip sheets from disk or JSON.
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid clip: {0}")]
    InvalidClip(String),
}

pub type AnimationResult<T> = Result<T, AnimationError>;
