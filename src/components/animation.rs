//! Per-entity animation playback.
//!
//! [`AnimationController`] owns a registry of named [`Clip`]s, remembers which
//! one is current and advances through its frames as time is fed in. Each
//! visual entity carries exactly one controller; the
//! [`animation`](crate::systems::animation::animation) system drives it once
//! per tick and copies the active frame into the entity's
//! [`Sprite`](crate::components::sprite::Sprite).
//!
//! Clips are held behind `Arc` so a definition from the
//! [`AnimationStore`](crate::resources::animationstore::AnimationStore) can be
//! shared by many entities. Everything that changes during playback
//! (frame index, timer, ping-pong phase) is stored here, never in the clip.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

use crate::animation::{AnimationDirection, Clip, Frame, MILLIS_PER_SECOND};
use crate::error::{AnimationError, AnimationResult};

/// Current leg of a ping-pong playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BounceDirection {
    #[default]
    Forward,
    Reverse,
}

/// Serializable view of a controller's playback state, used for debug text
/// and logging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackSnapshot {
    pub current_animation_name: String,
    pub animation_count: usize,
    pub speed: f32,
    pub current_frame_index: usize,
    pub timer: f32,
    pub is_playing: bool,
}

#[derive(Component, Debug, Clone)]
pub struct AnimationController {
    clips: BTreeMap<String, Arc<Clip>>,
    current_clip_name: String,
    current_frame_index: usize,
    /// Milliseconds accumulated since the last frame advance.
    timer: f32,
    speed: f32,
    is_playing: bool,
    bounce: BounceDirection,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationController {
    /// Empty controller: nothing selected, speed 1.0, playing.
    pub fn new() -> Self {
        Self {
            clips: BTreeMap::new(),
            current_clip_name: String::new(),
            current_frame_index: 0,
            timer: 0.0,
            speed: 1.0,
            is_playing: true,
            bounce: BounceDirection::Forward,
        }
    }

    /// Build a controller from a set of named clips.
    ///
    /// When the set is non-empty the first name in key order becomes the
    /// current selection.
    pub fn with_clips<I, C>(clips: I, is_playing: bool) -> Self
    where
        I: IntoIterator<Item = (String, C)>,
        C: Into<Arc<Clip>>,
    {
        let mut controller = Self::new();
        for (name, clip) in clips {
            controller.add_clip(name, clip);
        }
        controller.current_clip_name = controller.clips.keys().next().cloned().unwrap_or_default();
        controller.is_playing = is_playing;
        controller
    }

    // ----- registry -----

    /// Insert or overwrite a clip. The current selection is left alone.
    ///
    /// The registry key is what `play` looks up. A key that differs from the
    /// clip's own name is still registered, with a warning.
    pub fn add_clip(&mut self, name: impl Into<String>, clip: impl Into<Arc<Clip>>) {
        let name = name.into();
        let clip = clip.into();
        if name != clip.name {
            log::warn!("clip '{}' registered under key '{}'", clip.name, name);
        }
        self.clips.insert(name, clip);
    }

    /// Remove a clip. Removing the current clip leaves its name selected;
    /// `update` then does nothing and `get_current_frame` fails until another
    /// clip is selected.
    pub fn remove_clip(&mut self, name: &str) -> Option<Arc<Clip>> {
        self.clips.remove(name)
    }

    pub fn clear_clips(&mut self) {
        self.clips.clear();
    }

    pub fn has_animations(&self) -> bool {
        !self.clips.is_empty()
    }

    pub fn has_clip(&self, name: &str) -> bool {
        self.clips.contains_key(name)
    }

    pub fn clip_names(&self) -> impl Iterator<Item = &str> {
        self.clips.keys().map(String::as_str)
    }

    /// Mutable access to a registered clip.
    ///
    /// A clip shared with other controllers is cloned first, so edits only
    /// affect this controller.
    pub fn clip_mut(&mut self, name: &str) -> Option<&mut Clip> {
        self.clips.get_mut(name).map(Arc::make_mut)
    }

    // ----- selection -----

    /// Select `name` unconditionally and restart it from frame 0.
    ///
    /// The name is not checked against the registry.
    pub fn set_animation(&mut self, name: impl Into<String>) {
        self.current_clip_name = name.into();
        self.current_frame_index = 0;
        self.timer = 0.0;
        self.bounce = BounceDirection::Forward;
    }

    /// Guarded selection.
    ///
    /// - empty registry: nothing happens
    /// - empty `name`: resume the current clip without restarting it
    /// - `name` already current: keep index and timer, resume
    /// - unknown `name`: nothing happens
    /// - otherwise: restart on `name` and resume
    pub fn play(&mut self, name: &str) {
        if self.clips.is_empty() {
            return;
        }
        if name.is_empty() || self.current_clip_name == name {
            self.is_playing = true;
            return;
        }
        if !self.clips.contains_key(name) {
            log::trace!("play('{}') ignored: not registered", name);
            return;
        }
        self.set_animation(name);
        self.is_playing = true;
    }

    /// Stop advancing frames until the next `play`.
    pub fn pause(&mut self) {
        self.is_playing = false;
    }

    pub fn set_animation_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    // ----- queries -----

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn current_animation_name(&self) -> &str {
        &self.current_clip_name
    }

    pub fn current_frame_index(&self) -> usize {
        self.current_frame_index
    }

    pub fn timer(&self) -> f32 {
        self.timer
    }

    pub fn bounce(&self) -> BounceDirection {
        self.bounce
    }

    pub fn get_current_animation(&self) -> Option<&Clip> {
        self.clips.get(&self.current_clip_name).map(Arc::as_ref)
    }

    /// The frame to draw this tick.
    ///
    /// Fails with [`AnimationError::NoCurrentAnimation`] when the registry is
    /// empty or nothing is selected, [`AnimationError::UnknownAnimation`] when
    /// the selected name is not registered, and with the clip's
    /// [`AnimationError::IndexOutOfRange`] when the index is stale.
    pub fn get_current_frame(&self) -> AnimationResult<&Frame> {
        if self.clips.is_empty() || self.current_clip_name.is_empty() {
            return Err(AnimationError::NoCurrentAnimation);
        }
        let clip = self
            .clips
            .get(&self.current_clip_name)
            .ok_or_else(|| AnimationError::UnknownAnimation(self.current_clip_name.clone()))?;
        clip.get_frame(self.current_frame_index)
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            current_animation_name: self.current_clip_name.clone(),
            animation_count: self.clips.len(),
            speed: self.speed,
            current_frame_index: self.current_frame_index,
            timer: self.timer,
            is_playing: self.is_playing,
        }
    }

    // ----- playback -----

    /// Feed `delta_seconds` of elapsed time.
    ///
    /// The timer grows by `delta_seconds * 1000 * speed` milliseconds. Once it
    /// reaches the current frame's duration it resets to zero and the index
    /// moves by one step of the clip's direction. At most one step happens
    /// per call, however large the delta.
    ///
    /// Does nothing while paused, with nothing (or an unregistered name)
    /// selected, or when the current index no longer fits the clip.
    pub fn update(&mut self, delta_seconds: f32) {
        if !self.is_playing || self.current_clip_name.is_empty() {
            return;
        }
        let (duration, len, direction) = match self.clips.get(&self.current_clip_name) {
            Some(clip) => match clip.get_frame(self.current_frame_index) {
                Ok(frame) => (frame.duration, clip.len(), clip.direction()),
                Err(_) => return,
            },
            None => return,
        };

        self.timer += delta_seconds * MILLIS_PER_SECOND * self.speed;

        if self.timer >= duration {
            self.timer = 0.0;
            self.advance(direction, len);
        }
    }

    fn advance(&mut self, direction: AnimationDirection, len: usize) {
        let index = self.current_frame_index;
        self.current_frame_index = match direction {
            AnimationDirection::Forward | AnimationDirection::Loop => (index + 1) % len,
            AnimationDirection::Reverse => {
                if index == 0 {
                    len - 1
                } else {
                    index - 1
                }
            }
            AnimationDirection::PingPong => {
                if len == 1 {
                    // nowhere to bounce
                    0
                } else if index == 0 {
                    self.bounce = BounceDirection::Forward;
                    1
                } else if index == len - 1 {
                    self.bounce = BounceDirection::Reverse;
                    index - 1
                } else {
                    match self.bounce {
                        BounceDirection::Forward => index + 1,
                        BounceDirection::Reverse => index - 1,
                    }
                }
            }
        };
    }
}

impl fmt::Display for AnimationController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(&self.snapshot()) {
            Ok(json) => write!(f, "{json}"),
            Err(_) => Err(fmt::Error),
        }
    }
}
