//! Per-frame keyboard and mouse state resource.
//!
//! [`InputState`] tracks one [`KeyState`] per logical
//! [`InputAction`] and per [`MouseButton`], plus the cursor position and the
//! accumulated wheel offset. Whatever polls the devices (the scripted feed in
//! [`crate::systems::input`], or a windowing backend) calls [`InputState::press`],
//! [`InputState::press_button`], [`InputState::set_cursor`] and friends; once
//! per frame [`InputState::advance`] ages the edge states so `Pressed` and
//! `Released` last exactly one frame, and snapshots the cursor and wheel so
//! the deltas measure movement since the previous frame.
use bevy_ecs::prelude::*;
use rustc_hash::FxHashMap;

use crate::events::input::{InputAction, MouseButton};
use crate::geometry::Vec2;

/// Lifecycle of a key across frames.
///
/// `NotPressed` → `Pressed` (first frame) → `Down` (held) → `Released`
/// (first frame up) → `NotPressed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyState {
    #[default]
    NotPressed,
    Pressed,
    Down,
    Released,
}

impl KeyState {
    /// Whether the key is held this frame (just pressed or still down).
    pub fn is_active(self) -> bool {
        matches!(self, KeyState::Pressed | KeyState::Down)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            KeyState::NotPressed => "NOT_PRESSED",
            KeyState::Pressed => "PRESSED",
            KeyState::Down => "DOWN",
            KeyState::Released => "RELEASED",
        }
    }

    fn aged(self) -> KeyState {
        match self {
            KeyState::Pressed => KeyState::Down,
            KeyState::Released => KeyState::NotPressed,
            other => other,
        }
    }
}

/// Resource capturing the per-frame keyboard and mouse state relevant to gameplay.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputState {
    keys: FxHashMap<InputAction, KeyState>,
    buttons: FxHashMap<MouseButton, KeyState>,
    cursor: Vec2,
    last_cursor: Vec2,
    wheel: Vec2,
    last_wheel: Vec2,
}

impl InputState {
    pub fn state(&self, action: InputAction) -> KeyState {
        self.keys.get(&action).copied().unwrap_or_default()
    }

    /// Record a key-down. A key that is already held stays `Down`.
    pub fn press(&mut self, action: InputAction) {
        let next = if self.state(action).is_active() {
            KeyState::Down
        } else {
            KeyState::Pressed
        };
        self.keys.insert(action, next);
    }

    pub fn release(&mut self, action: InputAction) {
        self.keys.insert(action, KeyState::Released);
    }

    /// Age edge states: `Pressed` becomes `Down`, `Released` becomes
    /// `NotPressed`. The cursor and wheel deltas restart from zero. Call once
    /// at the start of every frame.
    pub fn advance(&mut self) {
        for state in self.keys.values_mut().chain(self.buttons.values_mut()) {
            *state = state.aged();
        }
        self.last_cursor = self.cursor;
        self.last_wheel = self.wheel;
    }

    pub fn is_pressed(&self, action: InputAction) -> bool {
        self.state(action) == KeyState::Pressed
    }

    pub fn is_down(&self, action: InputAction) -> bool {
        self.state(action) == KeyState::Down
    }

    pub fn is_released(&self, action: InputAction) -> bool {
        self.state(action) == KeyState::Released
    }

    pub fn is_active(&self, action: InputAction) -> bool {
        self.state(action).is_active()
    }

    /// Actions that went down this frame.
    pub fn just_pressed(&self) -> impl Iterator<Item = InputAction> + '_ {
        self.keys
            .iter()
            .filter(|(_, s)| **s == KeyState::Pressed)
            .map(|(a, _)| *a)
    }

    // ----- mouse -----

    pub fn button_state(&self, button: MouseButton) -> KeyState {
        self.buttons.get(&button).copied().unwrap_or_default()
    }

    /// Record a button-down. A button that is already held stays `Down`.
    pub fn press_button(&mut self, button: MouseButton) {
        let next = if self.button_state(button).is_active() {
            KeyState::Down
        } else {
            KeyState::Pressed
        };
        self.buttons.insert(button, next);
    }

    pub fn release_button(&mut self, button: MouseButton) {
        self.buttons.insert(button, KeyState::Released);
    }

    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.button_state(button) == KeyState::Pressed
    }

    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.button_state(button) == KeyState::Down
    }

    pub fn is_button_released(&self, button: MouseButton) -> bool {
        self.button_state(button) == KeyState::Released
    }

    pub fn is_button_active(&self, button: MouseButton) -> bool {
        self.button_state(button).is_active()
    }

    /// Move the cursor to a screen position in pixels.
    pub fn set_cursor(&mut self, position: Vec2) {
        self.cursor = position;
    }

    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Cursor position at the start of this frame.
    pub fn last_cursor(&self) -> Vec2 {
        self.last_cursor
    }

    /// Cursor movement this frame (`cursor - last_cursor`).
    pub fn cursor_delta(&self) -> Vec2 {
        self.cursor - self.last_cursor
    }

    /// Tile under the cursor, for a square grid of `tile_size` pixels.
    pub fn cursor_tile(&self, tile_size: u32) -> (i32, i32) {
        let t = tile_size.max(1) as f32;
        ((self.cursor.x / t).floor() as i32, (self.cursor.y / t).floor() as i32)
    }

    /// Add a wheel movement. Vertical scrolling is `y`.
    pub fn scroll(&mut self, amount: Vec2) {
        self.wheel += amount;
    }

    /// Accumulated wheel offset since startup.
    pub fn wheel(&self) -> Vec2 {
        self.wheel
    }

    /// Wheel movement this frame (`wheel - last_wheel`).
    pub fn wheel_delta(&self) -> Vec2 {
        self.wheel - self.last_wheel
    }
}
