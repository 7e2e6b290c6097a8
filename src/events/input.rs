//! Input action events.
//!
//! This module defines [`InputEvent`] which is triggered when gameplay-relevant
//! input actions occur (press or release). The [`InputAction`] enum lists all
//! recognized actions. [`MouseButtonEvent`] does the same for [`MouseButton`]s.
//!
//! Observers can subscribe to these events to react to input without directly
//! reading the [`InputState`](crate::resources::input::InputState) resource.

use bevy_ecs::prelude::*;

/// Enumeration of logical input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    Up,
    Down,
    Left,
    Right,
    /// Held to run instead of walk.
    Run,
    /// Get on or off the bike.
    ToggleBike,
    /// Show or hide the debug overlay.
    ToggleDebug,
    Quit,
}

impl InputAction {
    pub const ALL: [InputAction; 8] = [
        InputAction::Up,
        InputAction::Down,
        InputAction::Left,
        InputAction::Right,
        InputAction::Run,
        InputAction::ToggleBike,
        InputAction::ToggleDebug,
        InputAction::Quit,
    ];
}

/// Event emitted when an input action is pressed or released.
#[derive(Event, Debug, Clone, Copy)]
pub struct InputEvent {
    /// The input action that triggered this event.
    pub action: InputAction,
    /// Whether the action was pressed (true) or released (false).
    pub pressed: bool,
}

/// Mouse buttons the engine tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

impl MouseButton {
    pub const ALL: [MouseButton; 3] = [MouseButton::Left, MouseButton::Middle, MouseButton::Right];
}

/// Event emitted when a mouse button is pressed or released.
#[derive(Event, Debug, Clone, Copy)]
pub struct MouseButtonEvent {
    pub button: MouseButton,
    pub pressed: bool,
}
