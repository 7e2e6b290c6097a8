//! Scripted keyboard and mouse feed.
//!
//! The headless binary and the integration tests have no devices; an
//! [`InputScript`] holds key and button presses, cursor moves and wheel
//! scrolls stamped with the frame
//! (see [`WorldTime::frame_count`](crate::resources::worldtime::WorldTime))
//! on which they happen. [`update_input_state`](crate::systems::input::update_input_state)
//! replays the due entries into [`InputState`](crate::resources::input::InputState).

use std::collections::VecDeque;

use bevy_ecs::prelude::Resource;

use crate::events::input::{InputAction, MouseButton};
use crate::geometry::Vec2;

/// One device change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScriptedEvent {
    Key { action: InputAction, pressed: bool },
    Button { button: MouseButton, pressed: bool },
    /// Move the cursor to an absolute screen position.
    CursorTo(Vec2),
    /// Scroll the wheel by a relative amount.
    Wheel(Vec2),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptedInput {
    pub frame: u64,
    pub event: ScriptedEvent,
}

impl ScriptedInput {
    pub fn key(frame: u64, action: InputAction, pressed: bool) -> Self {
        Self {
            frame,
            event: ScriptedEvent::Key { action, pressed },
        }
    }

    pub fn button(frame: u64, button: MouseButton, pressed: bool) -> Self {
        Self {
            frame,
            event: ScriptedEvent::Button { button, pressed },
        }
    }
}

#[derive(Resource, Debug, Clone, Default)]
pub struct InputScript {
    events: VecDeque<ScriptedInput>,
}

impl InputScript {
    pub fn new(mut events: Vec<ScriptedInput>) -> Self {
        events.sort_by_key(|e| e.frame);
        Self {
            events: events.into(),
        }
    }

    /// Press `action` on frame `from` and release it on frame `to`.
    pub fn hold(mut self, action: InputAction, from: u64, to: u64) -> Self {
        self.push(ScriptedInput::key(from, action, true));
        self.push(ScriptedInput::key(to, action, false));
        self
    }

    /// Press and release `action` on consecutive frames.
    pub fn tap(self, action: InputAction, frame: u64) -> Self {
        self.hold(action, frame, frame + 1)
    }

    /// Press `button` on frame `from` and release it on frame `to`.
    pub fn hold_button(mut self, button: MouseButton, from: u64, to: u64) -> Self {
        self.push(ScriptedInput::button(from, button, true));
        self.push(ScriptedInput::button(to, button, false));
        self
    }

    /// Press and release `button` on consecutive frames.
    pub fn click(self, button: MouseButton, frame: u64) -> Self {
        self.hold_button(button, frame, frame + 1)
    }

    pub fn move_cursor(mut self, frame: u64, position: Vec2) -> Self {
        self.push(ScriptedInput {
            frame,
            event: ScriptedEvent::CursorTo(position),
        });
        self
    }

    pub fn scroll(mut self, frame: u64, amount: Vec2) -> Self {
        self.push(ScriptedInput {
            frame,
            event: ScriptedEvent::Wheel(amount),
        });
        self
    }

    fn push(&mut self, event: ScriptedInput) {
        let at = self.events.partition_point(|e| e.frame <= event.frame);
        self.events.insert(at, event);
    }

    /// Pop every entry stamped at or before `frame`, in order.
    pub fn drain_due(&mut self, frame: u64) -> Vec<ScriptedInput> {
        let mut due = Vec::new();
        while self.events.front().is_some_and(|e| e.frame <= frame) {
            if let Some(event) = self.events.pop_front() {
                due.push(event);
            }
        }
        due
    }

    pub fn is_finished(&self) -> bool {
        self.events.is_empty()
    }

    /// Frame of the last scripted entry.
    pub fn last_frame(&self) -> Option<u64> {
        self.events.back().map(|e| e.frame)
    }
}
