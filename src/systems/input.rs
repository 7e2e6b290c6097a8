//! Input systems.
//!
//! - [`update_input_state`] ages the key and button states of
//!   [`InputState`](crate::resources::input::InputState) and applies the
//!   scripted device changes due this frame.
//! - Input events are emitted for key and mouse button presses/releases, and
//!   the bike and debug keys fire [`ToggleBikeEvent`] and [`SwitchDebugEvent`].
use bevy_ecs::prelude::*;
use log::trace;

use crate::events::input::{InputAction, InputEvent, MouseButtonEvent};
use crate::events::switchdebug::SwitchDebugEvent;
use crate::events::togglebike::ToggleBikeEvent;
use crate::resources::input::InputState;
use crate::resources::inputscript::{InputScript, ScriptedEvent};
use crate::resources::worldtime::WorldTime;

/// Advance the `InputState` resource by one frame.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    script: Option<ResMut<InputScript>>,
    time: Res<WorldTime>,
    mut commands: Commands,
) {
    input.advance();

    let Some(mut script) = script else {
        return;
    };
    for entry in script.drain_due(time.frame_count) {
        trace!("frame {}: {:?}", time.frame_count, entry.event);
        match entry.event {
            ScriptedEvent::Key { action, pressed } => {
                if pressed {
                    input.press(action);
                    if !input.is_pressed(action) {
                        // already held
                        continue;
                    }
                } else {
                    input.release(action);
                }

                commands.trigger(InputEvent { action, pressed });

                if pressed {
                    match action {
                        InputAction::ToggleDebug => commands.trigger(SwitchDebugEvent {}),
                        InputAction::ToggleBike => commands.trigger(ToggleBikeEvent {}),
                        _ => {}
                    }
                }
            }
            ScriptedEvent::Button { button, pressed } => {
                if pressed {
                    input.press_button(button);
                    if !input.is_button_pressed(button) {
                        continue;
                    }
                } else {
                    input.release_button(button);
                }
                commands.trigger(MouseButtonEvent { button, pressed });
            }
            ScriptedEvent::CursorTo(position) => input.set_cursor(position),
            ScriptedEvent::Wheel(amount) => input.scroll(amount),
        }
    }
}
