//! Draw commands produced by the render system.
//!
//! Systems never talk to a backend directly; they push [`DrawCommand`]s in
//! painter's order and the frame loop hands the queue to a
//! [`Renderer`](crate::renderer::Renderer) with
//! [`present_queue`](crate::renderer::present_queue).

use bevy_ecs::prelude::Resource;

use crate::geometry::Rect;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Sprite {
        tex_key: String,
        src: Rect,
        dest: Rect,
        flip_h: bool,
    },
    Text {
        text: String,
        x: i32,
        y: i32,
        size: i32,
    },
}

#[derive(Resource, Debug, Clone, Default)]
pub struct RenderQueue {
    pub commands: Vec<DrawCommand>,
}

impl RenderQueue {
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn sprites(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Sprite { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Take every queued command, leaving the queue empty.
    pub fn drain(&mut self) -> std::vec::Drain<'_, DrawCommand> {
        self.commands.drain(..)
    }
}
