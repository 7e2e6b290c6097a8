//! Render system.
//!
//! Fills the [`RenderQueue`] with one sprite command per visible entity,
//! props and NPCs first with characters on top, then appends debug text
//! while [`DebugMode`] is present. The debug text ends with the cursor
//! position and the tile under it. The queue is handed to a
//! [`Renderer`](crate::renderer::Renderer) outside the schedule.
use bevy_ecs::prelude::*;

use crate::components::animation::AnimationController;
use crate::components::entitykind::EntityKind;
use crate::components::inputcontrolled::InputControlled;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::resources::debugmode::DebugMode;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::renderqueue::{DrawCommand, RenderQueue};
use crate::resources::worldtime::WorldTime;

const DEBUG_TEXT_SIZE: i32 = 10;
const DEBUG_LINE_HEIGHT: i32 = 20;

pub fn render_system(
    sprites: Query<(&Sprite, &MapPosition, Option<&EntityKind>)>,
    players: Query<(&MapPosition, &AnimationController, &EntityKind), With<InputControlled>>,
    mut queue: ResMut<RenderQueue>,
    time: Res<WorldTime>,
    config: Res<GameConfig>,
    input: Res<InputState>,
    debug_mode: Option<Res<DebugMode>>,
) {
    queue.clear();

    // Sort by layer, then by y so lower sprites overlap higher ones.
    let mut to_draw: Vec<(u8, f32, &Sprite, &MapPosition)> = sprites
        .iter()
        .map(|(sprite, position, kind)| {
            let layer = u8::from(kind.is_some_and(EntityKind::is_character));
            (layer, position.pos.y, sprite, position)
        })
        .collect();
    to_draw.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.total_cmp(&b.1)));

    for (_, _, sprite, position) in &to_draw {
        queue.push(DrawCommand::Sprite {
            tex_key: sprite.tex_key.clone(),
            src: sprite.frame,
            dest: position.dest_rect(sprite),
            flip_h: sprite.flip_h,
        });
    }

    if debug_mode.is_none() {
        return;
    }

    let mut lines = vec![
        format!("DEBUG MODE | frame: {}", time.frame_count),
        format!("Entities: {}", to_draw.len()),
    ];
    for (position, controller, kind) in players.iter() {
        let (tx, ty) = position.tile_coords(config.tile_size);
        lines.push(format!(
            "Player pos: ({:.1}, {:.1}) tile: ({}, {}) bike: {}",
            position.pos.x,
            position.pos.y,
            tx,
            ty,
            kind.on_bike()
        ));
        lines.push(format!(
            "Clip: {} frame: {}",
            controller.current_animation_name(),
            controller.current_frame_index()
        ));
    }
    let cursor = input.cursor();
    let (cx, cy) = input.cursor_tile(config.tile_size);
    lines.push(format!(
        "Cursor: ({:.0}, {:.0}) tile: ({}, {})",
        cursor.x, cursor.y, cx, cy
    ));
    for (i, text) in lines.into_iter().enumerate() {
        queue.push(DrawCommand::Text {
            text,
            x: 10,
            y: 10 + i as i32 * DEBUG_LINE_HEIGHT,
            size: DEBUG_TEXT_SIZE,
        });
    }
}
