//! Scene setup for the top-down walking demo.
//!
//! - [`default_clip_library`] slices the built-in `characters` sheet into
//!   idle/walk/run/bike clips for every facing
//! - [`load_clip_library`] picks between that library and a JSON clip sheet
//! - [`build_world`] / [`build_schedule`] assemble the ECS world and the
//!   per-frame system order
//! - [`setup`] spawns the player, the wandering NPCs and a waving flag prop
//!
//! # Sheet layout
//!
//! The character sheet is a grid of 32x32 cells. Rows 0-2 hold the on-foot
//! poses facing down, up and right; rows 3-5 the same directions on the bike.
//! Left-facing clips reuse the right-facing row mirrored. Row 6 is the flag.
//!
//! | columns | on foot rows     | bike rows              |
//! |---------|------------------|------------------------|
//! | 0       | idle             | bike_idle              |
//! | 1-4     | walk cycle       | pedal cycle (1-3 only) |
//! | 5-8     | run cycle        |                        |

use bevy_ecs::prelude::*;
use log::{info, warn};

use crate::animation::{AnimationDirection, Clip, Frame};
use crate::components::animation::AnimationController;
use crate::components::entitykind::EntityKind;
use crate::components::facing::Facing;
use crate::components::inputcontrolled::InputControlled;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::components::wander::Wander;
use crate::error::AssetError;
use crate::events::input::{InputAction, MouseButton};
use crate::events::switchdebug::switch_debug_observer;
use crate::events::togglebike::toggle_bike_observer;
use crate::geometry::{Rect, Vec2};
use crate::resources::animationstore::AnimationStore;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::inputscript::InputScript;
use crate::resources::renderqueue::RenderQueue;
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::{animation, animation_selector};
use crate::systems::input::update_input_state;
use crate::systems::inputsimplecontroller::input_simple_controller;
use crate::systems::movement::movement;
use crate::systems::render::render_system;
use crate::systems::wander::npc_wander;

/// Edge of one sheet cell in pixels.
pub const CELL: i32 = 32;

const FLAG_CLIP: &str = "flag_wave";
const CHARACTER_PREFIXES: [&str; 5] = ["idle", "walk", "run", "bike", "bike_idle"];
const NPC_PREFIXES: [&str; 2] = ["idle", "walk"];

fn cell(column: i32, row: i32) -> Rect {
    Rect::new(column * CELL, row * CELL, CELL, CELL)
}

/// Sheet row holding `facing` poses, plus whether the row must be mirrored.
fn facing_row(facing: Facing) -> (i32, bool) {
    match facing {
        Facing::Down => (0, false),
        Facing::Up => (1, false),
        Facing::Right => (2, false),
        Facing::Left => (2, true),
    }
}

/// Clip names `{prefix}_{facing}` for every prefix and facing.
pub fn clip_names(prefixes: &[&str]) -> Vec<String> {
    prefixes
        .iter()
        .flat_map(|prefix| {
            Facing::ALL
                .iter()
                .map(move |facing| format!("{}_{}", prefix, facing.suffix()))
        })
        .collect()
}

/// Build the clip library for the built-in character sheet.
///
/// Walk and bike frames last `frame_ms`; run frames half as long.
pub fn default_clip_library(config: &GameConfig) -> AnimationStore {
    let mut store = AnimationStore::new();
    let frame_ms = config.frame_ms;

    for facing in Facing::ALL {
        let (row, mirrored) = facing_row(facing);
        let bike_row = row + 3;
        let suffix = facing.suffix();

        let mut idle = Clip::new(format!("idle_{}", suffix), AnimationDirection::Forward);
        idle.add_frame(Frame::new(cell(0, row), frame_ms));

        let walk = Clip::from_grid(
            format!("walk_{}", suffix),
            cell(1, row),
            1,
            4,
            AnimationDirection::Loop,
            frame_ms,
        );
        let run = Clip::from_grid(
            format!("run_{}", suffix),
            cell(5, row),
            1,
            4,
            AnimationDirection::Loop,
            frame_ms * 0.5,
        );

        let mut bike_idle = Clip::new(format!("bike_idle_{}", suffix), AnimationDirection::Forward);
        bike_idle.add_frame(Frame::new(cell(0, bike_row), frame_ms));

        let bike = Clip::from_grid(
            format!("bike_{}", suffix),
            cell(1, bike_row),
            1,
            3,
            AnimationDirection::PingPong,
            frame_ms,
        );

        for clip in [idle, walk, run, bike_idle, bike] {
            store.insert(clip.with_flipped(mirrored));
        }
    }

    store.insert(Clip::from_grid(
        FLAG_CLIP,
        cell(0, 6),
        1,
        4,
        AnimationDirection::Reverse,
        frame_ms * 2.0,
    ));

    store
}

/// The clip sheet named in the config, or the built-in library.
pub fn load_clip_library(config: &GameConfig) -> Result<AnimationStore, AssetError> {
    match &config.clips_path {
        Some(path) => {
            let mut store = AnimationStore::new();
            store.load_from_file(path)?;
            Ok(store)
        }
        None => {
            let store = default_clip_library(config);
            info!("Using built-in clip library ({} clips)", store.len());
            Ok(store)
        }
    }
}

/// A short walk around: right, run up, bike left, debug overlay, quit.
pub fn demo_script() -> InputScript {
    InputScript::default()
        .hold(InputAction::Right, 10, 70)
        .hold(InputAction::Up, 80, 140)
        .hold(InputAction::Run, 80, 140)
        .tap(InputAction::ToggleBike, 150)
        .hold(InputAction::Left, 155, 215)
        .tap(InputAction::ToggleDebug, 220)
        .move_cursor(222, Vec2::new(200.0, 150.0))
        .click(MouseButton::Left, 224)
        .scroll(226, Vec2::new(0.0, -1.0))
        .tap(InputAction::ToggleBike, 230)
        .tap(InputAction::Quit, 240)
}

/// World with every resource the schedule reads and the observers
/// registered.
pub fn build_world(config: GameConfig, store: AnimationStore) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(InputState::default());
    world.insert_resource(RenderQueue::default());
    world.insert_resource(store);
    world.insert_resource(config);

    world.spawn(Observer::new(switch_debug_observer));
    world.spawn(Observer::new(toggle_bike_observer));
    // Ensure the observers are registered before any system triggers events.
    world.flush();
    world
}

/// Per-frame system order.
pub fn build_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(update_input_state);
    update.add_systems(input_simple_controller.after(update_input_state));
    update.add_systems(npc_wander);
    update.add_systems(
        movement
            .after(input_simple_controller)
            .after(npc_wander),
    );
    update.add_systems(animation_selector.after(movement));
    update.add_systems(animation.after(animation_selector));
    update.add_systems(render_system.after(animation));
    update
}

fn controller_for(store: &AnimationStore, names: &[String], speed: f32, start: &str) -> AnimationController {
    let mut controller = store.controller_for(names.iter().map(String::as_str));
    controller.set_animation_speed(speed);
    controller.play(start);
    controller
}

/// Spawn the player in the middle of the window, `npc_count` wandering NPCs
/// at random tiles and a flag prop.
pub fn setup(mut commands: Commands, store: Res<AnimationStore>, config: Res<GameConfig>) {
    let texture = config.sheet_texture.as_str();
    let tile = config.tile_size.max(1) as f32;
    let (width, height) = config.window_size();

    let player_clips = clip_names(&CHARACTER_PREFIXES);
    commands.spawn((
        EntityKind::character(),
        Facing::Down,
        Sprite::new(texture, cell(0, 0)),
        MapPosition::new(
            (width as f32 - CELL as f32) * 0.5,
            (height as f32 - CELL as f32) * 0.5,
        ),
        RigidBody::new(),
        InputControlled::new(config.walk_speed, config.run_speed, config.bike_speed),
        controller_for(&store, &player_clips, config.animation_speed, "idle_down"),
    ));

    let mut rng = fastrand::Rng::with_seed(config.seed);
    let columns = (width as f32 / tile).max(1.0) as u32;
    let rows = (height as f32 / tile).max(1.0) as u32;
    let npc_clips = clip_names(&NPC_PREFIXES);
    for _ in 0..config.npc_count {
        let facing = Facing::ALL[rng.usize(..Facing::ALL.len())];
        let position = MapPosition::new(
            rng.u32(..columns) as f32 * tile,
            rng.u32(..rows) as f32 * tile,
        );
        let start = format!("idle_{}", facing.suffix());
        commands.spawn((
            EntityKind::Npc,
            facing,
            Sprite::new(texture, cell(0, 0)),
            position,
            RigidBody::new(),
            Wander::new(1.0 + rng.f32() * 2.0, config.walk_speed * 0.5),
            controller_for(&store, &npc_clips, config.animation_speed, &start),
        ));
    }

    if store.contains(FLAG_CLIP) {
        commands.spawn((
            EntityKind::Prop,
            Sprite::new(texture, cell(0, 6)),
            MapPosition::new(tile, tile),
            controller_for(&store, &[FLAG_CLIP.to_string()], config.animation_speed, FLAG_CLIP),
        ));
    } else {
        warn!("No '{}' clip; flag prop not spawned", FLAG_CLIP);
    }

    info!("Spawned player and {} NPCs", config.npc_count);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_names_cover_every_facing() {
        let names = clip_names(&["walk"]);
        assert_eq!(names, vec!["walk_up", "walk_down", "walk_left", "walk_right"]);
    }

    #[test]
    fn test_default_library_has_every_character_clip() {
        let store = default_clip_library(&GameConfig::new());
        for name in clip_names(&CHARACTER_PREFIXES) {
            assert!(store.contains(&name), "missing {}", name);
        }
        assert!(store.contains(FLAG_CLIP));
        assert_eq!(store.len(), 21);
    }

    #[test]
    fn test_left_clips_mirror_right_row() {
        let store = default_clip_library(&GameConfig::new());
        let right = store.get("walk_right").unwrap();
        let left = store.get("walk_left").unwrap();
        assert_eq!(right.len(), left.len());
        for (r, l) in right.frames().iter().zip(left.frames()) {
            assert_eq!(r.rect, l.rect);
            assert!(!r.is_flipped);
            assert!(l.is_flipped);
        }
    }

    #[test]
    fn test_run_frames_are_faster_than_walk() {
        let mut config = GameConfig::new();
        config.frame_ms = 100.0;
        let store = default_clip_library(&config);
        assert_eq!(store.get("walk_down").unwrap().get_frame(0).unwrap().duration, 100.0);
        assert_eq!(store.get("run_down").unwrap().get_frame(0).unwrap().duration, 50.0);
        assert_eq!(store.get("run_down").unwrap().get_frame(0).unwrap().rect, cell(5, 0));
    }

    #[test]
    fn test_bike_clips_ping_pong_on_bike_rows() {
        let store = default_clip_library(&GameConfig::new());
        let bike = store.get("bike_up").unwrap();
        assert_eq!(bike.direction(), AnimationDirection::PingPong);
        assert_eq!(bike.len(), 3);
        assert!(bike.frames().iter().all(|f| f.rect.y == 4 * CELL));
    }

    #[test]
    fn test_load_clip_library_falls_back_to_builtin() {
        let store = load_clip_library(&GameConfig::new()).unwrap();
        assert!(store.contains("idle_down"));

        let mut config = GameConfig::new();
        config.clips_path = Some("./no/such/clips.json".into());
        assert!(load_clip_library(&config).is_err());
    }

    #[test]
    fn test_demo_script_ends_with_quit() {
        let script = demo_script();
        assert_eq!(script.last_frame(), Some(241));
    }
}
