//! Engine tick integration tests: input, movement, clip selection, sprite
//! updates and the render queue running together in one schedule.

use bevy_ecs::prelude::*;

use pixelroam::animation::{AnimationDirection, Clip};
use pixelroam::components::animation::AnimationController;
use pixelroam::components::entitykind::EntityKind;
use pixelroam::components::facing::Facing;
use pixelroam::components::inputcontrolled::InputControlled;
use pixelroam::components::mapposition::MapPosition;
use pixelroam::components::sprite::Sprite;
use pixelroam::events::input::InputAction;
use pixelroam::game::{CELL, build_schedule, build_world, default_clip_library, setup};
use pixelroam::geometry::{Rect, Vec2};
use pixelroam::resources::debugmode::DebugMode;
use pixelroam::resources::gameconfig::GameConfig;
use pixelroam::resources::inputscript::InputScript;
use pixelroam::resources::renderqueue::{DrawCommand, RenderQueue};
use pixelroam::systems::time::update_world_time;

const EPSILON: f32 = 1e-6;
/// 1/16 s: two ticks make one 125 ms frame.
const DT: f32 = 0.0625;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn test_config(npc_count: u32) -> GameConfig {
    let mut config = GameConfig::new();
    config.npc_count = npc_count;
    config.frame_ms = 125.0;
    config
}

fn make_world(config: GameConfig) -> World {
    let store = default_clip_library(&config);
    let mut world = build_world(config, store);
    let setup_id = world.register_system(setup);
    world.run_system(setup_id).unwrap();
    world
}

fn tick(world: &mut World, schedule: &mut Schedule, times: usize) {
    for _ in 0..times {
        update_world_time(world, DT);
        schedule.run(world);
        world.clear_trackers();
    }
}

fn player(world: &mut World) -> Entity {
    let mut q = world.query_filtered::<Entity, With<InputControlled>>();
    q.single(world).unwrap()
}

fn cell(column: i32, row: i32) -> Rect {
    Rect::new(column * CELL, row * CELL, CELL, CELL)
}

fn clip_of(world: &World, entity: Entity) -> (String, usize) {
    let controller = world.get::<AnimationController>(entity).unwrap();
    (
        controller.current_animation_name().to_string(),
        controller.current_frame_index(),
    )
}

#[test]
fn test_player_starts_idle_down() {
    let mut world = make_world(test_config(0));
    let mut schedule = build_schedule();
    tick(&mut world, &mut schedule, 1);

    let p = player(&mut world);
    assert_eq!(clip_of(&world, p), ("idle_down".to_string(), 0));
    assert_eq!(world.get::<Sprite>(p).unwrap().frame, cell(0, 0));
    let pos = world.get::<MapPosition>(p).unwrap();
    assert!(approx_eq(pos.pos.x, 304.0));
    assert!(approx_eq(pos.pos.y, 164.0));
}

#[test]
fn test_holding_right_walks_right_and_sprite_follows_frames() {
    let mut world = make_world(test_config(0));
    world.insert_resource(InputScript::default().hold(InputAction::Right, 1, 1000));
    let mut schedule = build_schedule();
    let p = player(&mut world);

    tick(&mut world, &mut schedule, 1);
    assert_eq!(clip_of(&world, p), ("walk_right".to_string(), 0));
    assert_eq!(*world.get::<Facing>(p).unwrap(), Facing::Right);
    let sprite = world.get::<Sprite>(p).unwrap();
    assert_eq!(sprite.frame, cell(1, 2));
    assert!(!sprite.flip_h);
    assert!(approx_eq(world.get::<MapPosition>(p).unwrap().pos.x, 308.0));

    tick(&mut world, &mut schedule, 1);
    assert_eq!(clip_of(&world, p), ("walk_right".to_string(), 1));
    assert_eq!(world.get::<Sprite>(p).unwrap().frame, cell(2, 2));

    // Loop clip: 4 frames, back to the first after a full cycle.
    tick(&mut world, &mut schedule, 6);
    assert_eq!(clip_of(&world, p).1, 0);
    assert_eq!(world.get::<Sprite>(p).unwrap().frame, cell(1, 2));

    let pos = world.get::<MapPosition>(p).unwrap();
    assert!(approx_eq(pos.pos.x, 304.0 + 8.0 * 4.0));
    assert!(approx_eq(pos.pos.y, 164.0));
}

#[test]
fn test_release_returns_to_idle_facing_last_direction() {
    let mut world = make_world(test_config(0));
    world.insert_resource(InputScript::default().hold(InputAction::Up, 1, 3));
    let mut schedule = build_schedule();
    let p = player(&mut world);

    tick(&mut world, &mut schedule, 2);
    assert_eq!(clip_of(&world, p).0, "walk_up");

    tick(&mut world, &mut schedule, 1);
    assert_eq!(clip_of(&world, p), ("idle_up".to_string(), 0));
    assert_eq!(world.get::<Sprite>(p).unwrap().frame, cell(0, 1));
}

#[test]
fn test_run_key_selects_run_clip() {
    let mut world = make_world(test_config(0));
    world.insert_resource(
        InputScript::default()
            .hold(InputAction::Down, 1, 100)
            .hold(InputAction::Run, 1, 100),
    );
    let mut schedule = build_schedule();
    let p = player(&mut world);

    tick(&mut world, &mut schedule, 1);
    assert_eq!(clip_of(&world, p).0, "run_down");
    // Run frames last half as long: one 62.5 ms tick is enough to advance.
    assert_eq!(clip_of(&world, p).1, 1);
    assert_eq!(world.get::<Sprite>(p).unwrap().frame, cell(6, 0));
    assert!(approx_eq(
        world.get::<MapPosition>(p).unwrap().pos.y,
        164.0 + 128.0 * DT
    ));
}

#[test]
fn test_toggle_bike_switches_to_bike_clips() {
    let mut world = make_world(test_config(0));
    world.insert_resource(
        InputScript::default()
            .tap(InputAction::ToggleBike, 1)
            .hold(InputAction::Left, 1, 100)
            .tap(InputAction::ToggleBike, 5),
    );
    let mut schedule = build_schedule();
    let p = player(&mut world);

    tick(&mut world, &mut schedule, 2);
    assert!(world.get::<EntityKind>(p).unwrap().on_bike());
    assert_eq!(clip_of(&world, p).0, "bike_left");
    let sprite = world.get::<Sprite>(p).unwrap();
    assert!(sprite.flip_h);
    assert_eq!(sprite.frame.y, 5 * CELL);
    assert!(world.get::<MapPosition>(p).unwrap().pos.x < 304.0);

    tick(&mut world, &mut schedule, 3);
    assert!(!world.get::<EntityKind>(p).unwrap().on_bike());
    assert_eq!(clip_of(&world, p).0, "walk_left");
}

#[test]
fn test_debug_mode_adds_text_commands() {
    let mut world = make_world(test_config(2));
    world.insert_resource(
        InputScript::default()
            .tap(InputAction::ToggleDebug, 2)
            .tap(InputAction::ToggleDebug, 4),
    );
    let mut schedule = build_schedule();

    tick(&mut world, &mut schedule, 1);
    assert!(!world.contains_resource::<DebugMode>());
    assert_eq!(world.resource::<RenderQueue>().texts().count(), 0);

    tick(&mut world, &mut schedule, 1);
    assert!(world.contains_resource::<DebugMode>());
    tick(&mut world, &mut schedule, 1);
    let queue = world.resource::<RenderQueue>();
    let texts: Vec<&str> = queue.texts().collect();
    assert!(texts.iter().any(|t| t.starts_with("DEBUG MODE")));
    assert!(texts.iter().any(|t| t.starts_with("Clip: idle_down")));
    assert!(texts.contains(&"Entities: 4"));

    tick(&mut world, &mut schedule, 2);
    assert!(!world.contains_resource::<DebugMode>());
    assert_eq!(world.resource::<RenderQueue>().texts().count(), 0);
}

#[test]
fn test_debug_text_shows_cursor_tile() {
    let mut world = make_world(test_config(0));
    world.insert_resource(
        InputScript::default()
            .tap(InputAction::ToggleDebug, 1)
            .move_cursor(3, Vec2::new(200.0, 150.0)),
    );
    let mut schedule = build_schedule();

    tick(&mut world, &mut schedule, 2);
    let queue = world.resource::<RenderQueue>();
    assert!(queue.texts().any(|t| t == "Cursor: (0, 0) tile: (0, 0)"));

    tick(&mut world, &mut schedule, 1);
    let queue = world.resource::<RenderQueue>();
    assert!(queue.texts().any(|t| t == "Cursor: (200, 150) tile: (6, 4)"));
}

#[test]
fn test_characters_render_on_top() {
    let mut world = make_world(test_config(3));
    let mut schedule = build_schedule();
    tick(&mut world, &mut schedule, 1);

    let p = player(&mut world);
    let expected = {
        let sprite = world.get::<Sprite>(p).unwrap();
        world.get::<MapPosition>(p).unwrap().dest_rect(sprite)
    };
    let queue = world.resource::<RenderQueue>();
    assert_eq!(queue.sprites().count(), 5);
    match queue.sprites().last() {
        Some(DrawCommand::Sprite { dest, tex_key, .. }) => {
            assert_eq!(*dest, expected);
            assert_eq!(tex_key, "characters");
        }
        other => panic!("expected a sprite command, got {:?}", other),
    }
}

#[test]
fn test_npcs_start_idle_facing_their_direction() {
    let mut world = make_world(test_config(3));
    let mut schedule = build_schedule();
    tick(&mut world, &mut schedule, 1);

    let mut q = world.query::<(&EntityKind, &Facing, &AnimationController)>();
    let mut npcs = 0;
    for (kind, facing, controller) in q.iter(&world) {
        if *kind != EntityKind::Npc {
            continue;
        }
        npcs += 1;
        assert_eq!(
            controller.current_animation_name(),
            format!("idle_{}", facing.suffix())
        );
        assert!(!controller.has_clip("bike_down"));
    }
    assert_eq!(npcs, 3);
}

#[test]
fn test_flag_prop_plays_in_reverse() {
    let mut world = make_world(test_config(0));
    let mut schedule = build_schedule();
    tick(&mut world, &mut schedule, 4);

    let mut q = world.query::<(&EntityKind, &AnimationController, &Sprite)>();
    let (_, controller, sprite) = q
        .iter(&world)
        .find(|(kind, _, _)| **kind == EntityKind::Prop)
        .unwrap();
    // 250 ms frames: four ticks step back once from frame 0 to frame 3.
    assert_eq!(controller.current_animation_name(), "flag_wave");
    assert_eq!(controller.current_frame_index(), 3);
    assert_eq!(sprite.frame, cell(3, 6));
}

#[test]
fn test_animation_speed_from_config() {
    let mut config = test_config(0);
    config.animation_speed = 2.0;
    let mut world = make_world(config);
    world.insert_resource(InputScript::default().hold(InputAction::Right, 1, 100));
    let mut schedule = build_schedule();
    let p = player(&mut world);

    tick(&mut world, &mut schedule, 1);
    assert_eq!(clip_of(&world, p), ("walk_right".to_string(), 1));
}

#[test]
fn test_entity_without_drawable_frame_keeps_sprite() {
    let mut world = make_world(test_config(0));
    let mut schedule = build_schedule();

    let mut empty_clip = AnimationController::new();
    empty_clip.add_clip("nothing", Clip::new("nothing", AnimationDirection::Loop));
    empty_clip.play("nothing");

    let untouched = Sprite::new("characters", cell(7, 7));
    let bare = world
        .spawn((untouched.clone(), MapPosition::new(0.0, 0.0), AnimationController::new()))
        .id();
    let empty = world
        .spawn((untouched.clone(), MapPosition::new(0.0, 0.0), empty_clip))
        .id();

    tick(&mut world, &mut schedule, 3);
    assert_eq!(world.get::<Sprite>(bare).unwrap(), &untouched);
    assert_eq!(world.get::<Sprite>(empty).unwrap(), &untouched);
}

#[test]
fn test_time_scale_zero_freezes_playback() {
    let mut world = make_world(test_config(0));
    world.insert_resource(InputScript::default().hold(InputAction::Right, 1, 100));
    world
        .resource_mut::<pixelroam::resources::worldtime::WorldTime>()
        .time_scale = 0.0;
    let mut schedule = build_schedule();
    let p = player(&mut world);

    tick(&mut world, &mut schedule, 5);
    assert_eq!(clip_of(&world, p), ("walk_right".to_string(), 0));
    assert!(approx_eq(world.get::<MapPosition>(p).unwrap().pos.x, 304.0));
}
