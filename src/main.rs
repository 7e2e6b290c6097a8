//! Pixelroam entry point.
//!
//! A headless top-down walking demo built on:
//! - **bevy_ecs** for entity-component-system architecture
//! - **configparser** for the INI settings file
//! - **serde_json** for clip sheets
//!
//! The player, a few wandering NPCs and a flag prop are animated from one
//! character sheet. Without a window, keyboard input comes from a scripted
//! timeline and frames are handed to a logging renderer.
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (defaults when missing) and the clip library
//! 2. Build the ECS world, register observers and spawn the scene
//! 3. For each tick: advance time, run the schedule, present the render queue
//! 4. Stop after `--ticks` frames or when the quit key is pressed
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run --release -- --ticks 300 --debug
//! ```

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use clap::Parser;

use pixelroam::components::animation::AnimationController;
use pixelroam::components::inputcontrolled::InputControlled;
use pixelroam::components::mapposition::MapPosition;
use pixelroam::events::input::InputAction;
use pixelroam::game;
use pixelroam::renderer::{LogRenderer, present_queue};
use pixelroam::resources::debugmode::DebugMode;
use pixelroam::resources::gameconfig::GameConfig;
use pixelroam::resources::input::InputState;
use pixelroam::resources::renderqueue::RenderQueue;
use pixelroam::systems::time::update_world_time;

/// Pixelroam: sprite animation playground
#[derive(Parser)]
#[command(version, about = "Animates a small top-down world from a sprite sheet.")]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// JSON clip sheet to use instead of the built-in clip library.
    #[arg(long, value_name = "PATH")]
    clips: Option<PathBuf>,

    /// Number of frames to simulate.
    #[arg(long, default_value_t = 300)]
    ticks: u64,

    /// Fixed frame delta in seconds (default: 1 / target_fps).
    #[arg(long, value_name = "SECS")]
    dt: Option<f32>,

    /// Start with the debug overlay on.
    #[arg(long)]
    debug: bool,

    /// Write the clip library as JSON and exit.
    /// Optionally provide a path (default: clips.json).
    #[arg(long, value_name = "PATH")]
    dump_clips: Option<Option<PathBuf>>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{}; using defaults", e);
    }
    if let Some(path) = cli.clips {
        config.clips_path = Some(path);
    }

    let store = match game::load_clip_library(&config) {
        Ok(store) => store,
        Err(e) => {
            log::error!("Failed to load clips: {}", e);
            std::process::exit(1);
        }
    };

    // Early-exit: dump the clip library and quit
    if let Some(maybe_path) = cli.dump_clips {
        let path = maybe_path.unwrap_or_else(|| PathBuf::from("clips.json"));
        let written = store
            .to_json_string()
            .and_then(|json| std::fs::write(&path, json).map_err(Into::into));
        match written {
            Ok(()) => println!("{} clips written to {}", store.len(), path.display()),
            Err(e) => {
                log::error!("Failed to write {}: {}", path.display(), e);
                std::process::exit(1);
            }
        }
        return;
    }

    log::info!("Hello, world! This is Pixelroam!");
    let dt = cli.dt.unwrap_or_else(|| config.fixed_delta());

    // --------------- ECS world + resources ---------------
    let mut world = game::build_world(config, store);
    world.insert_resource(game::demo_script());
    if cli.debug {
        world.insert_resource(DebugMode {});
    }

    let setup_system_id = world.register_system(game::setup);
    if let Err(e) = world.run_system(setup_system_id) {
        log::error!("Scene setup failed: {}", e);
        std::process::exit(1);
    }

    let mut update = game::build_schedule();

    // --------------- Main loop ---------------
    let mut renderer = LogRenderer::default();
    for _ in 0..cli.ticks {
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame

        present_queue(&mut *world.resource_mut::<RenderQueue>(), &mut renderer);

        if world.resource::<InputState>().is_pressed(InputAction::Quit) {
            log::info!("Quit pressed");
            break;
        }
    }

    let mut players = world.query_filtered::<(&MapPosition, &AnimationController), With<InputControlled>>();
    for (position, controller) in players.iter(&world) {
        log::info!(
            "Player at ({:.1}, {:.1}): {}",
            position.pos.x,
            position.pos.y,
            controller
        );
    }
    log::info!(
        "{} frames, {} sprites, {} texts drawn",
        renderer.frames,
        renderer.sprites_drawn,
        renderer.texts_drawn
    );
}
