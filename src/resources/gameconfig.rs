//! Game configuration resource.
//!
//! Settings loaded from an INI file. Every value has a safe default so the
//! demo starts even when the file is missing or incomplete.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 640
//! height = 360
//! target_fps = 60
//!
//! [world]
//! tile_size = 32
//! npc_count = 4
//! seed = 7
//!
//! [animation]
//! speed = 1.0
//! frame_ms = 120
//! sheet_texture = characters
//! clips = ./assets/clips.json
//!
//! [player]
//! walk_speed = 64
//! run_speed = 128
//! bike_speed = 192
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

const DEFAULT_WINDOW_WIDTH: u32 = 640;
const DEFAULT_WINDOW_HEIGHT: u32 = 360;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_TILE_SIZE: u32 = 32;
const DEFAULT_NPC_COUNT: u32 = 4;
const DEFAULT_SEED: u64 = 7;
const DEFAULT_ANIMATION_SPEED: f32 = 1.0;
const DEFAULT_FRAME_MS: f32 = 120.0;
const DEFAULT_SHEET_TEXTURE: &str = "characters";
const DEFAULT_WALK_SPEED: f32 = 64.0;
const DEFAULT_RUN_SPEED: f32 = 128.0;
const DEFAULT_BIKE_SPEED: f32 = 192.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Ticks per second; also the default fixed delta of the headless loop.
    pub target_fps: u32,
    /// Edge of one map tile in pixels.
    pub tile_size: u32,
    /// Number of wandering NPCs spawned at startup.
    pub npc_count: u32,
    /// Seed for NPC placement.
    pub seed: u64,
    /// Playback speed multiplier given to every spawned controller.
    pub animation_speed: f32,
    /// Duration of one frame of the built-in clips, in milliseconds.
    pub frame_ms: f32,
    /// Texture key of the character sprite sheet.
    pub sheet_texture: String,
    /// Optional clip sheet replacing the built-in clip library.
    pub clips_path: Option<PathBuf>,
    pub walk_speed: f32,
    pub run_speed: f32,
    pub bike_speed: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            tile_size: DEFAULT_TILE_SIZE,
            npc_count: DEFAULT_NPC_COUNT,
            seed: DEFAULT_SEED,
            animation_speed: DEFAULT_ANIMATION_SPEED,
            frame_ms: DEFAULT_FRAME_MS,
            sheet_texture: DEFAULT_SHEET_TEXTURE.to_string(),
            clips_path: None,
            walk_speed: DEFAULT_WALK_SPEED,
            run_speed: DEFAULT_RUN_SPEED,
            bike_speed: DEFAULT_BIKE_SPEED,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [world] section
        if let Some(tile_size) = config.getuint("world", "tile_size").ok().flatten() {
            self.tile_size = tile_size as u32;
        }
        if let Some(npc_count) = config.getuint("world", "npc_count").ok().flatten() {
            self.npc_count = npc_count as u32;
        }
        if let Some(seed) = config.getuint("world", "seed").ok().flatten() {
            self.seed = seed;
        }

        // [animation] section
        if let Some(speed) = config.getfloat("animation", "speed").ok().flatten() {
            self.animation_speed = speed as f32;
        }
        if let Some(frame_ms) = config.getfloat("animation", "frame_ms").ok().flatten() {
            self.frame_ms = frame_ms as f32;
        }
        if let Some(texture) = config.get("animation", "sheet_texture") {
            self.sheet_texture = texture;
        }
        if let Some(clips) = config.get("animation", "clips") {
            self.clips_path = Some(PathBuf::from(clips));
        }

        // [player] section
        if let Some(speed) = config.getfloat("player", "walk_speed").ok().flatten() {
            self.walk_speed = speed as f32;
        }
        if let Some(speed) = config.getfloat("player", "run_speed").ok().flatten() {
            self.run_speed = speed as f32;
        }
        if let Some(speed) = config.getfloat("player", "bike_speed").ok().flatten() {
            self.bike_speed = speed as f32;
        }

        info!(
            "Loaded config: {}x{} window, fps={}, tile={}, npcs={}, anim speed={}, frame={}ms",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.tile_size,
            self.npc_count,
            self.animation_speed,
            self.frame_ms
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        config.set("world", "tile_size", Some(self.tile_size.to_string()));
        config.set("world", "npc_count", Some(self.npc_count.to_string()));
        config.set("world", "seed", Some(self.seed.to_string()));

        config.set("animation", "speed", Some(self.animation_speed.to_string()));
        config.set("animation", "frame_ms", Some(self.frame_ms.to_string()));
        config.set("animation", "sheet_texture", Some(self.sheet_texture.clone()));
        if let Some(clips) = &self.clips_path {
            config.set("animation", "clips", Some(clips.display().to_string()));
        }

        config.set("player", "walk_speed", Some(self.walk_speed.to_string()));
        config.set("player", "run_speed", Some(self.run_speed.to_string()));
        config.set("player", "bike_speed", Some(self.bike_speed.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Fixed tick length in seconds derived from `target_fps`.
    pub fn fixed_delta(&self) -> f32 {
        1.0 / self.target_fps.max(1) as f32
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}
