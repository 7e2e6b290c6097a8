//! Animation resource registry.
//!
//! This module provides a store for clip definitions that can be reused by
//! multiple entities. Clips are kept behind `Arc` so every entity's
//! [`AnimationController`] can hold the same definition without copying it.
//!
//! # Clip sheet format
//!
//! ```json
//! {
//!   "clips": [
//!     { "name": "idle_down", "direction": "forward",
//!       "grid": { "start": { "x": 0, "y": 32, "w": 32, "h": 32 },
//!                 "rows": 1, "columns": 1, "duration": 100.0 } },
//!     { "name": "walk_down", "direction": "loop",
//!       "frames": [ { "rect": { "x": 32, "y": 32, "w": 32, "h": 32 }, "duration": 100.0 } ] }
//!   ]
//! }
//! ```
//!
//! Explicit `frames` come first; `grid` frames are appended after them.

use std::path::Path;
use std::sync::Arc;

use bevy_ecs::prelude::Resource;
use log::{debug, info, warn};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::animation::{AnimationDirection, Clip, Frame};
use crate::components::animation::AnimationController;
use crate::error::AssetError;
use crate::geometry::Rect;

/// Grid slice of a sprite sheet, expanded with [`Clip::from_grid`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridDef {
    pub start: Rect,
    pub rows: u32,
    pub columns: u32,
    pub duration: f32,
}

/// One clip entry of a sheet file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipDef {
    pub name: String,
    #[serde(default)]
    pub direction: AnimationDirection,
    #[serde(default)]
    pub frames: Vec<Frame>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<GridDef>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub flipped: bool,
}

impl ClipDef {
    fn into_clip(self) -> Result<Clip, AssetError> {
        if self.name.is_empty() {
            return Err(AssetError::InvalidClip("clip without a name".to_string()));
        }
        let mut clip = Clip::with_frames(self.name, self.frames, self.direction);
        if let Some(grid) = self.grid {
            if grid.rows == 0 || grid.columns == 0 {
                return Err(AssetError::InvalidClip(format!(
                    "'{}': grid needs at least one row and one column",
                    clip.name
                )));
            }
            let sliced = Clip::grid_frames(grid.start, grid.rows, grid.columns, grid.duration)
                .ok_or_else(|| {
                    AssetError::InvalidClip(format!(
                        "'{}': {}x{} grid from {:?} is too large",
                        clip.name, grid.rows, grid.columns, grid.start
                    ))
                })?;
            for frame in sliced {
                clip.add_frame(frame);
            }
        }
        if self.flipped {
            clip = clip.with_flipped(true);
        }
        Ok(clip)
    }
}

/// On-disk layout of a clip sheet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClipSheet {
    pub clips: Vec<ClipDef>,
}

/// Central registry of reusable clip definitions keyed by name.
#[derive(Resource, Debug, Default, Clone)]
pub struct AnimationStore {
    pub animations: FxHashMap<String, Arc<Clip>>,
}

impl AnimationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a clip under its own name, replacing any previous entry.
    pub fn insert(&mut self, clip: Clip) -> Arc<Clip> {
        let clip = Arc::new(clip);
        self.animations.insert(clip.name.clone(), clip.clone());
        clip
    }

    pub fn get(&self, name: &str) -> Option<Arc<Clip>> {
        self.animations.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.animations.contains_key(name)
    }

    /// Clip names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.animations.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    /// Build a controller holding the named clips. Unknown names are skipped
    /// with a warning.
    pub fn controller_for<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> AnimationController {
        let mut controller = AnimationController::new();
        for name in names {
            match self.animations.get(name) {
                Some(clip) => controller.add_clip(name, clip.clone()),
                None => warn!("AnimationStore: no clip named '{}'", name),
            }
        }
        controller
    }

    /// Parse a clip sheet and add its clips to the store.
    ///
    /// Returns the number of clips loaded. Nothing is added when any entry is
    /// invalid.
    pub fn load_json_str(&mut self, json: &str) -> Result<usize, AssetError> {
        let sheet: ClipSheet = serde_json::from_str(json)?;
        let clips = sheet
            .clips
            .into_iter()
            .map(ClipDef::into_clip)
            .collect::<Result<Vec<_>, _>>()?;
        let count = clips.len();
        for clip in clips {
            debug!(
                "clip '{}': {} frames, {} ms",
                clip.name,
                clip.len(),
                clip.total_duration()
            );
            self.insert(clip);
        }
        Ok(count)
    }

    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<usize, AssetError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let count = self.load_json_str(&json)?;
        info!("Loaded {} clips from {}", count, path.display());
        Ok(count)
    }

    /// Serialize every clip as an explicit-frame sheet, sorted by name.
    pub fn to_json_string(&self) -> Result<String, AssetError> {
        let sheet = ClipSheet {
            clips: self
                .names()
                .into_iter()
                .filter_map(|name| self.animations.get(name))
                .map(|clip| ClipDef {
                    name: clip.name.clone(),
                    direction: clip.direction,
                    frames: clip.frames.clone(),
                    grid: None,
                    flipped: false,
                })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&sheet)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET: &str = r#"{
        "clips": [
            { "name": "idle_down", "direction": "forward",
              "grid": { "start": { "x": 0, "y": 32, "w": 32, "h": 32 },
                        "rows": 1, "columns": 1, "duration": 100.0 } },
            { "name": "walk_down", "direction": "loop",
              "frames": [
                { "rect": { "x": 32, "y": 32, "w": 32, "h": 32 }, "duration": 100.0 },
                { "rect": { "x": 0, "y": 32, "w": 32, "h": 32 }, "duration": 100.0 }
              ],
              "grid": { "start": { "x": 96, "y": 32, "w": 32, "h": 32 },
                        "rows": 1, "columns": 2, "duration": 50.0 } },
            { "name": "walk_left", "direction": "loop", "flipped": true,
              "grid": { "start": { "x": 0, "y": 96, "w": 32, "h": 32 },
                        "rows": 1, "columns": 2, "duration": 100.0 } }
        ]
    }"#;

    #[test]
    fn test_load_json_str_counts_and_orders_frames() {
        let mut store = AnimationStore::new();
        assert_eq!(store.load_json_str(SHEET).unwrap(), 3);
        assert_eq!(store.names(), vec!["idle_down", "walk_down", "walk_left"]);

        let walk = store.get("walk_down").unwrap();
        assert_eq!(walk.direction(), AnimationDirection::Loop);
        let xs: Vec<i32> = walk.frames().iter().map(|f| f.rect.x).collect();
        assert_eq!(xs, vec![32, 0, 96, 128]);
        assert_eq!(walk.get_frame(3).unwrap().duration, 50.0);
    }

    #[test]
    fn test_flipped_clip() {
        let mut store = AnimationStore::new();
        store.load_json_str(SHEET).unwrap();
        assert!(store.get("walk_left").unwrap().frames().iter().all(|f| f.is_flipped));
        assert!(!store.get("walk_down").unwrap().frames().iter().any(|f| f.is_flipped));
    }

    #[test]
    fn test_direction_defaults_to_forward() {
        let mut store = AnimationStore::new();
        store
            .load_json_str(r#"{ "clips": [ { "name": "still" } ] }"#)
            .unwrap();
        let still = store.get("still").unwrap();
        assert_eq!(still.direction(), AnimationDirection::Forward);
        assert!(still.is_empty());
    }

    #[test]
    fn test_malformed_json_fails() {
        let mut store = AnimationStore::new();
        assert!(matches!(
            store.load_json_str("{ \"clips\": [ "),
            Err(AssetError::Json(_))
        ));
    }

    #[test]
    fn test_zero_row_grid_rejected_and_nothing_added() {
        let mut store = AnimationStore::new();
        let json = r#"{ "clips": [
            { "name": "ok" },
            { "name": "bad", "grid": { "start": { "x": 0, "y": 0, "w": 8, "h": 8 },
                                       "rows": 0, "columns": 3, "duration": 10.0 } }
        ] }"#;
        assert!(matches!(
            store.load_json_str(json),
            Err(AssetError::InvalidClip(_))
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let mut store = AnimationStore::new();
        assert!(matches!(
            store.load_from_file("./definitely/not/here.json"),
            Err(AssetError::Io(_))
        ));
    }

    #[test]
    fn test_controller_for_shares_clips() {
        let mut store = AnimationStore::new();
        store.load_json_str(SHEET).unwrap();
        let controller = store.controller_for(["walk_down", "unknown"]);
        assert!(controller.has_clip("walk_down"));
        assert!(!controller.has_clip("unknown"));
        assert_eq!(Arc::strong_count(&store.animations["walk_down"]), 2);
    }

    #[test]
    fn test_overflowing_grid_rejected_and_nothing_added() {
        let mut store = AnimationStore::new();
        let json = r#"{ "clips": [
            { "name": "ok" },
            { "name": "wide", "grid": { "start": { "x": 0, "y": 0, "w": 1200000000, "h": 32 },
                                        "rows": 1, "columns": 3, "duration": 10.0 } }
        ] }"#;
        assert!(matches!(
            store.load_json_str(json),
            Err(AssetError::InvalidClip(_))
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_huge_grid_rejected() {
        let mut store = AnimationStore::new();
        let json = r#"{ "clips": [
            { "name": "huge", "grid": { "start": { "x": 0, "y": 0, "w": 1, "h": 1 },
                                        "rows": 70000, "columns": 70000, "duration": 10.0 } }
        ] }"#;
        assert!(matches!(
            store.load_json_str(json),
            Err(AssetError::InvalidClip(_))
        ));
    }

    #[test]
    fn test_to_json_string_reloads() {
        let mut store = AnimationStore::new();
        store.load_json_str(SHEET).unwrap();
        let json = store.to_json_string().unwrap();

        let mut reloaded = AnimationStore::new();
        assert_eq!(reloaded.load_json_str(&json).unwrap(), 3);
        assert_eq!(reloaded.get("walk_down"), store.get("walk_down"));
        assert_eq!(reloaded.get("walk_left"), store.get("walk_left"));
    }
}
