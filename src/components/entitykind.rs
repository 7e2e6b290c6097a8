//! Capability tag for visual entities.
//!
//! Every animated entity is the same bundle of components (sprite, position,
//! controller); [`EntityKind`] says which extra behavior applies on top:
//!
//! - `Prop` – static decoration, keeps whatever clip it was given
//! - `Npc` – idle/walk clips chosen from its facing and motion
//! - `Character` – the player, with run and bike modes
//!
//! Systems branch on the tag instead of relying on per-kind component types.

use bevy_ecs::prelude::Component;

use crate::components::facing::Facing;

/// Mode flags of a player character.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CharacterMode {
    pub on_bike: bool,
    pub running: bool,
}

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Prop,
    Npc,
    Character(CharacterMode),
}

impl EntityKind {
    pub fn character() -> Self {
        EntityKind::Character(CharacterMode::default())
    }

    pub fn is_character(&self) -> bool {
        matches!(self, EntityKind::Character(_))
    }

    pub fn on_bike(&self) -> bool {
        matches!(self, EntityKind::Character(mode) if mode.on_bike)
    }

    /// No effect on props and NPCs.
    pub fn set_on_bike(&mut self, on_bike: bool) {
        if let EntityKind::Character(mode) = self {
            mode.on_bike = on_bike;
        }
    }

    pub fn toggle_on_bike(&mut self) {
        let on_bike = self.on_bike();
        self.set_on_bike(!on_bike);
    }

    pub fn set_running(&mut self, running: bool) {
        if let EntityKind::Character(mode) = self {
            mode.running = running;
        }
    }

    /// Clip an entity of this kind should show, e.g. `walk_left`.
    ///
    /// Props return `None`: their clip is chosen once at spawn time.
    pub fn clip_name(&self, facing: Facing, moving: bool) -> Option<String> {
        let prefix = match self {
            EntityKind::Prop => return None,
            EntityKind::Npc => {
                if moving {
                    "walk"
                } else {
                    "idle"
                }
            }
            EntityKind::Character(mode) => match (mode.on_bike, moving, mode.running) {
                (true, true, _) => "bike",
                (true, false, _) => "bike_idle",
                (false, true, true) => "run",
                (false, true, false) => "walk",
                (false, false, _) => "idle",
            },
        };
        Some(format!("{}_{}", prefix, facing.suffix()))
    }
}
