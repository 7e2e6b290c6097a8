//! Random wandering for NPCs.
//!
//! The [`npc_wander`](crate::systems::wander::npc_wander) system counts
//! `elapsed` up by the world delta; every `interval` seconds it picks a new
//! random facing and either walks that way at `speed` or stands still.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Wander {
    /// Seconds between decisions.
    pub interval: f32,
    /// Seconds since the last decision.
    pub elapsed: f32,
    /// Walking speed in pixels per second.
    pub speed: f32,
    /// Probability of standing still at each decision, in `[0, 1]`.
    pub idle_chance: f32,
}

impl Wander {
    pub fn new(interval: f32, speed: f32) -> Self {
        Self {
            interval,
            elapsed: 0.0,
            speed,
            idle_chance: 0.5,
        }
    }

    pub fn with_idle_chance(mut self, idle_chance: f32) -> Self {
        self.idle_chance = idle_chance.clamp(0.0, 1.0);
        self
    }

    /// Add `delta` seconds; true when a new decision is due.
    pub fn tick(&mut self, delta: f32) -> bool {
        self.elapsed += delta;
        if self.elapsed >= self.interval {
            self.elapsed = 0.0;
            true
        } else {
            false
        }
    }
}
