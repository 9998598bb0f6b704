//! Core domain: shared resources and markers for a run.

use bevy::prelude::*;
use rand::Rng;
use serde::Serialize;

/// Render pixels per world unit. Enemy steering is tuned in world units.
pub const PIXELS_PER_UNIT: f32 = 32.0;

/// Marks everything spawned for a run; cleared when a new run starts.
#[derive(Component, Debug)]
pub struct RunEntity;

#[derive(Resource, Debug)]
pub struct RunConfig {
    pub seed: u64,
    /// Fixed seed from the tuning file, reused by every run when set.
    pub seed_override: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: rand::rng().random(),
            seed_override: None,
        }
    }
}

impl RunConfig {
    /// Pick the seed for a fresh run.
    pub fn reseed(&mut self) -> u64 {
        self.seed = self.seed_override.unwrap_or_else(|| rand::rng().random());
        self.seed
    }
}

/// Counters for the current run.
#[derive(Resource, Debug, Default, Clone, Serialize)]
pub struct RunStats {
    pub elapsed: f32,
    pub spawned: u32,
    pub kills: u32,
    pub bosses_defeated: u32,
}

impl RunStats {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
