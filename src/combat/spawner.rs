//! Combat domain: time-ramped enemy spawn schedule.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use crate::combat::components::EnemyKind;

/// Spawner settings. Distances are world units, times are seconds.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnerTuning {
    pub min_distance: f32,
    pub max_distance: f32,
    pub initial_interval: f32,
    pub min_interval: f32,
    /// Time over which the interval shrinks from initial to min.
    pub ramp_duration: f32,
    pub boss_time: f32,
    pub ranged_ratio: f32,
}

impl Default for SpawnerTuning {
    fn default() -> Self {
        Self {
            min_distance: 12.0,
            max_distance: 15.0,
            initial_interval: 2.0,
            min_interval: 0.5,
            ramp_duration: 30.0,
            boss_time: 600.0,
            ranged_ratio: 0.3,
        }
    }
}

impl SpawnerTuning {
    /// Spawn interval after `elapsed` seconds of play.
    pub fn interval_at(&self, elapsed: f32) -> f32 {
        if self.ramp_duration <= 0.0 {
            return self.min_interval;
        }
        let t = (elapsed / self.ramp_duration).clamp(0.0, 1.0);
        self.initial_interval + (self.min_interval - self.initial_interval) * t
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRequest {
    pub kind: EnemyKind,
    /// World units.
    pub position: Vec2,
}

#[derive(Resource, Debug, Clone)]
pub struct SpawnSchedule {
    current_interval: f32,
    game_time: f32,
    until_next: f32,
    ramp_complete: bool,
    boss_spawned: bool,
    rng: ChaCha8Rng,
}

impl Default for SpawnSchedule {
    fn default() -> Self {
        Self::new(&SpawnerTuning::default(), 0)
    }
}

impl SpawnSchedule {
    pub fn new(tuning: &SpawnerTuning, seed: u64) -> Self {
        Self {
            current_interval: tuning.initial_interval,
            game_time: 0.0,
            // First regular spawn is immediate
            until_next: 0.0,
            ramp_complete: false,
            boss_spawned: false,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn game_time(&self) -> f32 {
        self.game_time
    }

    pub fn current_interval(&self) -> f32 {
        self.current_interval
    }

    pub fn until_next(&self) -> f32 {
        self.until_next
    }

    pub fn boss_spawned(&self) -> bool {
        self.boss_spawned
    }

    /// Advance by `dt` and return whatever is due, at most one regular spawn
    /// plus the boss.
    pub fn tick(&mut self, dt: f32, player: Vec2, tuning: &SpawnerTuning) -> Vec<SpawnRequest> {
        let mut requests = Vec::new();
        self.game_time += dt;

        if !self.ramp_complete {
            if self.game_time < tuning.ramp_duration {
                self.current_interval = tuning.interval_at(self.game_time);
            } else {
                self.current_interval = tuning.min_interval;
                self.ramp_complete = true;
            }
        }

        self.until_next -= dt;
        if self.until_next <= 0.0 {
            requests.push(self.roll_regular(player, tuning));
            self.until_next = self.current_interval;
        }

        if let Some(boss) = self.boss_due(player, tuning) {
            requests.push(boss);
        }

        requests
    }

    /// Spawn one regular enemy now, outside the schedule.
    pub fn force_spawn(&mut self, player: Vec2, tuning: &SpawnerTuning) -> SpawnRequest {
        self.roll_regular(player, tuning)
    }

    /// Spawn the boss now unless it already appeared.
    pub fn force_boss(&mut self, player: Vec2, tuning: &SpawnerTuning) -> Option<SpawnRequest> {
        if self.boss_spawned {
            return None;
        }
        self.boss_spawned = true;
        Some(boss_request(player, tuning))
    }

    fn boss_due(&mut self, player: Vec2, tuning: &SpawnerTuning) -> Option<SpawnRequest> {
        if self.game_time < tuning.boss_time {
            return None;
        }
        self.force_boss(player, tuning)
    }

    fn roll_regular(&mut self, player: Vec2, tuning: &SpawnerTuning) -> SpawnRequest {
        let angle = self.rng.random_range(0.0..TAU);
        let distance = if tuning.max_distance > tuning.min_distance {
            self.rng.random_range(tuning.min_distance..=tuning.max_distance)
        } else {
            tuning.min_distance
        };
        let kind = if self.rng.random::<f32>() < tuning.ranged_ratio {
            EnemyKind::Ranged
        } else {
            EnemyKind::Melee
        };

        SpawnRequest {
            kind,
            position: player + Vec2::from_angle(angle) * distance,
        }
    }
}

/// The boss always arrives on the player's right.
fn boss_request(player: Vec2, tuning: &SpawnerTuning) -> SpawnRequest {
    SpawnRequest {
        kind: EnemyKind::Boss,
        position: player + Vec2::new(tuning.max_distance, 0.0),
    }
}
