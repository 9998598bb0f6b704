//! Debug domain: dev-tools state and the snapshot format.

use bevy::prelude::*;
use serde::Serialize;

use crate::core::RunStats;

/// Resource tracking dev-tools toggles
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether player is invincible
    pub invincible: bool,
}

/// Everything F3 prints, as one JSON object.
#[derive(Debug, Serialize)]
pub struct DebugSnapshot {
    pub seed: u64,
    pub game_time: f32,
    pub spawn_interval: f32,
    pub until_next_spawn: f32,
    pub boss_spawned: bool,
    pub registered_enemies: usize,
    pub player: Option<PlayerSnapshot>,
    pub stats: RunStats,
}

#[derive(Debug, Serialize)]
pub struct PlayerSnapshot {
    pub position: [f32; 2],
    pub state: String,
    pub wall: String,
    pub health: f32,
    pub dash_cooldown: f32,
}
