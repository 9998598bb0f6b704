//! Serde data model for the gameplay tuning file.

use serde::{Deserialize, Serialize};

use crate::combat::{EnemyTuning, SpawnerTuning};
use crate::movement::{DashTuning, MovementTuning, PlayerTuning, WallTuning};

/// Version of the tuning file layout this build reads.
pub const SCHEMA_VERSION: u32 = 1;

// ============================================================================
// Wrapper for tuning.ron with schema_version
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TuningFile {
    pub schema_version: u32,
    #[serde(default)]
    pub tuning: GameplayTuning,
}

// ============================================================================
// Gameplay tuning: one section per resource
// ============================================================================

/// Every section falls back to its built-in defaults, so a partial file only
/// overrides what it names.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GameplayTuning {
    pub movement: MovementTuning,
    pub player: PlayerTuning,
    pub wall: WallTuning,
    pub dash: DashTuning,
    pub enemies: EnemyTuning,
    pub spawner: SpawnerTuning,
    /// Fixed run seed. Random per run when absent.
    pub seed: Option<u64>,
}
