//! Combat domain: enemy tuning.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::combat::components::EnemyKind;
use crate::combat::steering::Steering;

/// Timed close-range attack, distances in world units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeleeProfile {
    pub attack_range: f32,
    pub attack_duration: f32,
    pub attack_cooldown: f32,
    pub damage: f32,
}

impl Default for MeleeProfile {
    fn default() -> Self {
        Self {
            attack_range: 1.5,
            attack_duration: 0.5,
            attack_cooldown: 1.0,
            damage: 10.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyProfile {
    pub steering: Steering,
    pub health: f32,
    /// Sprite and collider edge length, in pixels.
    pub size: f32,
    pub melee: Option<MeleeProfile>,
}

impl Default for EnemyProfile {
    fn default() -> Self {
        Self {
            steering: Steering::default(),
            health: 50.0,
            size: 28.0,
            melee: Some(MeleeProfile::default()),
        }
    }
}

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    pub melee: EnemyProfile,
    pub ranged: EnemyProfile,
    pub boss: EnemyProfile,
    /// Enemies farther than this from the player are removed, in world units.
    pub despawn_distance: f32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            melee: EnemyProfile::default(),
            // Keeps its distance and never closes in
            ranged: EnemyProfile {
                steering: Steering {
                    move_speed: 2.5,
                    min_distance_to_player: 5.0,
                    ..default()
                },
                health: 30.0,
                size: 24.0,
                melee: None,
            },
            boss: EnemyProfile {
                steering: Steering {
                    move_speed: 1.5,
                    min_distance_to_player: 2.0,
                    separation_radius: 3.0,
                    separation_weight: 1.5,
                },
                health: 600.0,
                size: 72.0,
                melee: Some(MeleeProfile {
                    attack_range: 2.5,
                    attack_duration: 0.8,
                    attack_cooldown: 2.0,
                    damage: 30.0,
                }),
            },
            despawn_distance: 40.0,
        }
    }
}

impl EnemyTuning {
    pub fn profile(&self, kind: EnemyKind) -> &EnemyProfile {
        match kind {
            EnemyKind::Melee => &self.melee,
            EnemyKind::Ranged => &self.ranged,
            EnemyKind::Boss => &self.boss,
        }
    }
}
