//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    pub move_speed: f32,
    pub jump_velocity: f32,
    pub gravity: f32,
    /// Ray length below the feet that still counts as standing.
    pub ground_probe_distance: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            move_speed: 320.0,
            jump_velocity: 680.0,
            gravity: 1800.0,
            ground_probe_distance: 4.0,
        }
    }
}

impl MovementTuning {
    /// Apex height of a jump: h = v² / (2g)
    pub fn jump_height(&self) -> f32 {
        if self.gravity <= 0.0 {
            return 0.0;
        }
        self.jump_velocity * self.jump_velocity / (2.0 * self.gravity)
    }
}

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub max_health: f32,
    pub width: f32,
    pub height: f32,
    pub attack_duration: f32,
    pub attack_damage: f32,
    /// Reach of the melee strike in front of the player, in pixels.
    pub attack_reach: f32,
    pub damaged_duration: f32,
    pub invulnerability_time: f32,
    /// Input magnitude below which the player counts as standing still.
    pub deadzone: f32,
    /// A jump that never leaves the ground lands after this long.
    pub jump_land_grace: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            max_health: 100.0,
            width: 24.0,
            height: 48.0,
            attack_duration: 0.3,
            attack_damage: 25.0,
            attack_reach: 56.0,
            damaged_duration: 0.35,
            invulnerability_time: 0.6,
            deadzone: 0.1,
            jump_land_grace: 0.15,
        }
    }
}

impl PlayerTuning {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Which wall sensing strategy drives orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WallSensing {
    /// Tagged surfaces reported by collision events, debounced.
    #[default]
    ContactTag,
    /// Four short ray casts around the body every frame.
    Proximity,
}

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WallTuning {
    pub sensing: WallSensing,
    /// Minimum time between accepted contact changes.
    pub debounce_seconds: f32,
    /// Extra ray length beyond the body edge for proximity sensing.
    pub probe_distance: f32,
    /// Contacts only attach while jumping or dashing.
    pub attach_only_airborne: bool,
}

impl Default for WallTuning {
    fn default() -> Self {
        Self {
            sensing: WallSensing::ContactTag,
            debounce_seconds: 0.3,
            probe_distance: 6.0,
            attach_only_airborne: true,
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: Vec2,
    pub jump_just_pressed: bool,
    pub attack_just_pressed: bool,
    pub dash_just_pressed: bool,
}
