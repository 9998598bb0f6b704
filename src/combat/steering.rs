//! Combat domain: seek-plus-separation steering for enemy agents.
//!
//! Every agent seeks the player until it is within its minimum distance and is
//! pushed away from neighbours inside its separation radius. Separation is an
//! all-pairs scan, so cost grows with the square of the enemy count.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::Facing;

/// Distances below this are clamped when weighting separation.
pub const MIN_SEPARATION_DISTANCE: f32 = 0.1;

/// Per-agent steering parameters, in world units.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Steering {
    pub move_speed: f32,
    pub min_distance_to_player: f32,
    pub separation_radius: f32,
    pub separation_weight: f32,
}

impl Default for Steering {
    fn default() -> Self {
        Self {
            move_speed: 3.0,
            min_distance_to_player: 1.0,
            separation_radius: 1.5,
            separation_weight: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SteeringOutput {
    pub velocity: Vec2,
    /// `None` leaves the current facing alone.
    pub facing: Option<Facing>,
}

/// Unit vector toward the player, or zero once within `min_distance`.
pub fn seek(position: Vec2, player: Vec2, min_distance: f32) -> Vec2 {
    let to_player = player - position;
    if to_player.length() > min_distance {
        to_player.normalize_or_zero()
    } else {
        Vec2::ZERO
    }
}

/// Average push away from every neighbour closer than `radius`, weighted by
/// inverse distance.
pub fn separation(position: Vec2, neighbors: impl IntoIterator<Item = Vec2>, radius: f32) -> Vec2 {
    let mut sum = Vec2::ZERO;
    let mut count = 0;

    for other in neighbors {
        let distance = position.distance(other);
        if distance >= radius {
            continue;
        }
        let away = (position - other).normalize_or_zero();
        sum += away / distance.max(MIN_SEPARATION_DISTANCE);
        count += 1;
    }

    if count > 0 { sum / count as f32 } else { sum }
}

impl Steering {
    pub fn compute_velocity(
        &self,
        position: Vec2,
        neighbors: impl IntoIterator<Item = Vec2>,
        player: Vec2,
    ) -> SteeringOutput {
        let combined = seek(position, player, self.min_distance_to_player)
            + separation(position, neighbors, self.separation_radius) * self.separation_weight;

        if combined == Vec2::ZERO {
            return SteeringOutput::default();
        }

        let direction = combined.normalize_or_zero();
        SteeringOutput {
            velocity: direction * self.move_speed,
            facing: Facing::from_x(direction.x),
        }
    }
}
