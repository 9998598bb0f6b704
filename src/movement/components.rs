//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::wall::WallDirection;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Floors and platforms
    Ground,
    /// Wall surfaces the player can adhere to
    Wall,
    /// Player character
    Player,
    /// Enemy agents
    Enemy,
}

#[derive(Component, Debug)]
pub struct Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    /// Facing for a horizontal component; `None` when it is zero.
    pub fn from_x(x: f32) -> Option<Self> {
        if x > 0.0 {
            Some(Facing::Right)
        } else if x < 0.0 {
            Some(Facing::Left)
        } else {
            None
        }
    }

    pub fn flip_x(self) -> bool {
        self == Facing::Left
    }
}

#[derive(Component, Debug, Default)]
pub struct MovementState {
    pub grounded: bool,
    pub facing: Facing,
}

/// Base locomotion speed in pixels per second. Dash may scale it temporarily.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct MoveSpeed(pub f32);

/// Velocity changes requested by the logic pass and applied on the next
/// fixed physics tick.
#[derive(Component, Debug, Default)]
pub struct MotionRequest {
    /// Wall-relative locomotion axis in [-1, 1].
    pub axis: f32,
    /// One-shot impulses, in pixels per second.
    pub impulse: Vec2,
    /// Replace the velocity outright before impulses are added.
    pub set_velocity: Option<Vec2>,
}

impl MotionRequest {
    pub fn push_impulse(&mut self, impulse: Vec2) {
        self.impulse += impulse;
    }
}

/// Tag on a collider identifying which surface it is.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallSurface(pub WallDirection);
