//! Movement domain: dash ability and its after-image trail.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::components::{Facing, MoveSpeed};
use crate::movement::wall::WallDirection;

/// How a dash moves the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DashMode {
    /// Velocity is pinned to `direction * dash_speed` every physics tick.
    #[default]
    VelocityOverride,
    /// Base move speed is scaled and normal locomotion does the moving.
    SpeedMultiplier,
}

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashTuning {
    pub mode: DashMode,
    pub dash_speed: f32,
    pub duration: f32,
    pub cooldown: f32,
    pub speed_multiplier: f32,
    /// Look-ahead distance for wall hits while dashing.
    pub wall_probe_distance: f32,
    /// Fraction of dash speed kept as a bounce off a wall.
    pub rebound_factor: f32,
    /// Tangential velocity kept when a dash is cancelled.
    pub exit_velocity_scale: f32,
    pub after_image_interval: f32,
    pub after_image_lifetime: f32,
    pub after_image_alpha: f32,
}

impl Default for DashTuning {
    fn default() -> Self {
        Self {
            mode: DashMode::VelocityOverride,
            dash_speed: 900.0,
            duration: 0.2,
            cooldown: 1.0,
            speed_multiplier: 2.5,
            wall_probe_distance: 16.0,
            rebound_factor: 0.2,
            exit_velocity_scale: 0.5,
            after_image_interval: 0.05,
            after_image_lifetime: 0.3,
            after_image_alpha: 0.5,
        }
    }
}

/// Direction for a new dash: held input if any, else along the current
/// surface the way the player faces.
pub fn dash_direction(axis: Vec2, facing: Facing, wall: WallDirection) -> Vec2 {
    let direction = axis.normalize_or_zero();
    if direction == Vec2::ZERO {
        wall.tangent() * facing.sign()
    } else {
        direction
    }
}

/// Bounce handed back when a dash runs into a surface with `normal`.
pub fn rebound_velocity(normal: Vec2, tuning: &DashTuning) -> Vec2 {
    normal * tuning.dash_speed * tuning.rebound_factor
}

/// Velocity left after cancelling a dash: the part along the surface is
/// scaled down, the part across it is kept.
pub fn exit_velocity(velocity: Vec2, wall: WallDirection, tuning: &DashTuning) -> Vec2 {
    let tangent = wall.tangent();
    let along = velocity.dot(tangent) * tangent;
    velocity - along + along * tuning.exit_velocity_scale
}

/// State of a dash in flight. Dropped when the dash ends.
#[derive(Debug, Clone, PartialEq)]
pub struct DashSession {
    pub direction: Vec2,
    pub remaining: f32,
    pub trail_timer: f32,
    pub original_move_speed: f32,
}

/// Why a dash stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashEnd {
    Elapsed,
    Cancelled,
    HitWall,
}

/// Result of advancing a dash by one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DashTick {
    /// After-images due this frame.
    pub trails: u32,
    pub ended: Option<DashEnd>,
}

#[derive(Component, Debug, Default)]
pub struct Dash {
    session: Option<DashSession>,
    cooldown: f32,
}

impl Dash {
    pub fn is_dashing(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DashSession> {
        self.session.as_ref()
    }

    pub fn cooldown_remaining(&self) -> f32 {
        self.cooldown
    }

    pub fn ready(&self) -> bool {
        self.session.is_none() && self.cooldown <= 0.0
    }

    /// Start a dash. Fails while dashing or cooling down.
    pub fn try_start(
        &mut self,
        direction: Vec2,
        speed: &mut MoveSpeed,
        tuning: &DashTuning,
    ) -> bool {
        if !self.ready() {
            return false;
        }
        let original_move_speed = speed.0;
        if tuning.mode == DashMode::SpeedMultiplier {
            speed.0 = original_move_speed * tuning.speed_multiplier;
        }
        self.session = Some(DashSession {
            direction,
            remaining: tuning.duration,
            // First after-image lands on the starting position.
            trail_timer: 0.0,
            original_move_speed,
        });
        true
    }

    /// Stop a dash in flight (re-press or wall hit), restoring the pre-dash
    /// speed and arming the cooldown.
    pub fn try_cancel(&mut self, speed: &mut MoveSpeed, tuning: &DashTuning) -> bool {
        self.finish(speed, tuning).is_some()
    }

    /// Advance the dash and its cooldown.
    pub fn update(&mut self, dt: f32, speed: &mut MoveSpeed, tuning: &DashTuning) -> DashTick {
        let mut tick = DashTick::default();

        if self.session.is_none() {
            if self.cooldown > 0.0 {
                self.cooldown = (self.cooldown - dt).max(0.0);
            }
            return tick;
        }
        let Some(session) = self.session.as_mut() else {
            return tick;
        };

        session.trail_timer -= dt;
        let interval = tuning.after_image_interval.max(f32::EPSILON);
        while session.trail_timer <= 0.0 {
            tick.trails += 1;
            session.trail_timer += interval;
        }

        session.remaining -= dt;
        if session.remaining <= 0.0 {
            self.finish(speed, tuning);
            tick.ended = Some(DashEnd::Elapsed);
        }
        tick
    }

    fn finish(&mut self, speed: &mut MoveSpeed, tuning: &DashTuning) -> Option<DashSession> {
        let session = self.session.take()?;
        speed.0 = session.original_move_speed;
        self.cooldown = tuning.cooldown;
        Some(session)
    }
}

/// A fading copy of the player's sprite left behind by a dash.
#[derive(Component, Debug, Clone)]
pub struct AfterImage {
    elapsed: f32,
    lifetime: f32,
    start_alpha: f32,
}

impl AfterImage {
    pub fn new(lifetime: f32, start_alpha: f32) -> Self {
        Self {
            elapsed: 0.0,
            lifetime: lifetime.max(f32::EPSILON),
            start_alpha,
        }
    }

    pub fn alpha(&self) -> f32 {
        let t = (self.elapsed / self.lifetime).clamp(0.0, 1.0);
        self.start_alpha * (1.0 - t)
    }

    /// Advance the fade. Returns true once fully transparent.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        self.elapsed >= self.lifetime
    }
}
