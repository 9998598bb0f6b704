//! Movement domain: wall adhesion and gravity reorientation.
//!
//! A player touching a wall adopts that wall as its floor: gravity points into
//! the surface, the body rotates so its local up is opposite to gravity, and
//! locomotion input is read along the surface.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;

use crate::movement::components::Facing;

/// The surface the player currently adheres to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WallDirection {
    #[default]
    None,
    Left,
    Right,
    Top,
    Bottom,
}

impl WallDirection {
    /// Resolve proximity probe hits. Priority is left, right, top, bottom.
    pub fn from_probe_hits(left: bool, right: bool, top: bool, bottom: bool) -> Self {
        if left {
            WallDirection::Left
        } else if right {
            WallDirection::Right
        } else if top {
            WallDirection::Top
        } else if bottom {
            WallDirection::Bottom
        } else {
            WallDirection::None
        }
    }

    /// Unit gravity direction while adhering to this surface.
    /// `None` falls back to the world default.
    pub fn gravity_direction(self, default: Vec2) -> Vec2 {
        match self {
            WallDirection::None => default,
            WallDirection::Left => Vec2::NEG_X,
            WallDirection::Right => Vec2::X,
            WallDirection::Top => Vec2::Y,
            WallDirection::Bottom => Vec2::NEG_Y,
        }
    }

    /// Side walls move the player vertically.
    pub fn is_side(self) -> bool {
        matches!(self, WallDirection::Left | WallDirection::Right)
    }

    /// World axis the player runs along on this surface.
    pub fn tangent(self) -> Vec2 {
        if self.is_side() { Vec2::Y } else { Vec2::X }
    }

    /// Pick the input axis that drives locomotion on this surface.
    pub fn locomotion_input(self, axis: Vec2) -> f32 {
        if self.is_side() { axis.y } else { axis.x }
    }
}

/// Rotation (radians around Z) that aligns local up with `-gravity`.
pub fn rotation_for_gravity(gravity: Vec2) -> f32 {
    let up = -gravity.normalize_or_zero();
    if up == Vec2::ZERO {
        return 0.0;
    }
    up.y.atan2(up.x) - FRAC_PI_2
}

/// A distinct change of wall direction with the side effects to apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallChange {
    pub from: WallDirection,
    pub to: WallDirection,
    pub gravity: Vec2,
    pub rotation: f32,
}

/// Per-player wall adhesion state.
#[derive(Component, Debug, Clone)]
pub struct WallOrientation {
    current: WallDirection,
    default_gravity: Vec2,
    debounce_timer: f32,
}

impl Default for WallOrientation {
    fn default() -> Self {
        Self::new(Vec2::NEG_Y)
    }
}

impl WallOrientation {
    pub fn new(default_gravity: Vec2) -> Self {
        Self {
            current: WallDirection::None,
            default_gravity: default_gravity.normalize_or_zero(),
            debounce_timer: 0.0,
        }
    }

    pub fn current(&self) -> WallDirection {
        self.current
    }

    /// Unit gravity direction for the current surface.
    pub fn gravity(&self) -> Vec2 {
        self.current.gravity_direction(self.default_gravity)
    }

    /// Whether the rotated sprite has to be mirrored to look along `facing`.
    /// On the left wall and the ceiling the body's local +X points against
    /// the surface tangent.
    pub fn sprite_flip(&self, facing: Facing) -> bool {
        let local_x = Vec2::from_angle(rotation_for_gravity(self.gravity()));
        local_x.dot(self.current.tangent() * facing.sign()) < 0.0
    }

    pub fn is_debouncing(&self) -> bool {
        self.debounce_timer > 0.0
    }

    pub fn tick(&mut self, dt: f32) {
        if self.debounce_timer > 0.0 {
            self.debounce_timer = (self.debounce_timer - dt).max(0.0);
        }
    }

    /// Propose a new surface. Returns the change only when the direction
    /// actually differs and no debounce window is running. `debounce` arms
    /// the window after an accepted change (pass 0 for proximity sensing).
    pub fn observe(&mut self, candidate: WallDirection, debounce: f32) -> Option<WallChange> {
        if candidate == self.current || self.is_debouncing() {
            return None;
        }
        self.debounce_timer = debounce.max(0.0);
        Some(self.switch_to(candidate))
    }

    /// Contact with `surface` ended. Only releases the surface currently held.
    pub fn release(&mut self, surface: WallDirection) -> Option<WallChange> {
        if surface == WallDirection::None || surface != self.current {
            return None;
        }
        Some(self.switch_to(WallDirection::None))
    }

    /// Drop adhesion immediately, ignoring the debounce window.
    pub fn reset(&mut self) -> Option<WallChange> {
        self.debounce_timer = 0.0;
        if self.current == WallDirection::None {
            return None;
        }
        Some(self.switch_to(WallDirection::None))
    }

    fn switch_to(&mut self, to: WallDirection) -> WallChange {
        let from = self.current;
        self.current = to;
        let gravity = self.gravity();
        WallChange {
            from,
            to,
            gravity,
            rotation: rotation_for_gravity(gravity),
        }
    }
}
