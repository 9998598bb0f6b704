//! Combat domain: components shared by the player and enemies.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::combat::resources::MeleeProfile;

/// Health component for damageable entities
#[derive(Component, Debug, Clone)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    pub fn take_damage(&mut self, amount: f32) -> f32 {
        let actual = amount.max(0.0).min(self.current);
        self.current -= actual;
        actual
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }
}

/// Invulnerability frames - entity cannot take damage
#[derive(Component, Debug, Default)]
pub struct Invulnerable {
    pub timer: f32,
    /// Held on regardless of the timer (dev toggle).
    pub locked: bool,
}

impl Invulnerable {
    pub fn is_invulnerable(&self) -> bool {
        self.locked || self.timer > 0.0
    }
}

#[derive(Component, Debug)]
pub struct Enemy;

/// Enemy archetype chosen by the spawner.
#[derive(
    Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
pub enum EnemyKind {
    #[default]
    Melee,
    Ranged,
    Boss,
}

impl EnemyKind {
    pub fn color(&self) -> Color {
        match self {
            EnemyKind::Melee => Color::srgb(0.8, 0.3, 0.3),
            EnemyKind::Ranged => Color::srgb(0.3, 0.5, 0.8),
            EnemyKind::Boss => Color::srgb(0.9, 0.1, 0.1),
        }
    }
}

/// Close-range attack loop: approach, strike, wait out the cooldown.
#[derive(Component, Debug, Clone)]
pub struct MeleeAttack {
    pub profile: MeleeProfile,
    attack_timer: f32,
    cooldown_timer: f32,
}

impl MeleeAttack {
    pub fn new(profile: MeleeProfile) -> Self {
        Self {
            profile,
            attack_timer: 0.0,
            cooldown_timer: 0.0,
        }
    }

    pub fn is_attacking(&self) -> bool {
        self.attack_timer > 0.0
    }

    /// In range, not mid-swing and off cooldown.
    pub fn can_attack(&self, distance: f32) -> bool {
        distance <= self.profile.attack_range && !self.is_attacking() && self.cooldown_timer <= 0.0
    }

    /// Start a swing. The cooldown counts from the start of the swing.
    pub fn start(&mut self) {
        self.attack_timer = self.profile.attack_duration;
        self.cooldown_timer = self.profile.attack_cooldown;
    }

    pub fn tick(&mut self, dt: f32) {
        if self.attack_timer > 0.0 {
            self.attack_timer = (self.attack_timer - dt).max(0.0);
        }
        if self.cooldown_timer > 0.0 {
            self.cooldown_timer = (self.cooldown_timer - dt).max(0.0);
        }
    }
}
