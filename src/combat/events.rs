//! Combat domain: damage and death messages between the player and enemies.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Melee enemies target the player, player strikes target enemies.
#[derive(Debug)]
pub struct DamageEvent {
    pub source: Entity,
    pub target: Entity,
    pub amount: f32,
}

impl Message for DamageEvent {}

/// Health reached zero. Enemies are despawned; the player only goes `Dead`.
#[derive(Debug)]
pub struct DeathEvent {
    pub entity: Entity,
}

impl Message for DeathEvent {}
