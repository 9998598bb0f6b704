//! Movement domain: messages published by the player logic.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::state_machine::PlayerState;

/// Sent on every player state change. Feeds the animation layer.
#[derive(Debug)]
pub struct PlayerStateChanged {
    pub entity: Entity,
    pub from: PlayerState,
    pub to: PlayerState,
}

impl PlayerStateChanged {
    pub fn index(&self) -> i32 {
        self.to.index()
    }
}

impl Message for PlayerStateChanged {}

/// Toggles the animator's "attacking" flag.
#[derive(Debug)]
pub struct AttackingChanged {
    pub entity: Entity,
    pub attacking: bool,
}

impl Message for AttackingChanged {}

/// A player melee strike, resolved against enemies by the combat domain.
#[derive(Debug)]
pub struct PlayerStrike {
    pub attacker: Entity,
    pub origin: Vec2,
    pub direction: Vec2,
    pub reach: f32,
    pub damage: f32,
}

impl Message for PlayerStrike {}
