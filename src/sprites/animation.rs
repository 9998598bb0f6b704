//! Animation sink for the player state machine.
//!
//! The player is a flat-colored quad, so "animation" is a per-state tint.
//! The state index and attacking flag are kept on the component for anything
//! that wants to drive real clips later.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::{
    AttackingChanged, MovementState, Player, PlayerState, PlayerStateChanged, WallOrientation,
};

#[derive(Component, Debug, Default)]
pub struct StateAnimator {
    pub state: PlayerState,
    /// Integer form of `state`.
    pub index: i32,
    pub attacking: bool,
}

impl StateAnimator {
    pub fn base_color() -> Color {
        Color::srgb(0.9, 0.9, 0.9)
    }

    pub fn color(&self) -> Color {
        if self.attacking {
            return Color::srgb(1.0, 0.75, 0.3);
        }
        match self.state {
            PlayerState::Idle => Self::base_color(),
            PlayerState::Running => Color::srgb(0.95, 0.95, 0.8),
            PlayerState::Jumping => Color::srgb(0.7, 0.85, 1.0),
            PlayerState::Attacking => Color::srgb(1.0, 0.75, 0.3),
            PlayerState::Damaged => Color::srgb(1.0, 0.45, 0.45),
            PlayerState::Dash => Color::srgb(0.5, 1.0, 1.0),
            PlayerState::Dead => Color::srgb(0.35, 0.35, 0.35),
        }
    }
}

pub(crate) fn receive_state_changes(
    mut state_events: MessageReader<PlayerStateChanged>,
    mut attacking_events: MessageReader<AttackingChanged>,
    mut query: Query<&mut StateAnimator>,
) {
    for event in state_events.read() {
        if let Ok(mut animator) = query.get_mut(event.entity) {
            animator.state = event.to;
            animator.index = event.index();
        }
    }
    for event in attacking_events.read() {
        if let Ok(mut animator) = query.get_mut(event.entity) {
            animator.attacking = event.attacking;
        }
    }
}

pub(crate) fn tint_by_state(
    mut query: Query<(&StateAnimator, &mut Sprite), Changed<StateAnimator>>,
) {
    for (animator, mut sprite) in &mut query {
        sprite.color = animator.color();
    }
}

/// Horizontal flip follows facing along the current wall.
pub(crate) fn sync_player_facing(
    mut query: Query<(&MovementState, &WallOrientation, &mut Sprite), With<Player>>,
) {
    for (state, orientation, mut sprite) in &mut query {
        let flip = orientation.sprite_flip(state.facing);
        if sprite.flip_x != flip {
            sprite.flip_x = flip;
        }
    }
}
