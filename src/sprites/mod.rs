//! Sprites module: render order and the player's animation sink.

pub mod animation;
pub mod layers;

use bevy::prelude::*;

pub use animation::*;
pub use layers::*;

use crate::core::FrameSet;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (receive_state_changes, tint_by_state, sync_player_facing)
                .chain()
                .in_set(FrameSet::Render),
        );
    }
}
