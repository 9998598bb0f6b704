//! Dev tools for fast iteration and testing.
//!
//! Hotkeys:
//! - F1 spawn a melee enemy next to the player
//! - F2 force the boss
//! - F3 log a JSON snapshot of the run
//! - F4 toggle invincibility

mod state;
mod systems;

pub use state::{DebugSnapshot, DebugState, PlayerSnapshot};

use bevy::prelude::*;

use crate::core::{FrameSet, GameState};
use crate::debug::systems::{
    handle_spawn_hotkeys, keep_invincibility, log_snapshot, toggle_invincibility,
};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        info!("Dev tools enabled: F1 enemy, F2 boss, F3 snapshot, F4 invincibility");

        app.init_resource::<DebugState>().add_systems(
            Update,
            (
                keep_invincibility,
                toggle_invincibility,
                handle_spawn_hotkeys,
                log_snapshot,
            )
                .chain()
                .in_set(FrameSet::Render)
                .run_if(in_state(GameState::Run)),
        );
    }
}
