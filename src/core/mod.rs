//! Core domain: run flow plugin wiring and public exports.

mod resources;
mod state;
mod systems;

#[cfg(test)]
mod tests;

pub use resources::{PIXELS_PER_UNIT, RunConfig, RunEntity, RunStats};
pub use state::{FrameSet, GameState, RunSetup};

use bevy::prelude::*;

use crate::core::systems::{
    cleanup_run_entities, detect_player_death, follow_player, freeze_bodies, initialize_run,
    restart_on_key, setup_camera, tick_run_clock, transition_to_run,
};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<RunConfig>()
            .init_resource::<RunStats>()
            .configure_sets(
                Update,
                (
                    FrameSet::Movement.run_if(in_state(GameState::Run)),
                    FrameSet::Combat.run_if(in_state(GameState::Run)),
                    FrameSet::Flow.run_if(in_state(GameState::Run)),
                    FrameSet::Render,
                )
                    .chain(),
            )
            .configure_sets(
                OnEnter(GameState::Run),
                (RunSetup::Cleanup, RunSetup::Init, RunSetup::Spawn).chain(),
            )
            .add_systems(Startup, (setup_camera, transition_to_run))
            .add_systems(
                OnEnter(GameState::Run),
                (cleanup_run_entities, initialize_run)
                    .chain()
                    .in_set(RunSetup::Cleanup),
            )
            .add_systems(
                Update,
                (tick_run_clock, detect_player_death)
                    .chain()
                    .in_set(FrameSet::Flow),
            )
            .add_systems(Update, follow_player.in_set(FrameSet::Render))
            .add_systems(OnEnter(GameState::GameOver), freeze_bodies)
            .add_systems(
                Update,
                restart_on_key.run_if(in_state(GameState::GameOver)),
            );
    }
}
