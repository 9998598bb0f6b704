//! Core domain: game state and per-frame system ordering.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    #[default]
    Boot,
    Run,
    GameOver,
}

/// Ordering of the per-frame `Update` work. Everything but `Render` is gated
/// on `GameState::Run`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// Input, wall sensing, dash and the player state machine
    Movement,
    /// Spawning, enemy AI and damage
    Combat,
    /// Run bookkeeping and game over
    Flow,
    /// Cosmetic sinks: animation, after-images, camera
    Render,
}

/// Ordering of the work done on entering `GameState::Run`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum RunSetup {
    /// Clear the previous run and roll a new seed
    Cleanup,
    /// Reset per-run resources from the new seed
    Init,
    /// Build the arena and the player
    Spawn,
}
