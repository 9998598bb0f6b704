//! Core domain: run flow systems and camera.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::combat::Enemy;
use crate::core::resources::{RunConfig, RunEntity, RunStats};
use crate::core::state::GameState;
use crate::movement::{Player, PlayerState, PlayerStateChanged};

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Content is loaded during plugin build, so boot goes straight to the run.
pub(crate) fn transition_to_run(mut game_state: ResMut<NextState<GameState>>) {
    game_state.set(GameState::Run);
}

pub(crate) fn cleanup_run_entities(mut commands: Commands, query: Query<Entity, With<RunEntity>>) {
    let mut count = 0;
    for entity in &query {
        commands.entity(entity).despawn();
        count += 1;
    }
    if count > 0 {
        debug!("Cleared {} entities from the previous run", count);
    }
}

/// Initialize a new run with a fresh seed
pub(crate) fn initialize_run(mut run_config: ResMut<RunConfig>, mut stats: ResMut<RunStats>) {
    let seed = run_config.reseed();
    stats.reset();
    info!("Starting new run with seed: {}", seed);
}

pub(crate) fn tick_run_clock(time: Res<Time>, mut stats: ResMut<RunStats>) {
    stats.elapsed += time.delta_secs();
}

/// The run ends when the player enters `Dead`.
pub(crate) fn detect_player_death(
    mut events: MessageReader<PlayerStateChanged>,
    stats: Res<RunStats>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    for event in events.read() {
        if event.to != PlayerState::Dead {
            continue;
        }
        info!(
            "Game over: survived {:.1}s, {} kills, {} bosses",
            stats.elapsed, stats.kills, stats.bosses_defeated
        );
        game_state.set(GameState::GameOver);
    }
}

/// Stop every moving body when the run ends. Steering and locomotion are
/// gated on `GameState::Run`, so nothing sets the velocities again.
pub(crate) fn freeze_bodies(
    mut query: Query<&mut LinearVelocity, Or<(With<Player>, With<Enemy>)>>,
) {
    for mut velocity in &mut query {
        velocity.0 = Vec2::ZERO;
    }
}

pub(crate) fn restart_on_key(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    if keyboard.just_pressed(KeyCode::KeyR) || keyboard.just_pressed(KeyCode::Enter) {
        info!("Restarting run");
        game_state.set(GameState::Run);
    }
}

pub(crate) fn follow_player(
    time: Res<Time>,
    players: Query<&Transform, (With<Player>, Without<Camera2d>)>,
    mut cameras: Query<&mut Transform, With<Camera2d>>,
) {
    let Ok(player) = players.single() else {
        return;
    };
    let Ok(mut camera) = cameras.single_mut() else {
        return;
    };

    let target = player.translation.truncate();
    let current = camera.translation.truncate();
    let t = (time.delta_secs() * 6.0).min(1.0);
    let next = current.lerp(target, t);
    camera.translation.x = next.x;
    camera.translation.y = next.y;
}
