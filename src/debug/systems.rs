//! Debug domain: hotkeys for spawning, invincibility and state dumps.

use bevy::prelude::*;

use crate::combat::{
    EnemyKind, EnemyRegistry, EnemyTuning, Health, Invulnerable, SpawnSchedule, SpawnerTuning,
    spawn_enemy,
};
use crate::core::{PIXELS_PER_UNIT, RunConfig, RunStats};
use crate::debug::state::{DebugSnapshot, DebugState, PlayerSnapshot};
use crate::movement::{Dash, Player, PlayerStateMachine, WallOrientation};

/// F1 drops a melee enemy this far to the player's right, in world units.
const DEBUG_SPAWN_OFFSET: f32 = 3.0;

/// F1: enemy next to the player. F2: force the boss.
pub(crate) fn handle_spawn_hotkeys(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    tuning: Res<EnemyTuning>,
    spawner_tuning: Res<SpawnerTuning>,
    mut schedule: ResMut<SpawnSchedule>,
    mut registry: ResMut<EnemyRegistry>,
    player_query: Query<&Transform, With<Player>>,
) {
    let Ok(player) = player_query.single() else {
        return;
    };
    let player_pos = player.translation.truncate() / PIXELS_PER_UNIT;

    if keyboard.just_pressed(KeyCode::F1) {
        let position = player_pos + Vec2::new(DEBUG_SPAWN_OFFSET, 0.0);
        spawn_enemy(
            &mut commands,
            &mut registry,
            &tuning,
            EnemyKind::Melee,
            position,
        );
        info!("[DEBUG] Spawned melee enemy at {:?}", position);
    }

    if keyboard.just_pressed(KeyCode::F2) {
        match schedule.force_boss(player_pos, &spawner_tuning) {
            Some(request) => {
                spawn_enemy(
                    &mut commands,
                    &mut registry,
                    &tuning,
                    request.kind,
                    request.position,
                );
                info!("[DEBUG] Forced boss spawn");
            }
            None => info!("[DEBUG] Boss already spawned this run"),
        }
    }
}

/// F4: toggle invincibility.
pub(crate) fn toggle_invincibility(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    mut query: Query<&mut Invulnerable, With<Player>>,
) {
    if !keyboard.just_pressed(KeyCode::F4) {
        return;
    }

    debug_state.invincible = !debug_state.invincible;
    for mut invuln in &mut query {
        invuln.locked = debug_state.invincible;
    }
    info!(
        "[DEBUG] Invincibility {}",
        if debug_state.invincible { "ON" } else { "OFF" }
    );
}

/// A fresh player spawns without the lock; reapply it.
pub(crate) fn keep_invincibility(
    debug_state: Res<DebugState>,
    mut query: Query<&mut Invulnerable, Added<Player>>,
) {
    for mut invuln in &mut query {
        invuln.locked = debug_state.invincible;
    }
}

/// F3: log a JSON snapshot of the spawner, registry and player.
pub(crate) fn log_snapshot(
    keyboard: Res<ButtonInput<KeyCode>>,
    run_config: Res<RunConfig>,
    stats: Res<RunStats>,
    schedule: Res<SpawnSchedule>,
    registry: Res<EnemyRegistry>,
    player_query: Query<
        (
            &Transform,
            &PlayerStateMachine,
            &WallOrientation,
            &Health,
            &Dash,
        ),
        With<Player>,
    >,
) {
    if !keyboard.just_pressed(KeyCode::F3) {
        return;
    }

    let player = player_query
        .single()
        .ok()
        .map(|(transform, machine, orientation, health, dash)| PlayerSnapshot {
            position: transform.translation.truncate().to_array(),
            state: format!("{:?}", machine.current()),
            wall: format!("{:?}", orientation.current()),
            health: health.current,
            dash_cooldown: dash.cooldown_remaining(),
        });

    let snapshot = DebugSnapshot {
        seed: run_config.seed,
        game_time: schedule.game_time(),
        spawn_interval: schedule.current_interval(),
        until_next_spawn: schedule.until_next(),
        boss_spawned: schedule.boss_spawned(),
        registered_enemies: registry.len(),
        player,
        stats: stats.clone(),
    };

    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => info!("[DEBUG] Snapshot:\n{}", json),
        Err(e) => warn!("[DEBUG] Failed to serialize snapshot: {}", e),
    }
}
