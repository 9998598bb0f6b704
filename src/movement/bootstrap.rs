//! Movement domain: player spawn from the loaded tuning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::{Health, Invulnerable};
use crate::core::RunEntity;
use crate::movement::{
    ArenaBounds, Dash, GameLayer, MotionRequest, MoveSpeed, MovementState, MovementTuning, Player,
    PlayerStateMachine, PlayerTuning, WallOrientation,
};
use crate::sprites::{RenderLayer, StateAnimator};

/// Spawn the player standing on the arena floor.
/// Runs on entering `GameState::Run`, after the previous run was cleared.
pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    player_tuning: Res<PlayerTuning>,
    bounds: Res<ArenaBounds>,
    existing_player: Query<Entity, With<Player>>,
) {
    if !existing_player.is_empty() {
        warn!("Player already exists, skipping spawn");
        return;
    }

    let size = player_tuning.size();
    let spawn = Vec3::new(
        0.0,
        bounds.floor_y() + size.y * 0.5 + 2.0,
        RenderLayer::Player.z(),
    );

    info!(
        "Spawning player: health={}, speed={}, jump_height={:.0}",
        player_tuning.max_health,
        tuning.move_speed,
        tuning.jump_height()
    );

    commands.spawn((
        // Identity & movement
        (
            RunEntity,
            Player,
            MovementState::default(),
            MoveSpeed(tuning.move_speed),
            MotionRequest::default(),
            PlayerStateMachine::default(),
            WallOrientation::default(),
            Dash::default(),
        ),
        // Combat
        (
            Health::new(player_tuning.max_health),
            Invulnerable::default(),
        ),
        // Rendering
        (
            Sprite {
                color: StateAnimator::base_color(),
                custom_size: Some(size),
                ..default()
            },
            StateAnimator::default(),
            Transform::from_translation(spawn),
        ),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(size.x, size.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            // Gravity is applied by hand along the current wall
            GravityScale(0.0),
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(
                GameLayer::Player,
                [GameLayer::Ground, GameLayer::Wall, GameLayer::Enemy],
            ),
        ),
    ));
}
