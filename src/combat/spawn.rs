//! Combat domain: enemy spawning helpers.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::components::{Enemy, EnemyKind, Health, MeleeAttack};
use crate::combat::registry::EnemyRegistry;
use crate::combat::resources::{EnemyProfile, EnemyTuning};
use crate::combat::steering::Steering;
use crate::core::{PIXELS_PER_UNIT, RunEntity};
use crate::movement::GameLayer;
use crate::sprites::RenderLayer;

/// Bundle for spawning enemies from their kind's profile
#[derive(Bundle)]
pub struct EnemyBundle {
    pub run_entity: RunEntity,
    pub enemy: Enemy,
    pub kind: EnemyKind,
    pub health: Health,
    pub steering: Steering,
    pub sprite: Sprite,
    pub transform: Transform,
    pub rigid_body: RigidBody,
    pub collider: Collider,
    pub collision_layers: CollisionLayers,
    pub velocity: LinearVelocity,
    pub locked_axes: LockedAxes,
    pub gravity_scale: GravityScale,
}

impl EnemyBundle {
    /// `position` is in pixels.
    pub fn new(kind: EnemyKind, position: Vec2, profile: &EnemyProfile) -> Self {
        let size = Vec2::splat(profile.size);

        Self {
            run_entity: RunEntity,
            enemy: Enemy,
            kind,
            health: Health::new(profile.health),
            steering: profile.steering,
            sprite: Sprite {
                color: kind.color(),
                custom_size: Some(size),
                ..default()
            },
            transform: Transform::from_xyz(position.x, position.y, RenderLayer::Enemy.z()),
            rigid_body: RigidBody::Dynamic,
            collider: Collider::rectangle(size.x, size.y),
            // Enemies fly through level geometry but bump into each other and the player
            collision_layers: CollisionLayers::new(
                GameLayer::Enemy,
                [GameLayer::Player, GameLayer::Enemy],
            ),
            velocity: LinearVelocity::default(),
            locked_axes: LockedAxes::ROTATION_LOCKED,
            gravity_scale: GravityScale(0.0),
        }
    }
}

/// Spawn an enemy at `position` (world units) and register it.
pub fn spawn_enemy(
    commands: &mut Commands,
    registry: &mut EnemyRegistry,
    tuning: &EnemyTuning,
    kind: EnemyKind,
    position: Vec2,
) -> Entity {
    let profile = tuning.profile(kind);
    let mut entity = commands.spawn(EnemyBundle::new(
        kind,
        position * PIXELS_PER_UNIT,
        profile,
    ));
    if let Some(melee) = profile.melee {
        entity.insert(MeleeAttack::new(melee));
    }

    let id = entity.id();
    registry.register(id, position);

    if kind == EnemyKind::Boss {
        info!("Boss spawned at {:?}", position);
    } else {
        debug!("Spawned {:?} enemy at {:?}", kind, position);
    }
    id
}
