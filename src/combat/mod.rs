//! Combat domain: enemies, steering, spawning and damage.

mod components;
mod events;
mod registry;
mod resources;
mod spawn;
mod spawner;
mod steering;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{Enemy, EnemyKind, Health, Invulnerable, MeleeAttack};
pub use events::{DamageEvent, DeathEvent};
pub use registry::EnemyRegistry;
pub use resources::{EnemyProfile, EnemyTuning, MeleeProfile};
pub use spawn::{EnemyBundle, spawn_enemy};
pub use spawner::{SpawnRequest, SpawnSchedule, SpawnerTuning};
pub use steering::{MIN_SEPARATION_DISTANCE, Steering, SteeringOutput, separation, seek};

use bevy::prelude::*;

use crate::combat::systems::{
    apply_damage, despawn_distant_enemies, process_deaths, reset_combat, resolve_player_strikes,
    run_spawner, steer_enemies, sync_registry, tick_invulnerability, update_melee_attacks,
};
use crate::core::{FrameSet, GameState, RunSetup};

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EnemyTuning>()
            .init_resource::<SpawnerTuning>()
            .init_resource::<SpawnSchedule>()
            .init_resource::<EnemyRegistry>()
            .add_message::<DamageEvent>()
            .add_message::<DeathEvent>()
            .add_systems(OnEnter(GameState::Run), reset_combat.in_set(RunSetup::Init))
            .add_systems(
                Update,
                (
                    sync_registry,
                    tick_invulnerability,
                    run_spawner,
                    resolve_player_strikes,
                    update_melee_attacks,
                    apply_damage,
                    process_deaths,
                    despawn_distant_enemies,
                )
                    .chain()
                    .in_set(FrameSet::Combat),
            )
            .add_systems(
                FixedUpdate,
                steer_enemies.run_if(in_state(GameState::Run)),
            );
    }
}
