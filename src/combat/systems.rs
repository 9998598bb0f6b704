//! Combat domain: spawning, enemy AI, damage and cleanup.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::components::{Enemy, EnemyKind, Health, Invulnerable, MeleeAttack};
use crate::combat::events::{DamageEvent, DeathEvent};
use crate::combat::registry::EnemyRegistry;
use crate::combat::resources::EnemyTuning;
use crate::combat::spawn::spawn_enemy;
use crate::combat::spawner::{SpawnSchedule, SpawnerTuning};
use crate::combat::steering::Steering;
use crate::core::{PIXELS_PER_UNIT, RunConfig, RunStats};
use crate::movement::{Player, PlayerStateMachine, PlayerStrike, PlayerTuning};

/// Fresh registry and spawn schedule for a new run.
pub(crate) fn reset_combat(
    mut registry: ResMut<EnemyRegistry>,
    mut schedule: ResMut<SpawnSchedule>,
    tuning: Res<SpawnerTuning>,
    run_config: Res<RunConfig>,
) {
    registry.clear();
    *schedule = SpawnSchedule::new(&tuning, run_config.seed);
}

/// Prune despawned agents, then refresh positions of the live ones.
pub(crate) fn sync_registry(
    mut registry: ResMut<EnemyRegistry>,
    enemies: Query<(Entity, &Transform), With<Enemy>>,
) {
    let pruned = registry.retain_alive(|entity| enemies.contains(entity));
    if pruned > 0 {
        debug!("Pruned {} stale registry entries", pruned);
    }

    for (entity, transform) in &enemies {
        registry.update_position(entity, transform.translation.truncate() / PIXELS_PER_UNIT);
    }
}

pub(crate) fn tick_invulnerability(time: Res<Time>, mut query: Query<&mut Invulnerable>) {
    let dt = time.delta_secs();
    for mut invuln in &mut query {
        if invuln.timer > 0.0 {
            invuln.timer = (invuln.timer - dt).max(0.0);
        }
    }
}

pub(crate) fn run_spawner(
    mut commands: Commands,
    time: Res<Time>,
    tuning: Res<SpawnerTuning>,
    enemy_tuning: Res<EnemyTuning>,
    mut schedule: ResMut<SpawnSchedule>,
    mut registry: ResMut<EnemyRegistry>,
    mut stats: ResMut<RunStats>,
    player_query: Query<&Transform, With<Player>>,
) {
    let Ok(player) = player_query.single() else {
        return;
    };
    let player_pos = player.translation.truncate() / PIXELS_PER_UNIT;

    for request in schedule.tick(time.delta_secs(), player_pos, &tuning) {
        spawn_enemy(
            &mut commands,
            &mut registry,
            &enemy_tuning,
            request.kind,
            request.position,
        );
        stats.spawned += 1;
    }
}

/// Seek and separation, applied to the physics velocity.
pub(crate) fn steer_enemies(
    registry: Res<EnemyRegistry>,
    player_query: Query<&Transform, With<Player>>,
    mut enemies: Query<
        (
            Entity,
            &Transform,
            &Steering,
            Option<&MeleeAttack>,
            &mut LinearVelocity,
            &mut Sprite,
        ),
        (With<Enemy>, Without<Player>),
    >,
) {
    let Ok(player) = player_query.single() else {
        return;
    };
    let player_pos = player.translation.truncate() / PIXELS_PER_UNIT;

    for (entity, transform, steering, melee, mut velocity, mut sprite) in &mut enemies {
        // Rooted while swinging
        if melee.is_some_and(|attack| attack.is_attacking()) {
            velocity.0 = Vec2::ZERO;
            continue;
        }

        let position = transform.translation.truncate() / PIXELS_PER_UNIT;
        let output = steering.compute_velocity(position, registry.neighbors_of(entity), player_pos);

        velocity.0 = output.velocity * PIXELS_PER_UNIT;
        if let Some(facing) = output.facing {
            sprite.flip_x = facing.flip_x();
        }
    }
}

pub(crate) fn update_melee_attacks(
    time: Res<Time>,
    player_query: Query<(Entity, &Transform), With<Player>>,
    mut enemies: Query<
        (Entity, &Transform, &mut MeleeAttack, &mut Sprite),
        (With<Enemy>, Without<Player>),
    >,
    mut damage_events: MessageWriter<DamageEvent>,
) {
    let dt = time.delta_secs();
    let Ok((player, player_transform)) = player_query.single() else {
        return;
    };
    let player_pos = player_transform.translation.truncate();

    for (entity, transform, mut attack, mut sprite) in &mut enemies {
        attack.tick(dt);

        let to_player = player_pos - transform.translation.truncate();
        sprite.flip_x = to_player.x < 0.0;

        if attack.can_attack(to_player.length() / PIXELS_PER_UNIT) {
            attack.start();
            damage_events.write(DamageEvent {
                source: entity,
                target: player,
                amount: attack.profile.damage,
            });
        }
    }
}

/// Whether a strike from `origin` along `direction` reaches a target of
/// `radius` centred at `target`. Positions in pixels.
pub(crate) fn strike_hits(strike: &PlayerStrike, target: Vec2, radius: f32) -> bool {
    let direction = strike.direction.normalize_or_zero();
    if direction == Vec2::ZERO {
        return false;
    }

    let offset = target - strike.origin;
    let along = offset.dot(direction);
    let across = (offset - direction * along).length();

    along >= -radius && along <= strike.reach + radius && across <= strike.reach * 0.5 + radius
}

pub(crate) fn resolve_player_strikes(
    mut strikes: MessageReader<PlayerStrike>,
    enemies: Query<(Entity, &Transform, &Sprite), With<Enemy>>,
    mut damage_events: MessageWriter<DamageEvent>,
) {
    for strike in strikes.read() {
        let mut hits = 0;
        for (entity, transform, sprite) in &enemies {
            let radius = sprite.custom_size.map_or(0.0, |size| size.max_element() * 0.5);
            if !strike_hits(strike, transform.translation.truncate(), radius) {
                continue;
            }
            damage_events.write(DamageEvent {
                source: strike.attacker,
                target: entity,
                amount: strike.damage,
            });
            hits += 1;
        }
        if hits > 0 {
            debug!("Player strike hit {} enemies", hits);
        }
    }
}

pub(crate) fn apply_damage(
    mut damage_events: MessageReader<DamageEvent>,
    mut death_events: MessageWriter<DeathEvent>,
    player_tuning: Res<PlayerTuning>,
    mut query: Query<(
        &mut Health,
        Option<&mut Invulnerable>,
        Option<&mut PlayerStateMachine>,
    )>,
) {
    for event in damage_events.read() {
        let Ok((mut health, invuln, machine)) = query.get_mut(event.target) else {
            continue;
        };
        if health.is_dead() || invuln.as_ref().is_some_and(|i| i.is_invulnerable()) {
            continue;
        }

        health.take_damage(event.amount);
        if let Some(mut invuln) = invuln {
            invuln.timer = player_tuning.invulnerability_time;
        }

        if let Some(mut machine) = machine {
            if health.is_dead() {
                machine.kill();
            } else {
                machine.damage(player_tuning.damaged_duration);
            }
            debug!(
                "Player took {} damage, health {}/{}",
                event.amount, health.current, health.max
            );
        }

        if health.is_dead() {
            death_events.write(DeathEvent {
                entity: event.target,
            });
        }
    }
}

pub(crate) fn process_deaths(
    mut commands: Commands,
    mut death_events: MessageReader<DeathEvent>,
    mut registry: ResMut<EnemyRegistry>,
    mut stats: ResMut<RunStats>,
    enemy_query: Query<&EnemyKind, With<Enemy>>,
) {
    for event in death_events.read() {
        let Ok(kind) = enemy_query.get(event.entity) else {
            continue;
        };

        registry.deregister(event.entity);
        stats.kills += 1;
        if *kind == EnemyKind::Boss {
            stats.bosses_defeated += 1;
            info!("Boss defeated");
        }
        commands.entity(event.entity).despawn();
    }
}

pub(crate) fn despawn_distant_enemies(
    mut commands: Commands,
    tuning: Res<EnemyTuning>,
    mut registry: ResMut<EnemyRegistry>,
    player_query: Query<&Transform, With<Player>>,
    enemies: Query<(Entity, &Transform), (With<Enemy>, Without<Player>)>,
) {
    let Ok(player) = player_query.single() else {
        return;
    };
    let player_pos = player.translation.truncate();
    let limit = tuning.despawn_distance * PIXELS_PER_UNIT;

    for (entity, transform) in &enemies {
        if transform.translation.truncate().distance(player_pos) <= limit {
            continue;
        }
        registry.deregister(entity);
        commands.entity(entity).despawn();
        debug!("Despawned distant enemy {:?}", entity);
    }
}
