//! Combat domain: tests for steering, the enemy registry and the spawner.

use bevy::prelude::*;

use super::systems::strike_hits;
use super::{
    EnemyKind, EnemyRegistry, EnemyTuning, Health, Invulnerable, MIN_SEPARATION_DISTANCE,
    MeleeAttack, MeleeProfile, SpawnSchedule, SpawnerTuning, Steering, seek, separation,
};
use crate::movement::{Facing, PlayerStrike};

fn entities(count: usize) -> Vec<Entity> {
    let mut world = World::new();
    (0..count).map(|_| world.spawn_empty().id()).collect()
}

/// No neighbours.
fn alone() -> std::iter::Empty<Vec2> {
    std::iter::empty()
}

fn approx(a: Vec2, b: Vec2) -> bool {
    (a - b).length() < 1e-4
}

// -----------------------------------------------------------------------------
// Steering tests
// -----------------------------------------------------------------------------

#[test]
fn test_seek_points_at_player() {
    let direction = seek(Vec2::ZERO, Vec2::new(0.0, 10.0), 1.0);
    assert!(approx(direction, Vec2::Y));
}

#[test]
fn test_seek_stops_within_min_distance() {
    assert_eq!(seek(Vec2::ZERO, Vec2::new(0.8, 0.0), 1.0), Vec2::ZERO);
    assert_eq!(seek(Vec2::ZERO, Vec2::new(1.0, 0.0), 1.0), Vec2::ZERO);
}

#[test]
fn test_separation_clamps_close_neighbours() {
    // 0.05 apart is weighted as if 0.1 apart
    let push = separation(Vec2::ZERO, [Vec2::new(0.05, 0.0)], 1.5);
    assert!(approx(push, Vec2::new(-1.0 / MIN_SEPARATION_DISTANCE, 0.0)));
}

#[test]
fn test_separation_ignores_neighbours_outside_radius() {
    assert_eq!(separation(Vec2::ZERO, [Vec2::new(1.5, 0.0)], 1.5), Vec2::ZERO);
    assert_eq!(separation(Vec2::ZERO, [Vec2::new(4.0, 3.0)], 1.5), Vec2::ZERO);
    assert_eq!(separation(Vec2::ZERO, alone(), 1.5), Vec2::ZERO);
}

#[test]
fn test_separation_weakens_with_distance() {
    let mut previous = f32::INFINITY;
    for step in 1..150 {
        let distance = step as f32 * 0.01;
        let push = separation(Vec2::ZERO, [Vec2::new(distance, 0.0)], 1.5).length();
        assert!(push <= previous, "push grew at distance {}", distance);
        previous = push;
    }
}

#[test]
fn test_separation_averages_neighbours() {
    // Symmetric neighbours cancel out
    let push = separation(Vec2::ZERO, [Vec2::new(0.5, 0.0), Vec2::new(-0.5, 0.0)], 1.5);
    assert!(approx(push, Vec2::ZERO));

    // Two identical pushes average to one
    let single = separation(Vec2::ZERO, [Vec2::new(0.5, 0.0)], 1.5);
    let double = separation(Vec2::ZERO, [Vec2::new(0.5, 0.0), Vec2::new(0.5, 0.0)], 1.5);
    assert!(approx(single, double));
}

#[test]
fn test_velocity_heads_for_player() {
    let steering = Steering::default();

    let output = steering.compute_velocity(Vec2::ZERO, alone(), Vec2::new(10.0, 0.0));
    assert!(approx(output.velocity, Vec2::new(steering.move_speed, 0.0)));
    assert_eq!(output.facing, Some(Facing::Right));

    let output = steering.compute_velocity(Vec2::ZERO, alone(), Vec2::new(-10.0, 0.0));
    assert_eq!(output.facing, Some(Facing::Left));
}

#[test]
fn test_zero_steering_stops_agent() {
    let steering = Steering::default();

    let output = steering.compute_velocity(Vec2::ZERO, alone(), Vec2::new(0.5, 0.0));
    assert_eq!(output.velocity, Vec2::ZERO);
    assert_eq!(output.facing, None);
}

#[test]
fn test_vertical_velocity_keeps_facing() {
    let steering = Steering::default();

    let output = steering.compute_velocity(Vec2::ZERO, alone(), Vec2::new(0.0, 10.0));
    assert!(output.velocity.length() > 0.0);
    assert_eq!(output.facing, None);
}

// -----------------------------------------------------------------------------
// EnemyRegistry tests
// -----------------------------------------------------------------------------

#[test]
fn test_register_and_deregister() {
    let ids = entities(2);
    let mut registry = EnemyRegistry::default();

    assert!(registry.register(ids[0], Vec2::ZERO));
    assert!(!registry.register(ids[0], Vec2::ONE));
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.position(ids[0]), Some(Vec2::ONE));

    assert!(registry.deregister(ids[0]));
    assert!(!registry.deregister(ids[0]));
    assert!(!registry.deregister(ids[1]));
    assert!(registry.is_empty());
}

#[test]
fn test_update_position_requires_registration() {
    let ids = entities(2);
    let mut registry = EnemyRegistry::default();
    registry.register(ids[0], Vec2::ZERO);

    assert!(registry.update_position(ids[0], Vec2::new(2.0, 3.0)));
    assert!(!registry.update_position(ids[1], Vec2::ONE));
    assert!(!registry.contains(ids[1]));
    assert_eq!(registry.position(ids[0]), Some(Vec2::new(2.0, 3.0)));
}

#[test]
fn test_neighbours_exclude_self() {
    let ids = entities(3);
    let mut registry = EnemyRegistry::default();
    registry.register(ids[0], Vec2::new(0.0, 0.0));
    registry.register(ids[1], Vec2::new(1.0, 0.0));
    registry.register(ids[2], Vec2::new(2.0, 0.0));

    let mut neighbours: Vec<f32> = registry.neighbors_of(ids[1]).map(|p| p.x).collect();
    neighbours.sort_by(f32::total_cmp);
    assert_eq!(neighbours, vec![0.0, 2.0]);
}

#[test]
fn test_retain_alive_prunes_missing() {
    let ids = entities(3);
    let mut registry = EnemyRegistry::default();
    for id in &ids {
        registry.register(*id, Vec2::ZERO);
    }

    let dead = ids[1];
    assert_eq!(registry.retain_alive(|entity| entity != dead), 1);
    assert_eq!(registry.len(), 2);
    assert!(!registry.contains(dead));

    registry.clear();
    assert!(registry.is_empty());
}

// -----------------------------------------------------------------------------
// Spawner tests
// -----------------------------------------------------------------------------

#[test]
fn test_interval_ramps_linearly() {
    let tuning = SpawnerTuning::default();

    assert_eq!(tuning.interval_at(0.0), tuning.initial_interval);
    assert!((tuning.interval_at(15.0) - 1.25).abs() < 1e-5);
    assert_eq!(tuning.interval_at(30.0), tuning.min_interval);
    assert_eq!(tuning.interval_at(500.0), tuning.min_interval);
}

#[test]
fn test_interval_without_ramp_is_floor() {
    let tuning = SpawnerTuning {
        ramp_duration: 0.0,
        ..default()
    };
    assert_eq!(tuning.interval_at(0.0), tuning.min_interval);
}

#[test]
fn test_first_spawn_is_immediate() {
    let tuning = SpawnerTuning::default();
    let mut schedule = SpawnSchedule::new(&tuning, 1);

    assert_eq!(schedule.tick(0.016, Vec2::ZERO, &tuning).len(), 1);
    assert!(schedule.tick(0.016, Vec2::ZERO, &tuning).is_empty());
}

#[test]
fn test_spawns_follow_interval() {
    let tuning = SpawnerTuning::default();
    let mut schedule = SpawnSchedule::new(&tuning, 1);
    schedule.tick(0.016, Vec2::ZERO, &tuning);

    assert!(schedule.tick(1.0, Vec2::ZERO, &tuning).is_empty());
    assert_eq!(schedule.tick(1.0, Vec2::ZERO, &tuning).len(), 1);
}

#[test]
fn test_one_regular_spawn_per_tick() {
    let tuning = SpawnerTuning::default();
    let mut schedule = SpawnSchedule::new(&tuning, 1);

    // A long frame still yields a single regular enemy
    let requests = schedule.tick(10.0, Vec2::ZERO, &tuning);
    assert_eq!(requests.len(), 1);
    assert_ne!(requests[0].kind, EnemyKind::Boss);
}

#[test]
fn test_interval_reaches_floor_after_ramp() {
    let tuning = SpawnerTuning::default();
    let mut schedule = SpawnSchedule::new(&tuning, 1);

    for _ in 0..40 {
        schedule.tick(1.0, Vec2::ZERO, &tuning);
    }
    assert_eq!(schedule.current_interval(), tuning.min_interval);
    assert!((schedule.game_time() - 40.0).abs() < 1e-3);
}

#[test]
fn test_spawn_distance_within_band() {
    let tuning = SpawnerTuning::default();
    let mut schedule = SpawnSchedule::new(&tuning, 99);
    let player = Vec2::new(5.0, -3.0);

    for _ in 0..200 {
        let request = schedule.force_spawn(player, &tuning);
        let distance = request.position.distance(player);
        assert!(
            distance >= tuning.min_distance - 1e-3 && distance <= tuning.max_distance + 1e-3,
            "distance {} outside band",
            distance
        );
    }
}

#[test]
fn test_ranged_ratio_extremes() {
    let all_melee = SpawnerTuning {
        ranged_ratio: 0.0,
        ..default()
    };
    let all_ranged = SpawnerTuning {
        ranged_ratio: 1.0,
        ..default()
    };
    let mut schedule = SpawnSchedule::new(&all_melee, 3);

    for _ in 0..50 {
        assert_eq!(schedule.force_spawn(Vec2::ZERO, &all_melee).kind, EnemyKind::Melee);
        assert_eq!(schedule.force_spawn(Vec2::ZERO, &all_ranged).kind, EnemyKind::Ranged);
    }
}

#[test]
fn test_same_seed_same_spawns() {
    let tuning = SpawnerTuning::default();
    let mut a = SpawnSchedule::new(&tuning, 42);
    let mut b = SpawnSchedule::new(&tuning, 42);

    for _ in 0..20 {
        assert_eq!(
            a.force_spawn(Vec2::ZERO, &tuning),
            b.force_spawn(Vec2::ZERO, &tuning)
        );
    }
}

#[test]
fn test_boss_spawns_once_on_the_right() {
    let tuning = SpawnerTuning {
        boss_time: 5.0,
        ..default()
    };
    let mut schedule = SpawnSchedule::new(&tuning, 1);
    let player = Vec2::new(2.0, 1.0);

    let requests = schedule.tick(6.0, player, &tuning);
    let boss: Vec<_> = requests
        .iter()
        .filter(|r| r.kind == EnemyKind::Boss)
        .collect();
    assert_eq!(boss.len(), 1);
    assert_eq!(boss[0].position, player + Vec2::new(tuning.max_distance, 0.0));
    assert!(schedule.boss_spawned());

    for _ in 0..5 {
        let later = schedule.tick(6.0, player, &tuning);
        assert!(later.iter().all(|r| r.kind != EnemyKind::Boss));
    }
    assert!(schedule.force_boss(player, &tuning).is_none());
}

#[test]
fn test_forced_boss_blocks_scheduled_boss() {
    let tuning = SpawnerTuning {
        boss_time: 5.0,
        ..default()
    };
    let mut schedule = SpawnSchedule::new(&tuning, 1);

    assert!(schedule.force_boss(Vec2::ZERO, &tuning).is_some());
    let requests = schedule.tick(6.0, Vec2::ZERO, &tuning);
    assert!(requests.iter().all(|r| r.kind != EnemyKind::Boss));
}

// -----------------------------------------------------------------------------
// Health, invulnerability and melee tests
// -----------------------------------------------------------------------------

#[test]
fn test_health_clamps_at_zero() {
    let mut health = Health::new(30.0);

    assert_eq!(health.take_damage(10.0), 10.0);
    assert!(!health.is_dead());
    assert_eq!(health.take_damage(50.0), 20.0);
    assert!(health.is_dead());
    assert_eq!(health.current, 0.0);
    assert_eq!(health.take_damage(-5.0), 0.0);
}

#[test]
fn test_locked_invulnerability_ignores_timer() {
    let mut invulnerable = Invulnerable::default();
    assert!(!invulnerable.is_invulnerable());

    invulnerable.timer = 0.5;
    assert!(invulnerable.is_invulnerable());

    invulnerable.timer = 0.0;
    invulnerable.locked = true;
    assert!(invulnerable.is_invulnerable());
}

#[test]
fn test_melee_attack_cycle() {
    let mut melee = MeleeAttack::new(MeleeProfile::default());

    assert!(melee.can_attack(1.0));
    assert!(!melee.can_attack(2.0));

    melee.start();
    assert!(melee.is_attacking());
    assert!(!melee.can_attack(1.0));

    melee.tick(0.5);
    assert!(!melee.is_attacking());
    // Still cooling down
    assert!(!melee.can_attack(1.0));

    melee.tick(0.5);
    assert!(melee.can_attack(1.0));
}

#[test]
fn test_profiles_per_kind() {
    let tuning = EnemyTuning::default();

    assert!(tuning.profile(EnemyKind::Melee).melee.is_some());
    assert!(tuning.profile(EnemyKind::Ranged).melee.is_none());
    assert!(tuning.profile(EnemyKind::Boss).melee.is_some());
    assert!(tuning.profile(EnemyKind::Boss).health > tuning.profile(EnemyKind::Melee).health);
    assert!(tuning.despawn_distance > SpawnerTuning::default().max_distance);
}

// -----------------------------------------------------------------------------
// Player strike tests
// -----------------------------------------------------------------------------

fn strike(direction: Vec2) -> PlayerStrike {
    PlayerStrike {
        attacker: Entity::PLACEHOLDER,
        origin: Vec2::ZERO,
        direction,
        reach: 56.0,
        damage: 25.0,
    }
}

#[test]
fn test_strike_hits_in_front() {
    assert!(strike_hits(&strike(Vec2::X), Vec2::new(40.0, 0.0), 14.0));
    assert!(strike_hits(&strike(Vec2::X), Vec2::new(60.0, 10.0), 14.0));
}

#[test]
fn test_strike_misses_behind_and_aside() {
    assert!(!strike_hits(&strike(Vec2::X), Vec2::new(-40.0, 0.0), 14.0));
    assert!(!strike_hits(&strike(Vec2::X), Vec2::new(40.0, 60.0), 14.0));
    assert!(!strike_hits(&strike(Vec2::X), Vec2::new(100.0, 0.0), 14.0));
}

#[test]
fn test_strike_without_direction_misses() {
    assert!(!strike_hits(&strike(Vec2::ZERO), Vec2::ZERO, 14.0));
}
