//! Core domain: tests for run flow systems.

use avian2d::prelude::LinearVelocity;
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use super::systems::freeze_bodies;
use crate::combat::Enemy;
use crate::movement::Player;

// -----------------------------------------------------------------------------
// Game over tests
// -----------------------------------------------------------------------------

#[test]
fn test_game_over_stops_player_and_enemies() {
    let mut world = World::new();
    let player = world
        .spawn((Player, LinearVelocity(Vec2::new(120.0, -40.0))))
        .id();
    let enemy = world.spawn((Enemy, LinearVelocity(Vec2::new(-3.0, 2.0)))).id();
    let debris = world.spawn(LinearVelocity(Vec2::new(5.0, 0.0))).id();

    world.run_system_once(freeze_bodies).unwrap();

    assert_eq!(world.get::<LinearVelocity>(player).unwrap().0, Vec2::ZERO);
    assert_eq!(world.get::<LinearVelocity>(enemy).unwrap().0, Vec2::ZERO);
    assert_eq!(
        world.get::<LinearVelocity>(debris).unwrap().0,
        Vec2::new(5.0, 0.0)
    );
}
