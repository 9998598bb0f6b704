//! Movement domain: ground probing and wall sensing systems.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::{
    GameLayer, MovementState, MovementTuning, Player, PlayerState, PlayerStateMachine,
    PlayerTuning, WallChange, WallDirection, WallOrientation, WallSurface, WallTuning,
};

/// World-space half extents of the body. The body is rotated a quarter turn
/// while standing on a side wall.
fn body_half_extents(size: Vec2, wall: WallDirection) -> Vec2 {
    if wall.is_side() {
        Vec2::new(size.y, size.x) * 0.5
    } else {
        size * 0.5
    }
}

fn apply_wall_change(change: WallChange, transform: &mut Transform) {
    transform.rotation = Quat::from_rotation_z(change.rotation);
    debug!(
        "Wall {:?} -> {:?}: gravity={:?}, rotation={:.2}",
        change.from, change.to, change.gravity, change.rotation
    );
}

/// Contact strategy: tagged surfaces reported by collision events.
pub(crate) fn sense_walls_contact(
    time: Res<Time>,
    tuning: Res<WallTuning>,
    mut started: MessageReader<CollisionStart>,
    mut ended: MessageReader<CollisionEnd>,
    surfaces: Query<&WallSurface>,
    mut players: Query<
        (
            Entity,
            &PlayerStateMachine,
            &mut WallOrientation,
            &mut Transform,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();
    let Ok((player, machine, mut orientation, mut transform)) = players.single_mut() else {
        return;
    };

    orientation.tick(dt);

    let airborne = matches!(
        machine.current(),
        PlayerState::Jumping | PlayerState::Dash
    );

    for event in started.read() {
        let other = if event.collider1 == player {
            event.collider2
        } else if event.collider2 == player {
            event.collider1
        } else {
            continue;
        };
        let Ok(surface) = surfaces.get(other) else {
            continue;
        };
        if tuning.attach_only_airborne && !airborne {
            continue;
        }
        if let Some(change) = orientation.observe(surface.0, tuning.debounce_seconds) {
            apply_wall_change(change, &mut transform);
        }
    }

    for event in ended.read() {
        let other = if event.collider1 == player {
            event.collider2
        } else if event.collider2 == player {
            event.collider1
        } else {
            continue;
        };
        let Ok(surface) = surfaces.get(other) else {
            continue;
        };
        if let Some(change) = orientation.release(surface.0) {
            apply_wall_change(change, &mut transform);
        }
    }
}

/// Proximity strategy: four short axis-aligned rays every frame.
pub(crate) fn sense_walls_proximity(
    spatial_query: SpatialQuery,
    tuning: Res<WallTuning>,
    player_tuning: Res<PlayerTuning>,
    mut players: Query<(&mut WallOrientation, &mut Transform), With<Player>>,
) {
    let filter = SpatialQueryFilter::from_mask([GameLayer::Ground, GameLayer::Wall]);

    for (mut orientation, mut transform) in &mut players {
        let origin = transform.translation.truncate();
        let half = body_half_extents(player_tuning.size(), orientation.current());
        let reach_x = half.x + tuning.probe_distance;
        let reach_y = half.y + tuning.probe_distance;

        let probe = |direction: Dir2, reach: f32| {
            spatial_query
                .cast_ray(origin, direction, reach, true, &filter)
                .is_some()
        };

        let candidate = WallDirection::from_probe_hits(
            probe(Dir2::NEG_X, reach_x),
            probe(Dir2::X, reach_x),
            probe(Dir2::Y, reach_y),
            probe(Dir2::NEG_Y, reach_y),
        );

        if let Some(change) = orientation.observe(candidate, 0.0) {
            apply_wall_change(change, &mut transform);
        }
    }
}

/// Cast a short ray along the current gravity to find the floor under the
/// player's feet, whichever wall that floor is.
pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    player_tuning: Res<PlayerTuning>,
    mut query: Query<(&Transform, &WallOrientation, &mut MovementState), With<Player>>,
) {
    let ground_filter = SpatialQueryFilter::from_mask([GameLayer::Ground, GameLayer::Wall]);

    for (transform, orientation, mut state) in &mut query {
        let was_grounded = state.grounded;
        let down = Dir2::new(orientation.gravity()).unwrap_or(Dir2::NEG_Y);
        let reach = player_tuning.height * 0.5 + tuning.ground_probe_distance;

        state.grounded = spatial_query
            .cast_ray(
                transform.translation.truncate(),
                down,
                reach,
                true,
                &ground_filter,
            )
            .is_some();

        if state.grounded != was_grounded {
            debug!("Grounded: {} (down={:?})", state.grounded, down);
        }
    }
}
