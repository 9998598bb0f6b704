//! Movement domain: dash input, timing, wall hits and after-images.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::RunEntity;
use crate::movement::{
    AfterImage, Dash, DashEnd, DashMode, DashTuning, GameLayer, MotionRequest, MoveSpeed,
    MovementInput, MovementState, Player, PlayerStateMachine, PlayerTuning, WallOrientation,
    dash_direction, exit_velocity, rebound_velocity,
};
use crate::sprites::RenderLayer;

/// Dash key starts a dash, or cancels the one in flight.
pub(crate) fn handle_dash_input(
    input: Res<MovementInput>,
    tuning: Res<DashTuning>,
    player_tuning: Res<PlayerTuning>,
    mut query: Query<
        (
            &MovementState,
            &WallOrientation,
            &LinearVelocity,
            &mut Dash,
            &mut PlayerStateMachine,
            &mut MoveSpeed,
            &mut MotionRequest,
        ),
        With<Player>,
    >,
) {
    if !input.dash_just_pressed {
        return;
    }

    for (state, orientation, velocity, mut dash, mut machine, mut speed, mut motion) in &mut query {
        let locomotion = orientation.current().locomotion_input(input.axis);

        if dash.is_dashing() {
            if !dash.try_cancel(&mut speed, &tuning) {
                continue;
            }
            if tuning.mode == DashMode::VelocityOverride {
                motion.set_velocity =
                    Some(exit_velocity(velocity.0, orientation.current(), &tuning));
            }
            finish_dash(&mut machine, locomotion, &player_tuning, DashEnd::Cancelled);
            continue;
        }

        if !machine.can_dash() || !dash.ready() {
            continue;
        }

        let direction = dash_direction(input.axis, state.facing, orientation.current());
        if dash.try_start(direction, &mut speed, &tuning) {
            machine.begin_dash();
            debug!("Dash started: direction={:?}", direction);
        }
    }
}

/// Advance dash timers, end elapsed dashes and drop after-images.
pub(crate) fn tick_dash(
    mut commands: Commands,
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<DashTuning>,
    player_tuning: Res<PlayerTuning>,
    mut query: Query<
        (
            &Transform,
            &Sprite,
            &WallOrientation,
            &mut Dash,
            &mut PlayerStateMachine,
            &mut MoveSpeed,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (transform, sprite, orientation, mut dash, mut machine, mut speed) in &mut query {
        let tick = dash.update(dt, &mut speed, &tuning);

        for _ in 0..tick.trails {
            spawn_after_image(&mut commands, transform, sprite, &tuning);
        }

        if let Some(reason) = tick.ended {
            let locomotion = orientation.current().locomotion_input(input.axis);
            finish_dash(&mut machine, locomotion, &player_tuning, reason);
        }
    }
}

/// Velocity-override dashes stop at walls and bounce off the surface.
pub(crate) fn probe_dash_walls(
    spatial_query: SpatialQuery,
    input: Res<MovementInput>,
    tuning: Res<DashTuning>,
    player_tuning: Res<PlayerTuning>,
    mut query: Query<
        (
            &Transform,
            &WallOrientation,
            &mut Dash,
            &mut PlayerStateMachine,
            &mut MoveSpeed,
            &mut MotionRequest,
        ),
        With<Player>,
    >,
) {
    if tuning.mode != DashMode::VelocityOverride {
        return;
    }
    let filter = SpatialQueryFilter::from_mask([GameLayer::Ground, GameLayer::Wall]);
    let reach = player_tuning.height * 0.5 + tuning.wall_probe_distance;

    for (transform, orientation, mut dash, mut machine, mut speed, mut motion) in &mut query {
        let Some(session) = dash.session() else {
            continue;
        };
        let Ok(direction) = Dir2::new(session.direction) else {
            continue;
        };

        let Some(hit) = spatial_query.cast_ray(
            transform.translation.truncate(),
            direction,
            reach,
            true,
            &filter,
        ) else {
            continue;
        };

        motion.set_velocity = Some(rebound_velocity(hit.normal, &tuning));
        dash.try_cancel(&mut speed, &tuning);
        let locomotion = orientation.current().locomotion_input(input.axis);
        debug!("Dash hit wall at distance {:.1}", hit.distance);
        finish_dash(&mut machine, locomotion, &player_tuning, DashEnd::HitWall);
    }
}

fn finish_dash(
    machine: &mut PlayerStateMachine,
    locomotion: f32,
    tuning: &PlayerTuning,
    reason: DashEnd,
) {
    let state = machine.end_dash(locomotion, tuning);
    debug!("Dash ended: {:?} -> {:?}", reason, state);
}

fn spawn_after_image(
    commands: &mut Commands,
    transform: &Transform,
    sprite: &Sprite,
    tuning: &DashTuning,
) {
    let mut ghost = sprite.clone();
    ghost.color = ghost.color.with_alpha(tuning.after_image_alpha);

    let mut ghost_transform = *transform;
    ghost_transform.translation.z = RenderLayer::AfterImage.z();

    commands.spawn((
        RunEntity,
        AfterImage::new(tuning.after_image_lifetime, tuning.after_image_alpha),
        ghost,
        ghost_transform,
    ));
}

/// Each after-image fades on its own clock and removes itself when invisible.
pub(crate) fn fade_after_images(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut AfterImage, &mut Sprite)>,
) {
    let dt = time.delta_secs();

    for (entity, mut image, mut sprite) in &mut query {
        if image.tick(dt) {
            commands.entity(entity).despawn();
        } else {
            sprite.color.set_alpha(image.alpha());
        }
    }
}
