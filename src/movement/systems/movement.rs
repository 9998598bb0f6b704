//! Movement domain: fixed-step application of requested motion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    Dash, DashMode, DashTuning, MotionRequest, MoveSpeed, MovementTuning, Player, WallOrientation,
};

/// Physics pass for the player. Gravity is applied here and only here; the
/// body itself carries `GravityScale(0.0)`. A forced velocity replaces
/// locomotion for the tick it is applied.
pub(crate) fn apply_player_motion(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    dash_tuning: Res<DashTuning>,
    mut query: Query<
        (
            &mut MotionRequest,
            &MoveSpeed,
            &WallOrientation,
            &Dash,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (mut motion, speed, orientation, dash, mut velocity) in &mut query {
        let gravity = orientation.gravity() * tuning.gravity * dt;

        let pinned = match dash.session() {
            Some(session) if dash_tuning.mode == DashMode::VelocityOverride => {
                Some(session.direction * dash_tuning.dash_speed)
            }
            _ => None,
        };

        if let Some(dash_velocity) = pinned {
            motion.set_velocity = None;
            velocity.0 = dash_velocity;
        } else if let Some(forced) = motion.set_velocity.take() {
            // Rebounds and dash exits own the velocity for this tick
            velocity.0 = forced + gravity;
        } else {
            let tangent = orientation.current().tangent();
            // Keep the component across the surface, drive the one along it
            let across = velocity.0 - velocity.0.dot(tangent) * tangent;
            velocity.0 = tangent * motion.axis * speed.0 + across + gravity;
        }

        velocity.0 += std::mem::take(&mut motion.impulse);
    }
}
