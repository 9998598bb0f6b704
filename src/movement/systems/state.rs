//! Movement domain: driving the player state machine and publishing changes.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::{
    AttackingChanged, Facing, MotionRequest, MovementInput, MovementState, MovementTuning, Player,
    PlayerState, PlayerStateChanged, PlayerStateMachine, PlayerStrike, PlayerTuning, StateInput,
    WallOrientation,
};

pub(crate) fn drive_player_state(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<PlayerTuning>,
    movement: Res<MovementTuning>,
    mut query: Query<
        (
            Entity,
            &Transform,
            &MovementState,
            &WallOrientation,
            &mut PlayerStateMachine,
            &mut MotionRequest,
        ),
        With<Player>,
    >,
    mut strikes: MessageWriter<PlayerStrike>,
) {
    let dt = time.delta_secs();

    for (entity, transform, state, orientation, mut machine, mut motion) in &mut query {
        let wall = orientation.current();
        let locomotion = wall.locomotion_input(input.axis);

        let changed = machine.update(
            &StateInput {
                locomotion,
                jump_pressed: input.jump_just_pressed,
                attack_pressed: input.attack_just_pressed,
                grounded: state.grounded,
                wall,
            },
            &tuning,
            dt,
        );

        match changed {
            Some(PlayerState::Jumping) => {
                // Jump away from whichever surface is the floor right now
                motion.push_impulse(-orientation.gravity() * movement.jump_velocity);
            }
            Some(PlayerState::Attacking) => {
                strikes.write(PlayerStrike {
                    attacker: entity,
                    origin: transform.translation.truncate(),
                    direction: wall.tangent() * state.facing.sign(),
                    reach: tuning.attack_reach,
                    damage: tuning.attack_damage,
                });
            }
            _ => {}
        }

        motion.axis = if machine.current().accepts_locomotion() {
            locomotion.clamp(-1.0, 1.0)
        } else {
            0.0
        };
    }
}

pub(crate) fn update_facing(
    input: Res<MovementInput>,
    tuning: Res<PlayerTuning>,
    mut query: Query<(&PlayerStateMachine, &WallOrientation, &mut MovementState), With<Player>>,
) {
    for (machine, orientation, mut state) in &mut query {
        if machine.facing_locked() {
            continue;
        }

        let locomotion = orientation.current().locomotion_input(input.axis);
        if locomotion.abs() <= tuning.deadzone {
            continue;
        }
        if let Some(facing) = Facing::from_x(locomotion) {
            state.facing = facing;
        }
    }
}

/// Forward queued transitions to the animation sink.
pub(crate) fn publish_state_changes(
    mut query: Query<(Entity, &mut PlayerStateMachine), With<Player>>,
    mut state_events: MessageWriter<PlayerStateChanged>,
    mut attacking_events: MessageWriter<AttackingChanged>,
) {
    for (entity, mut machine) in &mut query {
        for (from, to) in machine.drain_transitions() {
            if to == PlayerState::Attacking {
                attacking_events.write(AttackingChanged {
                    entity,
                    attacking: true,
                });
            } else if from == PlayerState::Attacking {
                attacking_events.write(AttackingChanged {
                    entity,
                    attacking: false,
                });
            }

            state_events.write(PlayerStateChanged { entity, from, to });
        }
    }
}
