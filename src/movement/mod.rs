//! Movement domain: player locomotion, wall adhesion, dash and the player
//! state machine.

mod arena;
mod bootstrap;
mod components;
mod dash;
mod events;
mod resources;
mod state_machine;
mod systems;
mod wall;


pub use arena::ArenaBounds;
pub use components::{
    Facing, GameLayer, MotionRequest, MoveSpeed, MovementState, Player, WallSurface,
};
pub use dash::{
    AfterImage, Dash, DashEnd, DashMode, DashSession, DashTick, DashTuning, dash_direction,
    exit_velocity, rebound_velocity,
};
pub use events::{AttackingChanged, PlayerStateChanged, PlayerStrike};
pub use resources::{MovementInput, MovementTuning, PlayerTuning, WallSensing, WallTuning};
pub use state_machine::{PlayerState, PlayerStateMachine, StateInput};
pub use wall::{WallChange, WallDirection, WallOrientation, rotation_for_gravity};

use bevy::prelude::*;

use crate::core::{FrameSet, GameState, RunSetup};
use crate::movement::arena::spawn_arena;
use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{
    apply_player_motion, detect_ground, drive_player_state, fade_after_images, handle_dash_input,
    probe_dash_walls, publish_state_changes, read_input, sense_walls_contact,
    sense_walls_proximity, tick_dash, update_facing,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<PlayerTuning>()
            .init_resource::<WallTuning>()
            .init_resource::<DashTuning>()
            .init_resource::<MovementInput>()
            .init_resource::<ArenaBounds>()
            .add_message::<PlayerStateChanged>()
            .add_message::<AttackingChanged>()
            .add_message::<PlayerStrike>()
            .add_systems(
                OnEnter(GameState::Run),
                (spawn_arena, spawn_player).chain().in_set(RunSetup::Spawn),
            )
            .add_systems(
                Update,
                (
                    read_input,
                    sense_walls_contact.run_if(contact_sensing),
                    sense_walls_proximity.run_if(proximity_sensing),
                    detect_ground,
                    handle_dash_input,
                    probe_dash_walls,
                    tick_dash,
                    drive_player_state,
                    update_facing,
                    publish_state_changes,
                )
                    .chain()
                    .in_set(FrameSet::Movement),
            )
            .add_systems(Update, fade_after_images.in_set(FrameSet::Render))
            .add_systems(
                FixedUpdate,
                apply_player_motion.run_if(in_state(GameState::Run)),
            );
    }
}

fn contact_sensing(tuning: Res<WallTuning>) -> bool {
    tuning.sensing == WallSensing::ContactTag
}

fn proximity_sensing(tuning: Res<WallTuning>) -> bool {
    tuning.sensing == WallSensing::Proximity
}
