//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod dash;
pub(crate) mod input;
pub(crate) mod movement;
pub(crate) mod state;

pub(crate) use collisions::{detect_ground, sense_walls_contact, sense_walls_proximity};
pub(crate) use dash::{fade_after_images, handle_dash_input, probe_dash_walls, tick_dash};
pub(crate) use input::read_input;
pub(crate) use movement::apply_player_motion;
pub(crate) use state::{drive_player_state, publish_state_changes, update_facing};
