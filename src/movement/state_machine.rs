//! Movement domain: the player's flat locomotion/combat state machine.

use bevy::prelude::*;

use crate::movement::resources::PlayerTuning;
use crate::movement::wall::WallDirection;

/// Discrete player state. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayerState {
    #[default]
    Idle,
    Running,
    Jumping,
    Attacking,
    Damaged,
    Dash,
    Dead,
}

impl PlayerState {
    /// Integer value handed to the animation sink.
    pub fn index(self) -> i32 {
        match self {
            PlayerState::Idle => 0,
            PlayerState::Running => 1,
            PlayerState::Jumping => 2,
            PlayerState::Attacking => 3,
            PlayerState::Damaged => 4,
            PlayerState::Dash => 5,
            PlayerState::Dead => 6,
        }
    }

    /// Stunned and dead bodies ignore locomotion input.
    pub fn accepts_locomotion(self) -> bool {
        !matches!(self, PlayerState::Damaged | PlayerState::Dead)
    }
}

/// Per-frame inputs the state machine reacts to.
#[derive(Debug, Clone, Copy, Default)]
pub struct StateInput {
    /// Wall-relative locomotion axis in [-1, 1].
    pub locomotion: f32,
    pub jump_pressed: bool,
    pub attack_pressed: bool,
    pub grounded: bool,
    pub wall: WallDirection,
}

#[derive(Component, Debug, Default)]
pub struct PlayerStateMachine {
    current: PlayerState,
    previous: PlayerState,
    /// Seconds spent in the current state.
    elapsed: f32,
    attack_timer: f32,
    damaged_timer: f32,
    left_ground: bool,
    last_wall: WallDirection,
    pending_death: bool,
    transitions: Vec<(PlayerState, PlayerState)>,
}

impl PlayerStateMachine {
    pub fn current(&self) -> PlayerState {
        self.current
    }

    pub fn previous(&self) -> PlayerState {
        self.previous
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn is(&self, state: PlayerState) -> bool {
        self.current == state
    }

    /// Facing is frozen while stunned or dashing.
    pub fn facing_locked(&self) -> bool {
        matches!(
            self.current,
            PlayerState::Damaged | PlayerState::Dash | PlayerState::Dead
        )
    }

    pub fn can_dash(&self) -> bool {
        matches!(
            self.current,
            PlayerState::Idle | PlayerState::Running | PlayerState::Jumping
        )
    }

    /// Move to `state`. Setting the current state is a no-op and nothing
    /// leaves `Dead`. Returns whether a transition happened.
    pub fn set_state(&mut self, state: PlayerState) -> bool {
        if state == self.current || self.current == PlayerState::Dead {
            return false;
        }
        debug!("Player state {:?} -> {:?}", self.current, state);
        self.previous = self.current;
        self.current = state;
        self.elapsed = 0.0;
        self.transitions.push((self.previous, state));
        true
    }

    /// Take every `(from, to)` transition since the last drain, oldest first.
    pub fn drain_transitions(&mut self) -> Vec<(PlayerState, PlayerState)> {
        std::mem::take(&mut self.transitions)
    }

    /// Advance timers and evaluate input-driven transitions.
    /// Returns the new state when it changed.
    pub fn update(
        &mut self,
        input: &StateInput,
        tuning: &PlayerTuning,
        dt: f32,
    ) -> Option<PlayerState> {
        let before = self.current;
        self.elapsed += dt;
        let wall_changed = input.wall != self.last_wall;
        let axis_changed = input.wall.is_side() != self.last_wall.is_side();
        self.last_wall = input.wall;

        if matches!(self.current, PlayerState::Dead | PlayerState::Dash) {
            return None;
        }

        // Crossing between floor/ceiling and side walls resets locomotion,
        // and ends a stun early.
        let exempt = matches!(self.current, PlayerState::Jumping | PlayerState::Attacking);
        if wall_changed && axis_changed && !exempt {
            self.damaged_timer = 0.0;
            self.set_state(PlayerState::Idle);
            return self.changed_from(before);
        }

        match self.current {
            PlayerState::Attacking => {
                self.attack_timer -= dt;
                if self.attack_timer <= 0.0 {
                    self.attack_timer = 0.0;
                    self.settle(input.locomotion, tuning);
                }
                return self.changed_from(before);
            }
            PlayerState::Damaged => {
                self.damaged_timer -= dt;
                if self.damaged_timer <= 0.0 {
                    self.damaged_timer = 0.0;
                    self.settle(input.locomotion, tuning);
                }
                return self.changed_from(before);
            }
            _ => {}
        }

        if self.current == PlayerState::Jumping {
            if !input.grounded {
                self.left_ground = true;
            } else if self.left_ground || self.elapsed >= tuning.jump_land_grace {
                self.set_state(PlayerState::Idle);
            }
            return self.changed_from(before);
        }

        if input.jump_pressed && input.grounded {
            self.left_ground = false;
            self.set_state(PlayerState::Jumping);
            return self.changed_from(before);
        }

        if input.attack_pressed {
            self.attack_timer = tuning.attack_duration;
            self.set_state(PlayerState::Attacking);
            return self.changed_from(before);
        }

        if input.locomotion.abs() > tuning.deadzone {
            self.set_state(PlayerState::Running);
        } else if input.grounded {
            self.set_state(PlayerState::Idle);
        }
        self.changed_from(before)
    }

    /// External hit. Ignored while jumping, attacking, dashing or dead;
    /// a second hit while stunned only refreshes the stun.
    pub fn damage(&mut self, stun: f32) -> Option<PlayerState> {
        match self.current {
            PlayerState::Jumping
            | PlayerState::Attacking
            | PlayerState::Dash
            | PlayerState::Dead => None,
            PlayerState::Damaged => {
                self.damaged_timer = self.damaged_timer.max(stun);
                None
            }
            _ => {
                self.damaged_timer = stun;
                self.set_state(PlayerState::Damaged)
                    .then_some(PlayerState::Damaged)
            }
        }
    }

    /// Kill the player. A dash in flight finishes first.
    pub fn kill(&mut self) -> Option<PlayerState> {
        if self.current == PlayerState::Dash {
            self.pending_death = true;
            return None;
        }
        self.set_state(PlayerState::Dead).then_some(PlayerState::Dead)
    }

    /// Enter the sticky dash state. Cooldown is checked by the dash itself.
    pub fn begin_dash(&mut self) -> bool {
        if !self.can_dash() {
            return false;
        }
        self.set_state(PlayerState::Dash)
    }

    /// Leave the dash state, settling on Running or Idle from current input.
    pub fn end_dash(&mut self, locomotion: f32, tuning: &PlayerTuning) -> Option<PlayerState> {
        if self.current != PlayerState::Dash {
            return None;
        }
        if self.pending_death {
            self.pending_death = false;
            self.set_state(PlayerState::Dead);
        } else {
            self.settle(locomotion, tuning);
        }
        Some(self.current)
    }

    fn settle(&mut self, locomotion: f32, tuning: &PlayerTuning) {
        if locomotion.abs() > tuning.deadzone {
            self.set_state(PlayerState::Running);
        } else {
            self.set_state(PlayerState::Idle);
        }
    }

    fn changed_from(&self, before: PlayerState) -> Option<PlayerState> {
        (self.current != before).then_some(self.current)
    }
}
