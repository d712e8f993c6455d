//! Per-actor control state

use lander_core::RocketConfig;

/// The three logical controls an actor responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Thrust,
    TurnLeft,
    TurnRight,
}

/// Intent flags plus the fixed tuning that turns them into impulses.
///
/// Flags change only through [`ControlState::set`]; dimensions and tuning
/// are fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlState {
    thrusting: bool,
    turning_left: bool,
    turning_right: bool,
    width: f32,
    height: f32,
    thrust: f32,
    turn_impulse: f32,
}

impl ControlState {
    /// All flags cleared. `width` and `height` are the body size in pixels.
    pub fn new(width: f32, height: f32, thrust: f32, turn_impulse: f32) -> Self {
        Self {
            thrusting: false,
            turning_left: false,
            turning_right: false,
            width,
            height,
            thrust,
            turn_impulse,
        }
    }

    pub fn from_config(rocket: &RocketConfig) -> Self {
        Self::new(
            rocket.width,
            rocket.height,
            rocket.thrust,
            rocket.turn_impulse,
        )
    }

    /// Set one flag. Returns true if the flag changed.
    pub fn set(&mut self, control: Control, active: bool) -> bool {
        let flag = match control {
            Control::Thrust => &mut self.thrusting,
            Control::TurnLeft => &mut self.turning_left,
            Control::TurnRight => &mut self.turning_right,
        };
        let changed = *flag != active;
        *flag = active;
        changed
    }

    pub fn is_active(&self, control: Control) -> bool {
        match control {
            Control::Thrust => self.thrusting,
            Control::TurnLeft => self.turning_left,
            Control::TurnRight => self.turning_right,
        }
    }

    pub fn any_active(&self) -> bool {
        self.thrusting || self.turning_left || self.turning_right
    }

    pub fn is_turning(&self) -> bool {
        self.turning_left || self.turning_right
    }

    pub fn thrusting(&self) -> bool {
        self.thrusting
    }

    pub fn turning_left(&self) -> bool {
        self.turning_left
    }

    pub fn turning_right(&self) -> bool {
        self.turning_right
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn thrust(&self) -> f32 {
        self.thrust
    }

    pub fn turn_impulse(&self) -> f32 {
        self.turn_impulse
    }
}
