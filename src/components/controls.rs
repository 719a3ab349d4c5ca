use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::sanitize;

/// Discrete rudder input from the yaw keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YawInput {
    Left,
    #[default]
    Neutral,
    Right,
}

impl YawInput {
    /// -1, 0 or 1; positive yaws the nose right
    pub fn axis(self) -> f64 {
        match self {
            YawInput::Left => -1.0,
            YawInput::Neutral => 0.0,
            YawInput::Right => 1.0,
        }
    }

    /// Resolve a pair of held keys; both or neither held is neutral
    pub fn from_keys(left: bool, right: bool) -> Self {
        match (left, right) {
            (true, false) => YawInput::Left,
            (false, true) => YawInput::Right,
            _ => YawInput::Neutral,
        }
    }
}

/// Pilot inputs for one tick, produced by the host input layer
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlInputs {
    /// Stick pitch [-1, 1], positive pulls the nose up
    pub pitch: f64,
    /// Stick roll [-1, 1], positive rolls right
    pub roll: f64,
    pub yaw: YawInput,
    /// Power lever [0, 1]
    pub throttle: f64,
    pub gear_down: bool,
}

impl Default for ControlInputs {
    fn default() -> Self {
        Self {
            pitch: 0.0,
            roll: 0.0,
            yaw: YawInput::Neutral,
            throttle: 0.0,
            gear_down: true,
        }
    }
}

impl ControlInputs {
    /// Copy with every axis clamped to its range and NaN replaced by neutral.
    pub fn sanitized(&self) -> Self {
        Self {
            pitch: sanitize(self.pitch, -1.0, 1.0, 0.0),
            roll: sanitize(self.roll, -1.0, 1.0, 0.0),
            yaw: self.yaw,
            throttle: sanitize(self.throttle, 0.0, 1.0, 0.0),
            gear_down: self.gear_down,
        }
    }
}
