use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Whether the vehicle is resting on its gear
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlightPhase {
    #[default]
    Airborne,
    Grounded,
}

impl FlightPhase {
    pub fn from_contact(on_ground: bool) -> Self {
        if on_ground {
            FlightPhase::Grounded
        } else {
            FlightPhase::Airborne
        }
    }
}

/// Derived flight data handed back to the host after every tick
#[derive(Component, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Telemetry {
    /// Speed through the air [m/s]
    pub airspeed: f64,
    /// Height of the vehicle origin above the ground beneath it [m], never negative
    pub altitude_above_ground: f64,
    /// Compass heading [deg] in [0, 360)
    pub heading_degrees: f64,
    pub on_ground: bool,
    /// Climb rate [m/s]
    pub vertical_speed: f64,
    pub angle_of_attack_degrees: f64,
    pub stalled: bool,
    /// Mean engine spool [%]
    pub engine_spool_percent: f64,
    /// Whether the thrust gate was open this tick
    pub thrust_available: bool,
    pub phase: FlightPhase,
}
