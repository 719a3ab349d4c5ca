use nalgebra::{UnitQuaternion, Vector3};
use std::f64::consts::FRAC_PI_2;

use crate::utils::{body_forward, body_up, clamped_acos, safe_normalize};

/// Air-relative flight data for one tick. Still air: airspeed is ground speed.
#[derive(Debug, Clone, PartialEq)]
pub struct AirData {
    /// Speed through the air [m/s]
    pub airspeed: f64,
    /// Airspeed component along the nose [m/s]
    pub forward_airspeed: f64,
    /// Unit velocity direction, `None` at or below the aerodynamic threshold
    pub velocity_direction: Option<Vector3<f64>>,
    /// Angle of attack [rad], positive with the nose above the flight path
    pub angle_of_attack: f64,
}

impl AirData {
    /// Aerodynamics are only resolved above `threshold`; below it the
    /// direction is undefined and the angle of attack reads zero.
    pub fn calculate(
        orientation: &UnitQuaternion<f64>,
        velocity: &Vector3<f64>,
        threshold: f64,
    ) -> Self {
        let airspeed = velocity.norm();
        let forward_airspeed = velocity.dot(&(orientation * body_forward()));

        let velocity_direction = if airspeed > threshold {
            safe_normalize(velocity)
        } else {
            None
        };

        let angle_of_attack = velocity_direction
            .map(|direction| {
                let up = orientation * body_up();
                clamped_acos(up.dot(&direction)) - FRAC_PI_2
            })
            .unwrap_or(0.0);

        Self {
            airspeed,
            forward_airspeed,
            velocity_direction,
            angle_of_attack,
        }
    }

    pub fn is_aerodynamic(&self) -> bool {
        self.velocity_direction.is_some()
    }
}
