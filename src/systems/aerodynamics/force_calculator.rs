use nalgebra::{UnitQuaternion, Vector3};

use super::AirData;
use crate::resources::PhysicsConstants;
use crate::utils::{body_up, safe_normalize};

/// Aerodynamic accelerations in the world frame
#[derive(Debug, Clone, PartialEq)]
pub struct AeroForces {
    pub lift: Vector3<f64>,
    pub drag: Vector3<f64>,
    pub stalled: bool,
}

impl AeroForces {
    pub fn none() -> Self {
        Self {
            lift: Vector3::zeros(),
            drag: Vector3::zeros(),
            stalled: false,
        }
    }

    pub fn total(&self) -> Vector3<f64> {
        self.lift + self.drag
    }
}

/// Lift attenuation for a given |AoA| [rad]: 1 up to the stall angle, then a
/// linear ramp over the falloff band down to the configured floor.
pub fn stall_factor(constants: &PhysicsConstants, aoa_abs: f64) -> f64 {
    let stall = constants.stall_angle();
    if aoa_abs <= stall {
        return 1.0;
    }
    let progress = ((aoa_abs - stall) / constants.stall_falloff()).min(1.0);
    let floor = constants.stall_lift_floor;
    (1.0 - progress * (1.0 - floor)).max(floor)
}

/// Pre-stall lift coefficient; the AoA contribution saturates at the stall angle.
pub fn lift_coefficient(constants: &PhysicsConstants, aoa_abs: f64) -> f64 {
    constants.lift_coefficient + constants.lift_slope * aoa_abs.min(constants.stall_angle())
}

/// Lift acceleration magnitude for an airspeed [m/s] and AoA [rad].
pub fn lift_magnitude(constants: &PhysicsConstants, airspeed: f64, angle_of_attack: f64) -> f64 {
    let aoa_abs = angle_of_attack.abs();
    airspeed * airspeed * lift_coefficient(constants, aoa_abs) * stall_factor(constants, aoa_abs)
}

/// Drag acceleration magnitude; extended gear adds its own coefficient.
pub fn drag_magnitude(constants: &PhysicsConstants, airspeed: f64, gear_down: bool) -> f64 {
    let coefficient = if gear_down {
        constants.drag_coefficient + constants.gear_drag_coefficient
    } else {
        constants.drag_coefficient
    };
    airspeed * airspeed * coefficient
}

/// Lift acts along the part of the body up axis perpendicular to the flight
/// path; drag opposes the flight path. Nothing is produced below the
/// aerodynamic threshold.
pub fn calculate_aero_forces(
    constants: &PhysicsConstants,
    air_data: &AirData,
    orientation: &UnitQuaternion<f64>,
    gear_down: bool,
) -> AeroForces {
    let Some(direction) = air_data.velocity_direction else {
        return AeroForces::none();
    };

    let up = orientation * body_up();
    let lift_direction = safe_normalize(&(up - direction * up.dot(&direction)));
    let lift = lift_direction
        .map(|dir| dir * lift_magnitude(constants, air_data.airspeed, air_data.angle_of_attack))
        .unwrap_or_else(Vector3::zeros);

    let drag = -direction * drag_magnitude(constants, air_data.airspeed, gear_down);

    AeroForces {
        lift,
        drag,
        stalled: air_data.angle_of_attack.abs() > constants.stall_angle(),
    }
}
