use serde::{Deserialize, Serialize};

use super::validate::{finite, non_negative, positive};
use crate::utils::{deg_to_rad, ConfigError, GRAVITY};

/// Angular acceleration at full stick and full control authority [rad/s^2]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlSensitivity {
    pub pitch: f64,
    pub roll: f64,
    pub yaw: f64,
}

/// Immutable aerodynamic and integration constants.
///
/// Forces are specific forces: every coefficient yields an acceleration
/// [m/s^2] rather than a force, so no vehicle mass is involved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConstants {
    /// Gravitational acceleration [m/s^2]
    pub gravity: f64,
    /// Thrust acceleration at full throttle, static [m/s^2]
    pub thrust_scale: f64,
    /// Fractional thrust gain per m/s of forward airspeed
    pub ram_air_gain: f64,
    /// Drag per airspeed squared, gear retracted
    pub drag_coefficient: f64,
    /// Extra drag per airspeed squared with the gear extended
    pub gear_drag_coefficient: f64,
    /// Lift per airspeed squared at zero angle of attack
    pub lift_coefficient: f64,
    /// Additional lift coefficient per radian of |AoA|
    pub lift_slope: f64,
    /// |AoA| where the stall begins [deg]
    pub stall_angle_degrees: f64,
    /// Width of the band over which lift decays to the floor [deg]
    pub stall_falloff_degrees: f64,
    /// Fraction of stall-onset lift kept deep in the stall, in (0, 1]
    pub stall_lift_floor: f64,
    /// Airspeed below which no aerodynamic force is computed [m/s]
    pub lift_airspeed_threshold: f64,
    /// Exponential angular-rate decay while airborne [1/s]
    pub angular_drag: f64,
    /// Exponential angular-rate decay while on the ground [1/s]
    pub ground_angular_drag: f64,
    /// Torque multiplier while on the ground
    pub ground_torque_factor: f64,
    pub control_sensitivity: ControlSensitivity,
    /// Airspeed at which the control surfaces reach full authority [m/s]
    pub full_authority_airspeed: f64,
    /// Optional hard cap on airspeed [m/s]
    #[serde(default)]
    pub max_airspeed: Option<f64>,
    /// Longest tick integrated; longer ticks are skipped [s]
    pub max_dt: f64,
}

impl PhysicsConstants {
    /// Reference constants for a light twin.
    pub fn light_twin() -> Self {
        Self {
            gravity: GRAVITY,
            thrust_scale: 6.0,
            ram_air_gain: 0.002,
            drag_coefficient: 0.0008,
            gear_drag_coefficient: 0.0004,
            lift_coefficient: 0.0035,
            lift_slope: 0.02,
            stall_angle_degrees: 15.0,
            stall_falloff_degrees: 10.0,
            stall_lift_floor: 0.25,
            lift_airspeed_threshold: 1.0,
            angular_drag: 1.5,
            ground_angular_drag: 6.0,
            ground_torque_factor: 0.2,
            control_sensitivity: ControlSensitivity {
                pitch: 1.2,
                roll: 2.0,
                yaw: 0.6,
            },
            full_authority_airspeed: 40.0,
            max_airspeed: Some(120.0),
            max_dt: 0.05,
        }
    }

    /// Stall onset angle [rad]
    pub fn stall_angle(&self) -> f64 {
        deg_to_rad(self.stall_angle_degrees)
    }

    /// Stall falloff band [rad]
    pub fn stall_falloff(&self) -> f64 {
        deg_to_rad(self.stall_falloff_degrees)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("gravity", self.gravity)?;
        non_negative("thrust_scale", self.thrust_scale)?;
        non_negative("ram_air_gain", self.ram_air_gain)?;
        non_negative("drag_coefficient", self.drag_coefficient)?;
        non_negative("gear_drag_coefficient", self.gear_drag_coefficient)?;
        non_negative("lift_coefficient", self.lift_coefficient)?;
        non_negative("lift_slope", self.lift_slope)?;
        positive("stall_angle_degrees", self.stall_angle_degrees)?;
        if self.stall_angle_degrees >= 90.0 {
            return Err(ConfigError::invalid(
                "stall_angle_degrees",
                "must be below 90 degrees",
            ));
        }
        positive("stall_falloff_degrees", self.stall_falloff_degrees)?;
        finite("stall_lift_floor", self.stall_lift_floor)?;
        if !(self.stall_lift_floor > 0.0 && self.stall_lift_floor <= 1.0) {
            return Err(ConfigError::invalid(
                "stall_lift_floor",
                format!("must lie in (0, 1], got {}", self.stall_lift_floor),
            ));
        }
        positive("lift_airspeed_threshold", self.lift_airspeed_threshold)?;
        non_negative("angular_drag", self.angular_drag)?;
        non_negative("ground_angular_drag", self.ground_angular_drag)?;
        non_negative("ground_torque_factor", self.ground_torque_factor)?;
        non_negative("control_sensitivity.pitch", self.control_sensitivity.pitch)?;
        non_negative("control_sensitivity.roll", self.control_sensitivity.roll)?;
        non_negative("control_sensitivity.yaw", self.control_sensitivity.yaw)?;
        positive("full_authority_airspeed", self.full_authority_airspeed)?;
        if let Some(max_airspeed) = self.max_airspeed {
            positive("max_airspeed", max_airspeed)?;
        }
        positive("max_dt", self.max_dt)?;
        Ok(())
    }
}
