use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::components::LandingGear;
use crate::resources::{GroundProbe, SpawnConfig};
use crate::utils::attitude_from_heading;

/// Marks the vehicle this app flies and broadcasts to peers
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct LocalVehicle;

/// Kinematic state of the local vehicle, owned by the host and advanced in place each tick
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleState {
    /// Position in world space [m], Y up
    pub position: Vector3<f64>,

    /// Attitude quaternion (rotation from body to world frame)
    pub orientation: UnitQuaternion<f64>,

    /// Linear velocity in world space [m/s]
    pub linear_velocity: Vector3<f64>,

    /// Body rates (roll, pitch, yaw) [rad/s]
    pub angular_velocity: Vector3<f64>,

    /// Ground contact as of the last completed tick
    pub on_ground: bool,
}

impl Default for VehicleState {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            orientation: UnitQuaternion::identity(),
            linear_velocity: Vector3::zeros(),
            angular_velocity: Vector3::zeros(),
            on_ground: false,
        }
    }
}

impl VehicleState {
    /// Create a state at rest at a specific position and attitude
    pub fn at_rest(position: Vector3<f64>, orientation: UnitQuaternion<f64>) -> Self {
        Self {
            position,
            orientation,
            ..Default::default()
        }
    }

    /// Spawn at rest on the configured pose, lifted so that no gear point sits below the ground.
    ///
    /// The vehicle starts grounded when a gear point is within `contact_tolerance`,
    /// the same test the step applies.
    pub fn spawn<G: GroundProbe + ?Sized>(
        spawn: &SpawnConfig,
        gear: &LandingGear,
        ground: &G,
        contact_tolerance: f64,
    ) -> Self {
        let orientation = attitude_from_heading(spawn.heading_degrees);
        let mut state = Self::at_rest(spawn.position, orientation);

        let lift = gear
            .deepest_penetration(&state.position, &state.orientation, ground)
            .map(|(_, depth)| depth)
            .unwrap_or(0.0);
        if lift > 0.0 {
            state.position.y += lift + spawn.clearance;
        }
        state.on_ground =
            gear.min_clearance(&state.position, &state.orientation, ground) <= contact_tolerance;
        state
    }

    /// Respawn: put the vehicle back on its spawn pose with zero velocities.
    pub fn reset_to(&mut self, spawn: &VehicleState) {
        *self = spawn.clone();
    }

    /// Current speed relative to the air mass [m/s]
    pub fn airspeed(&self) -> f64 {
        self.linear_velocity.norm()
    }

    pub fn is_finite(&self) -> bool {
        self.position.iter().all(|v| v.is_finite())
            && self.linear_velocity.iter().all(|v| v.is_finite())
            && self.angular_velocity.iter().all(|v| v.is_finite())
            && self.orientation.coords.iter().all(|v| v.is_finite())
    }
}
