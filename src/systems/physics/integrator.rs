use nalgebra::{UnitQuaternion, Vector3};

use crate::components::{ControlInputs, VehicleState};
use crate::resources::PhysicsConstants;
use crate::utils::{body_rotation_vector, decay_retention, renormalize};

/// Semi-implicit Euler step of the translational state: velocity first, then
/// position from the new velocity.
pub fn integrate_translation(
    state: &mut VehicleState,
    acceleration: &Vector3<f64>,
    dt: f64,
    max_airspeed: Option<f64>,
) {
    state.linear_velocity += acceleration * dt;
    if let Some(max_airspeed) = max_airspeed {
        apply_velocity_limit(&mut state.linear_velocity, max_airspeed);
    }
    state.position += state.linear_velocity * dt;
}

/// Scale the velocity back onto the airspeed limit if it exceeds it.
fn apply_velocity_limit(velocity: &mut Vector3<f64>, max_velocity: f64) {
    let velocity_norm = velocity.norm();
    if velocity_norm > max_velocity {
        *velocity *= max_velocity / velocity_norm;
    }
}

/// Control authority in [0, 1], growing linearly with airspeed up to the
/// full-authority speed. Zero at rest.
pub fn control_authority(constants: &PhysicsConstants, airspeed: f64) -> f64 {
    (airspeed / constants.full_authority_airspeed).clamp(0.0, 1.0)
}

/// Angular acceleration (roll, pitch, yaw) commanded by the pilot [rad/s^2].
pub fn control_torque(
    constants: &PhysicsConstants,
    controls: &ControlInputs,
    airspeed: f64,
    on_ground: bool,
) -> Vector3<f64> {
    let sensitivity = &constants.control_sensitivity;
    let mut authority = control_authority(constants, airspeed);
    if on_ground {
        authority *= constants.ground_torque_factor;
    }
    Vector3::new(
        controls.roll * sensitivity.roll,
        controls.pitch * sensitivity.pitch,
        controls.yaw.axis() * sensitivity.yaw,
    ) * authority
}

/// Accumulate torque into the body rates, decay them exponentially over `dt`
/// and rotate the attitude by the result: `new = current * delta`.
pub fn integrate_rotation(
    state: &mut VehicleState,
    torque: &Vector3<f64>,
    angular_drag: f64,
    dt: f64,
) {
    state.angular_velocity += torque * dt;
    state.angular_velocity *= decay_retention(angular_drag, dt);

    let delta = UnitQuaternion::from_scaled_axis(body_rotation_vector(&state.angular_velocity) * dt);
    state.orientation = renormalize(&(state.orientation * delta));
}
