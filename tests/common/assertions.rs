use approx::assert_relative_eq;
use flightsim::{
    components::{LandingGear, Telemetry, VehicleState},
    resources::GroundProbe,
};
use nalgebra::{UnitQuaternion, Vector3};

/// Assert that a vehicle state is finite with a unit attitude
#[track_caller]
pub fn assert_state_valid(state: &VehicleState) {
    assert!(
        state.position.iter().all(|v| v.is_finite()),
        "Position is not finite: {:?}",
        state.position
    );
    assert!(
        state.linear_velocity.iter().all(|v| v.is_finite()),
        "Velocity is not finite: {:?}",
        state.linear_velocity
    );
    assert!(
        state.angular_velocity.iter().all(|v| v.is_finite()),
        "Angular velocity is not finite: {:?}",
        state.angular_velocity
    );

    let norm = state.orientation.as_ref().norm();
    assert!(
        (norm - 1.0).abs() < 1e-9,
        "Orientation drifted from unit length: {}",
        norm
    );
}

/// Assert that telemetry respects its documented ranges
#[track_caller]
pub fn assert_telemetry_valid(telemetry: &Telemetry) {
    assert!(telemetry.airspeed >= 0.0, "Negative airspeed");
    assert!(
        telemetry.altitude_above_ground >= 0.0,
        "Negative altitude above ground"
    );
    assert!(
        (0.0..360.0).contains(&telemetry.heading_degrees),
        "Heading {} out of range",
        telemetry.heading_degrees
    );
    assert!(
        (0.0..=100.0).contains(&telemetry.engine_spool_percent),
        "Spool {} out of range",
        telemetry.engine_spool_percent
    );
}

/// Assert that no gear point is below the ground beyond `tolerance`
#[track_caller]
pub fn assert_gear_above_ground<G: GroundProbe + ?Sized>(
    state: &VehicleState,
    gear: &LandingGear,
    ground: &G,
    tolerance: f64,
) {
    let clearance = gear.min_clearance(&state.position, &state.orientation, ground);
    assert!(
        clearance >= -tolerance,
        "Gear penetrates the ground by {}",
        -clearance
    );
}

/// Assert that two positions are approximately equal
#[track_caller]
pub fn assert_position_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}

/// Assert that two attitudes are approximately equal
#[track_caller]
pub fn assert_attitude_eq(
    actual: &UnitQuaternion<f64>,
    expected: &UnitQuaternion<f64>,
    epsilon: f64,
) {
    // Compare using angle difference
    let angle = actual.angle_to(expected);
    assert!(
        angle < epsilon,
        "Attitude difference {} exceeds epsilon {}",
        angle,
        epsilon
    );
}
