use flightsim::{
    components::{ControlInputs, VehicleState},
    resources::{GroundProbe, HeightField},
    utils::attitude_from_heading,
};
use nalgebra::{UnitQuaternion, Vector3};

use crate::common::{
    assert_gear_above_ground, assert_state_valid, assert_telemetry_valid, create_ready_bank,
    create_suspension_engine, create_test_engine, DT,
};

fn sloped_field() -> HeightField {
    // Rises 10 m over 200 m along x.
    HeightField::new([-100.0, -100.0], 200.0, 2, 2, vec![0.0, 10.0, 0.0, 10.0])
        .expect("valid height field")
}

#[test]
fn test_hard_floor_clamps_gear_and_sink_rate() {
    let engine = create_test_engine();
    let ground = sloped_field();
    let gear = engine.gear().clone();

    let tilt = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), 0.2);
    let mut state = VehicleState::at_rest(
        Vector3::new(0.0, 30.0, 0.0),
        attitude_from_heading(30.0) * tilt,
    );
    state.linear_velocity = Vector3::new(0.0, -10.0, 20.0);
    let mut bank = engine.engine_bank();

    let mut touched = false;
    for _ in 0..600 {
        let telemetry = engine.step(&mut state, &mut bank, &ControlInputs::default(), DT, &ground);
        assert_state_valid(&state);
        assert_telemetry_valid(&telemetry);
        assert_gear_above_ground(&state, &gear, &ground, 1e-9);

        let clearance = gear.min_clearance(&state.position, &state.orientation, &ground);
        if clearance < 1e-9 {
            touched = true;
            assert!(state.linear_velocity.y >= 0.0, "sinking into the floor");
        }
    }
    assert!(touched);
    assert!(state.on_ground);
}

#[test]
fn test_suspension_follows_closure_ground() {
    let engine = create_suspension_engine();
    let ground = |x: f64, _z: f64| 0.02 * x;
    let gear = engine.gear().clone();

    let mut state = VehicleState::at_rest(Vector3::new(40.0, 6.0, 0.0), attitude_from_heading(90.0));
    let mut bank = create_ready_bank(2);
    let controls = ControlInputs {
        throttle: 0.3,
        ..Default::default()
    };

    for _ in 0..1200 {
        let telemetry = engine.step(&mut state, &mut bank, &controls, DT, &ground);
        assert_state_valid(&state);
        assert!(telemetry.altitude_above_ground >= 0.0);
        assert_gear_above_ground(&state, &gear, &ground, 1.0);
    }
    assert!(state.on_ground);

    // Heading 90 rolls toward -x, downhill.
    assert!(state.position.x < 40.0);
    assert!(state.position.y < 6.0);
    assert!(ground.height_at(state.position.x, state.position.z) < 0.8);
}
