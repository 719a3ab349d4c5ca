use approx::assert_relative_eq;
use bevy::prelude::*;
use flightsim::{
    components::{ControlInputs, EngineBank, FlightPhase},
    network::PeerSnapshot,
    resources::PeerSync,
};
use nalgebra::{UnitQuaternion, Vector3};
use uuid::Uuid;

use crate::common::{assert_state_valid, assert_telemetry_valid, TestAppBuilder};

#[test]
fn test_parked_vehicle_stays_put() {
    let mut app = TestAppBuilder::new().with_ground_height(12.0).build();
    app.run_steps(120);

    let state = app.vehicle();
    assert_state_valid(&state);
    assert_relative_eq!(state.position.y, 13.0, epsilon = 1e-6);

    let telemetry = app.telemetry();
    assert_telemetry_valid(&telemetry);
    assert!(telemetry.on_ground);
    assert_eq!(telemetry.phase, FlightPhase::Grounded);

    let transform = app.query_single::<Transform>().cloned().unwrap();
    assert_relative_eq!(transform.translation.y, 13.0, epsilon = 1e-4);
}

#[test]
fn test_engines_started_through_ecs_move_the_vehicle() {
    let mut app = TestAppBuilder::new().build();
    app.query_single_mut::<EngineBank>().unwrap().command_all(true);
    app.query_single_mut::<ControlInputs>().unwrap().throttle = 1.0;

    // Twin needs five seconds to spool up.
    app.run_steps(200);
    assert!(!app.telemetry().thrust_available);
    assert_eq!(app.vehicle().linear_velocity.z, 0.0);

    app.run_steps(300);
    let telemetry = app.telemetry();
    assert!(telemetry.thrust_available);
    assert_relative_eq!(telemetry.engine_spool_percent, 100.0);

    let state = app.vehicle();
    assert!(state.linear_velocity.z > 0.0);
    let transform = app.query_single::<Transform>().cloned().unwrap();
    assert!(transform.translation.z > 0.0);
}

#[test]
fn test_peer_sync_ingests_and_broadcasts() {
    let me = Uuid::new_v4();
    let peer = Uuid::new_v4();
    let mut app = TestAppBuilder::new().with_peer_id(me).build();

    let remote = PeerSnapshot {
        id: peer,
        position: Vector3::new(50.0, 200.0, -10.0),
        orientation: UnitQuaternion::identity(),
    };
    let echo = PeerSnapshot {
        id: me,
        ..remote.clone()
    };
    {
        let mut sync = app.get_state_mut::<PeerSync>().unwrap();
        sync.inbound.push(remote.to_json().unwrap());
        sync.inbound.push(echo.to_json().unwrap());
        sync.inbound.push("not json".to_string());
    }

    app.run_steps(60);

    let mut sync = app.get_state_mut::<PeerSync>().unwrap();
    assert_eq!(sync.fleet.len(), 1);
    let vehicle = sync.fleet.get(&peer).unwrap();
    assert_relative_eq!(vehicle.position, remote.position, epsilon = 1e-9);

    let outbound = sync.drain_outbound();
    assert!(
        (18..=21).contains(&outbound.len()),
        "{} snapshots in one second",
        outbound.len()
    );
    let decoded = PeerSnapshot::from_json(&outbound[0]).unwrap();
    assert_eq!(decoded.id, me);
}

#[test]
fn test_plugin_without_vehicles_runs() {
    let mut app = TestAppBuilder::new().without_vehicle().build();
    app.run_steps(10);
    assert!(app.query_single::<Transform>().is_none());
}
