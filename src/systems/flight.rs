use bevy::prelude::*;

use crate::components::{ControlInputs, EngineBank, LocalVehicle, Telemetry, VehicleState};
use crate::network::PeerSnapshot;
use crate::resources::{GroundSurface, PeerSync};
use crate::systems::physics::FlightDynamicsEngine;

/// Step every flight entity by the fixed timestep.
pub fn flight_dynamics_system(
    time: Res<Time>,
    engine: Res<FlightDynamicsEngine>,
    ground: Res<GroundSurface>,
    mut query: Query<(
        Entity,
        &mut VehicleState,
        &mut EngineBank,
        &ControlInputs,
        &mut Telemetry,
    )>,
) {
    let dt = time.delta_secs_f64();
    for (entity, mut state, mut engines, controls, mut telemetry) in query.iter_mut() {
        let next = engine.step(&mut state, &mut engines, controls, dt, ground.probe());

        if next.stalled && !telemetry.stalled {
            debug!(
                "{:?} stalled at {:.1} deg AoA, {:.1} m/s",
                entity, next.angle_of_attack_degrees, next.airspeed
            );
        }
        if !state.is_finite() {
            error!("{:?} left the finite state space, resetting to spawn", entity);
            *state = engine.spawn_state(ground.probe());
        }
        *telemetry = next;
    }
}

/// Mirror the simulated pose onto the render transform.
pub fn transform_sync_system(
    mut query: Query<(&VehicleState, &mut Transform), Changed<VehicleState>>,
) {
    for (state, mut transform) in query.iter_mut() {
        transform.translation = Vec3::new(
            state.position.x as f32,
            state.position.y as f32,
            state.position.z as f32,
        );
        let q = state.orientation.quaternion();
        transform.rotation = Quat::from_xyzw(q.i as f32, q.j as f32, q.k as f32, q.w as f32);
    }
}

/// Decode peer traffic, smooth remote vehicles and queue our own pose at the
/// broadcast rate.
pub fn peer_sync_system(
    time: Res<Time>,
    mut sync: ResMut<PeerSync>,
    local: Query<&VehicleState, With<LocalVehicle>>,
) {
    let sync = &mut *sync;
    for payload in sync.inbound.drain(..) {
        match PeerSnapshot::from_json(&payload) {
            Ok(snapshot) => sync.fleet.ingest(&snapshot),
            Err(e) => warn!("Dropping peer message: {}", e),
        }
    }

    let dt = time.delta_secs_f64();
    sync.fleet.advance(dt);

    if !sync.scheduler.tick(dt) {
        return;
    }
    let Ok(state) = local.get_single() else {
        return;
    };
    match PeerSnapshot::capture(sync.fleet.local_id(), state).to_json() {
        Ok(json) => sync.outbound.push(json),
        Err(e) => error!("Failed to encode local snapshot: {}", e),
    }
}
