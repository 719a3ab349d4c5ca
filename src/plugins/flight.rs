use bevy::prelude::*;
use uuid::Uuid;

use crate::components::{ControlInputs, EngineBank, Telemetry, VehicleState};
use crate::resources::{GroundProbe, GroundSurface, PeerSync};
use crate::systems::{
    flight_dynamics_system, peer_sync_system, transform_sync_system, FlightDynamicsEngine,
};
use crate::utils::REFERENCE_FRAME_RATE;

/// Flight simulation stages
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum FlightSet {
    Dynamics,
    Presentation,
}

/// Drives every entity carrying a [`VehicleState`], [`EngineBank`],
/// [`ControlInputs`] and [`Telemetry`] at a fixed rate.
///
/// A [`GroundSurface`] resource inserted before the plugin is kept; flat
/// ground at zero is used otherwise.
pub struct FlightDynamicsPlugin {
    pub engine: FlightDynamicsEngine,
    pub timestep: f64,
    pub peer_id: Option<Uuid>,
}

impl FlightDynamicsPlugin {
    pub fn new(engine: FlightDynamicsEngine) -> Self {
        Self {
            engine,
            timestep: 1.0 / REFERENCE_FRAME_RATE,
            peer_id: None,
        }
    }

    pub fn with_timestep(mut self, timestep: f64) -> Self {
        self.timestep = timestep;
        self
    }

    /// Enable snapshot exchange and remote smoothing under this peer id.
    pub fn with_peer_id(mut self, id: Uuid) -> Self {
        self.peer_id = Some(id);
        self
    }
}

impl Plugin for FlightDynamicsPlugin {
    fn build(&self, app: &mut App) {
        let timestep = if self.engine.accepts_dt(self.timestep) {
            self.timestep
        } else {
            let fallback = self
                .engine
                .config()
                .physics
                .max_dt
                .min(1.0 / REFERENCE_FRAME_RATE);
            warn!(
                "Timestep {} s is outside (0, {}], using {} s",
                self.timestep,
                self.engine.config().physics.max_dt,
                fallback
            );
            fallback
        };

        app.insert_resource(self.engine.clone())
            .init_resource::<GroundSurface>()
            .insert_resource(Time::<Fixed>::from_seconds(timestep));

        app.configure_sets(
            FixedUpdate,
            (FlightSet::Dynamics, FlightSet::Presentation).chain(),
        );

        app.add_systems(
            FixedUpdate,
            (
                flight_dynamics_system.in_set(FlightSet::Dynamics),
                transform_sync_system.in_set(FlightSet::Presentation),
            ),
        );

        if let Some(id) = self.peer_id {
            info!("Peer sync enabled as {}", id);
            app.insert_resource(PeerSync::new(id))
                .add_systems(Update, peer_sync_system);
        }
    }
}

/// Components for a new flight entity resting at the configured spawn.
pub fn flight_vehicle<G: GroundProbe + ?Sized>(
    engine: &FlightDynamicsEngine,
    ground: &G,
) -> (VehicleState, EngineBank, ControlInputs, Telemetry, Transform) {
    let state = engine.spawn_state(ground);
    let engines = engine.engine_bank();
    let telemetry = engine.telemetry(&state, &engines, ground);
    (
        state,
        engines,
        ControlInputs::default(),
        telemetry,
        Transform::default(),
    )
}
