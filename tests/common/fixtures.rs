use flightsim::{
    components::{ControlInputs, EngineBank, EngineState, VehicleState},
    resources::{FlatGround, FlightConfig, GroundContactConfig},
    systems::FlightDynamicsEngine,
};
use nalgebra::{UnitQuaternion, Vector3};

pub const DT: f64 = 1.0 / 60.0;

/// Light twin on a hard floor
pub fn create_test_engine() -> FlightDynamicsEngine {
    FlightDynamicsEngine::new(FlightConfig::light_twin()).expect("preset is valid")
}

/// Light twin on sprung gear
pub fn create_suspension_engine() -> FlightDynamicsEngine {
    let config = FlightConfig {
        contact: GroundContactConfig::suspension(),
        ..FlightConfig::light_twin()
    };
    FlightDynamicsEngine::new(config).expect("preset is valid")
}

pub fn flat_ground() -> FlatGround {
    FlatGround::new(0.0)
}

/// Level flight at `altitude` with `speed` along world +Z
pub fn create_cruise_state(altitude: f64, speed: f64) -> VehicleState {
    let mut state = VehicleState::at_rest(
        Vector3::new(0.0, altitude, 0.0),
        UnitQuaternion::identity(),
    );
    state.linear_velocity = Vector3::new(0.0, 0.0, speed);
    state
}

/// Engine bank with every engine already spooled up
pub fn create_ready_bank(count: usize) -> EngineBank {
    EngineBank {
        engines: vec![EngineState::ready(); count],
    }
}

pub fn full_throttle() -> ControlInputs {
    ControlInputs {
        throttle: 1.0,
        ..Default::default()
    }
}
