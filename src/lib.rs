//! Deterministic flight dynamics for a single host-owned vehicle: angle of
//! attack based lift and drag with stall, engine spool-up gating thrust,
//! exponentially damped rotation and ground contact, reported back as
//! telemetry every tick.

pub mod components;
pub mod network;
pub mod plugins;
pub mod resources;
pub mod systems;
pub mod utils;

pub use components::{ControlInputs, EngineBank, Telemetry, VehicleState};
pub use plugins::FlightDynamicsPlugin;
pub use resources::{FlightConfig, GroundProbe};
pub use systems::FlightDynamicsEngine;
