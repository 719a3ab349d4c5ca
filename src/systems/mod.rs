pub mod aerodynamics;
pub mod collisions;
mod flight;
pub mod physics;
pub mod propulsion;

pub use aerodynamics::{calculate_aero_forces, AeroForces, AirData};
pub use collisions::{is_on_ground, resolve_hard_floor, FloorCorrection};
pub use flight::{flight_dynamics_system, peer_sync_system, transform_sync_system};
pub use physics::{FlightDynamicsEngine, NetAcceleration};
pub use propulsion::{calculate_thrust, update_engine_bank, update_engine_spool};
