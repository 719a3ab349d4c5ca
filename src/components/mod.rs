pub mod controls;
pub mod gear;
pub mod propulsion;
pub mod spatial;
pub mod telemetry;

pub use controls::{ControlInputs, YawInput};
pub use gear::{GearPoint, LandingGear};
pub use propulsion::{EngineBank, EngineState, SpoolPhase, ThrustGate};
pub use spatial::{LocalVehicle, VehicleState};
pub use telemetry::{FlightPhase, Telemetry};
