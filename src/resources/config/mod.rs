pub mod contact;
pub mod engine;
pub mod flight;
pub mod physics;
mod validate;

pub use contact::{GroundContactConfig, GroundContactPolicy};
pub use engine::EngineConfig;
pub use flight::{FlightConfig, SpawnConfig};
pub use physics::{ControlSensitivity, PhysicsConstants};
