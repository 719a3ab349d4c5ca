pub mod config;
pub mod ground;
pub mod peers;

pub use config::{
    ControlSensitivity, EngineConfig, FlightConfig, GroundContactConfig, GroundContactPolicy,
    PhysicsConstants, SpawnConfig,
};
pub use ground::{FlatGround, GroundProbe, GroundSurface, HeightField};
pub use peers::PeerSync;
