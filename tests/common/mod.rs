#![allow(dead_code)]

mod assertions;
mod fixtures;
mod test_app;

// Re-export
pub use assertions::{
    assert_attitude_eq, assert_gear_above_ground, assert_position_eq, assert_state_valid,
    assert_telemetry_valid,
};

pub use fixtures::*;
pub use test_app::{TestApp, TestAppBuilder};
