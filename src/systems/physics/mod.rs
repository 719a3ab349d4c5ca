mod dynamics;
mod force_calculator;
mod integrator;

pub use dynamics::FlightDynamicsEngine;
pub use force_calculator::NetAcceleration;
pub use integrator::{
    control_authority, control_torque, integrate_rotation, integrate_translation,
};
