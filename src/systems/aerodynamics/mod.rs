mod air_data;
mod force_calculator;

pub use air_data::AirData;
pub use force_calculator::{
    calculate_aero_forces, drag_magnitude, lift_coefficient, lift_magnitude, stall_factor,
    AeroForces,
};
