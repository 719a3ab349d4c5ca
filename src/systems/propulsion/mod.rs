mod engine;

pub use engine::{calculate_thrust, thrust_magnitude, update_engine_bank, update_engine_spool};
