mod ground;

pub use ground::{
    is_on_ground, resolve_hard_floor, rolling_friction, suspension_force, FloorCorrection,
};
