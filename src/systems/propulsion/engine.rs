use bevy::log::debug;
use nalgebra::{UnitQuaternion, Vector3};

use crate::components::{EngineBank, EngineState, SpoolPhase};
use crate::components::propulsion::FULL_SPOOL;
use crate::resources::{EngineConfig, PhysicsConstants};
use crate::utils::body_forward;

/// Advances one engine's spool toward 100% when switched on, toward 0% when off.
/// Spool is clamped to [0, 100] and carries no momentum between ticks.
pub fn update_engine_spool(engine: &mut EngineState, config: &EngineConfig, dt: f64) {
    let delta = if engine.commanded_on {
        config.spool_up_rate * dt
    } else {
        -config.spool_down_rate * dt
    };
    engine.percent_spooled = (engine.percent_spooled + delta).clamp(0.0, FULL_SPOOL);
}

/// Advances every engine in the bank and reports whether the thrust gate is open afterwards.
pub fn update_engine_bank(bank: &mut EngineBank, config: &EngineConfig, dt: f64) -> bool {
    for (index, engine) in bank.engines.iter_mut().enumerate() {
        let before = engine.phase();
        update_engine_spool(engine, config, dt);
        let after = engine.phase();
        if before != after && matches!(after, SpoolPhase::Ready | SpoolPhase::Off) {
            debug!("Engine {} is now {:?}", index, after);
        }
    }
    config.thrust_gate.is_open(bank)
}

/// Scalar thrust acceleration [m/s^2]; zero whenever the gate is closed.
pub fn thrust_magnitude(
    constants: &PhysicsConstants,
    throttle: f64,
    forward_airspeed: f64,
    gate_open: bool,
) -> f64 {
    if !gate_open {
        return 0.0;
    }
    let ram_factor = 1.0 + constants.ram_air_gain * forward_airspeed.max(0.0);
    (throttle * constants.thrust_scale * ram_factor).max(0.0)
}

/// Thrust acceleration in the world frame, along the nose.
///
/// `gate_open` is the gate state reported by [`update_engine_bank`] this tick.
pub fn calculate_thrust(
    constants: &PhysicsConstants,
    gate_open: bool,
    throttle: f64,
    orientation: &UnitQuaternion<f64>,
    velocity: &Vector3<f64>,
) -> Vector3<f64> {
    let forward = orientation * body_forward();
    let magnitude = thrust_magnitude(
        constants,
        throttle,
        velocity.dot(&forward),
        gate_open,
    );
    forward * magnitude
}
