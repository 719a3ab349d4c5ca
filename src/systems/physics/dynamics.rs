use bevy::log::{debug, info};
use bevy::prelude::Resource;
use nalgebra::Vector3;

use super::{control_torque, integrate_rotation, integrate_translation, NetAcceleration};
use crate::components::{
    ControlInputs, EngineBank, FlightPhase, LandingGear, Telemetry, VehicleState,
};
use crate::resources::{FlightConfig, GroundContactPolicy, GroundProbe};
use crate::systems::aerodynamics::{calculate_aero_forces, AirData};
use crate::systems::collisions::{
    is_on_ground, resolve_hard_floor, rolling_friction, suspension_force,
};
use crate::systems::propulsion::{calculate_thrust, update_engine_bank};
use crate::utils::{heading_degrees, rad_to_deg};

/// The flight model: a validated configuration plus the per-tick update.
///
/// The engine holds no per-vehicle state. Hosts own the [`VehicleState`] and
/// [`EngineBank`] and lend them to [`FlightDynamicsEngine::step`] once per
/// tick; the step never performs I/O and always returns.
#[derive(Resource, Debug, Clone)]
pub struct FlightDynamicsEngine {
    config: FlightConfig,
}

impl FlightDynamicsEngine {
    /// Fails fast on any invalid constant.
    pub fn new(config: FlightConfig) -> Result<Self, crate::utils::ConfigError> {
        config.validate()?;
        info!(
            "Flight dynamics ready: {} engine(s), {:?} gate, max tick {} s",
            config.engines.count, config.engines.thrust_gate, config.physics.max_dt
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &FlightConfig {
        &self.config
    }

    pub fn gear(&self) -> &LandingGear {
        &self.config.gear
    }

    /// Spawn pose from the configuration, resting on the given ground.
    pub fn spawn_state<G: GroundProbe + ?Sized>(&self, ground: &G) -> VehicleState {
        VehicleState::spawn(
            &self.config.spawn,
            &self.config.gear,
            ground,
            self.config.contact.contact_tolerance,
        )
    }

    /// Fresh engine bank, all engines off.
    pub fn engine_bank(&self) -> EngineBank {
        self.config.engines.bank()
    }

    /// Ticks must be positive, finite and no longer than `max_dt`.
    pub fn accepts_dt(&self, dt: f64) -> bool {
        dt.is_finite() && dt > 0.0 && dt <= self.config.physics.max_dt
    }

    /// Advance the vehicle by `dt` seconds.
    ///
    /// A tick that [`accepts_dt`](Self::accepts_dt) rejects is skipped: nothing
    /// is mutated and the telemetry of the current state is returned.
    pub fn step<G: GroundProbe + ?Sized>(
        &self,
        state: &mut VehicleState,
        engines: &mut EngineBank,
        controls: &ControlInputs,
        dt: f64,
        ground: &G,
    ) -> Telemetry {
        if !self.accepts_dt(dt) {
            debug!(
                "Skipping tick: dt = {} s outside (0, {}]",
                dt, self.config.physics.max_dt
            );
            return self.telemetry(state, engines, ground);
        }

        let controls = controls.sanitized();
        let physics = &self.config.physics;
        let contact = &self.config.contact;
        let gear = &self.config.gear;
        let was_on_ground = state.on_ground;

        let gate_open = update_engine_bank(engines, &self.config.engines, dt);

        let on_ground = is_on_ground(
            gear,
            &state.position,
            &state.orientation,
            ground,
            contact.contact_tolerance,
            contact.release_margin,
            was_on_ground,
        );

        // Translational
        let air_data = AirData::calculate(
            &state.orientation,
            &state.linear_velocity,
            physics.lift_airspeed_threshold,
        );
        let aero = calculate_aero_forces(physics, &air_data, &state.orientation, controls.gear_down);
        let thrust = calculate_thrust(
            physics,
            gate_open,
            controls.throttle,
            &state.orientation,
            &state.linear_velocity,
        );

        let ground_force = match contact.policy {
            GroundContactPolicy::Suspension {
                stiffness,
                damping,
                rolling_friction: friction,
            } => {
                let mut force = suspension_force(gear, state, ground, stiffness, damping);
                if on_ground {
                    force += rolling_friction(&state.linear_velocity, friction);
                }
                force
            }
            GroundContactPolicy::HardFloor { .. } => Vector3::zeros(),
        };

        let net = NetAcceleration {
            thrust,
            aerodynamic: aero.total(),
            ground: ground_force,
            ..NetAcceleration::gravity_only(physics.gravity)
        };
        integrate_translation(state, &net.total(), dt, physics.max_airspeed);

        // Rotational
        let torque = control_torque(physics, &controls, air_data.airspeed, on_ground);
        let angular_drag = if on_ground {
            physics.ground_angular_drag
        } else {
            physics.angular_drag
        };
        integrate_rotation(state, &torque, angular_drag, dt);

        if let GroundContactPolicy::HardFloor {
            friction,
            angular_friction,
        } = contact.policy
        {
            if let Some(correction) =
                resolve_hard_floor(state, gear, ground, friction, angular_friction, dt)
            {
                if !was_on_ground {
                    debug!(
                        "Floor contact on '{}', pushed up {:.3} m",
                        gear.points[correction.gear_index].name, correction.depth
                    );
                }
            }
        }

        state.on_ground = is_on_ground(
            gear,
            &state.position,
            &state.orientation,
            ground,
            contact.contact_tolerance,
            contact.release_margin,
            was_on_ground,
        );
        if state.on_ground != was_on_ground {
            debug!(
                "{:?} at {:.1} m/s",
                FlightPhase::from_contact(state.on_ground),
                state.airspeed()
            );
        }

        self.telemetry(state, engines, ground)
    }

    /// Derived flight data for the current state.
    pub fn telemetry<G: GroundProbe + ?Sized>(
        &self,
        state: &VehicleState,
        engines: &EngineBank,
        ground: &G,
    ) -> Telemetry {
        let physics = &self.config.physics;
        let air_data = AirData::calculate(
            &state.orientation,
            &state.linear_velocity,
            physics.lift_airspeed_threshold,
        );
        let ground_height = ground.height_at(state.position.x, state.position.z);

        Telemetry {
            airspeed: air_data.airspeed,
            altitude_above_ground: (state.position.y - ground_height).max(0.0),
            heading_degrees: heading_degrees(&state.orientation),
            on_ground: state.on_ground,
            vertical_speed: state.linear_velocity.y,
            angle_of_attack_degrees: rad_to_deg(air_data.angle_of_attack),
            stalled: air_data.is_aerodynamic()
                && air_data.angle_of_attack.abs() > physics.stall_angle(),
            engine_spool_percent: engines.mean_spool(),
            thrust_available: self.config.engines.thrust_gate.is_open(engines),
            phase: FlightPhase::from_contact(state.on_ground),
        }
    }
}
