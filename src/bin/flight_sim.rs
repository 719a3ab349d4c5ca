use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use serde::Serialize;
use std::{env, time::Duration};
use uuid::Uuid;

use flightsim::{
    components::{ControlInputs, EngineBank, LocalVehicle, Telemetry, VehicleState, YawInput},
    plugins::{flight_vehicle, FlightDynamicsPlugin, FlightSet},
    resources::{FlightConfig, GroundSurface, PeerSync},
    systems::FlightDynamicsEngine,
    utils::SimError,
};

const ROTATE_SPEED: f64 = 35.0;
const TARGET_CLIMB_RATE: f64 = 4.0;
const GEAR_UP_ALTITUDE: f64 = 30.0;

struct RunOptions {
    config: FlightConfig,
    ticks: usize,
    report_every: usize,
}

#[derive(Serialize)]
struct TickRecord<'a> {
    tick: usize,
    time: f64,
    telemetry: &'a Telemetry,
    broadcasts: usize,
}

fn main() -> Result<(), SimError> {
    let options = parse_args(env::args().skip(1))?;
    let engine = FlightDynamicsEngine::new(options.config)?;
    let timestep = 1.0 / 60.0;

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(LogPlugin::default())
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            timestep,
        )))
        .insert_resource(GroundSurface::default())
        .add_plugins(
            FlightDynamicsPlugin::new(engine.clone())
                .with_timestep(timestep)
                .with_peer_id(Uuid::new_v4()),
        )
        .add_systems(
            FixedUpdate,
            takeoff_autopilot_system.before(FlightSet::Dynamics),
        );

    let ground = GroundSurface::default();
    app.world_mut()
        .spawn((flight_vehicle(&engine, ground.probe()), LocalVehicle));

    app.finish();
    app.cleanup();

    info!("Running {} ticks", options.ticks);
    let mut broadcasts = 0;
    for tick in 1..=options.ticks {
        app.update();

        if let Some(mut sync) = app.world_mut().get_resource_mut::<PeerSync>() {
            broadcasts += sync.drain_outbound().len();
        }

        if tick % options.report_every == 0 || tick == options.ticks {
            let world = app.world_mut();
            let mut query = world.query_filtered::<&Telemetry, With<LocalVehicle>>();
            if let Ok(telemetry) = query.get_single(world) {
                let record = TickRecord {
                    tick,
                    time: tick as f64 * timestep,
                    telemetry,
                    broadcasts,
                };
                println!("{}", serde_json::to_string(&record)?);
            }
        }
    }

    Ok(())
}

/// Engines on, full power once they are ready, rotate at speed, then hold a
/// gentle climb with wings level.
fn takeoff_autopilot_system(
    mut query: Query<
        (&VehicleState, &mut EngineBank, &mut ControlInputs, &Telemetry),
        With<LocalVehicle>,
    >,
) {
    for (state, mut engines, mut controls, telemetry) in query.iter_mut() {
        if engines.engines.iter().any(|e| !e.commanded_on) {
            info!("Starting engines");
            engines.command_all(true);
        }

        let pitch_rate = state.angular_velocity.y;
        let roll_rate = state.angular_velocity.x;

        controls.throttle = if telemetry.thrust_available { 1.0 } else { 0.0 };
        controls.yaw = YawInput::Neutral;
        controls.roll = (-0.5 * roll_rate).clamp(-1.0, 1.0);
        controls.pitch = if telemetry.on_ground {
            if telemetry.airspeed > ROTATE_SPEED {
                0.4
            } else {
                0.0
            }
        } else {
            (0.1 * (TARGET_CLIMB_RATE - telemetry.vertical_speed) - 0.5 * pitch_rate)
                .clamp(-1.0, 1.0)
        };
        controls.gear_down = telemetry.altitude_above_ground < GEAR_UP_ALTITUDE;
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<RunOptions, SimError> {
    let mut options = RunOptions {
        config: FlightConfig::light_twin(),
        ticks: 1800,
        report_every: 30,
    };

    while let Some(arg) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .ok_or_else(|| SimError::InvalidArgument(format!("{} needs a value", name)))
        };
        match arg.as_str() {
            "--config" => options.config = FlightConfig::load(value("--config")?)?,
            "--preset" => {
                options.config = match value("--preset")?.as_str() {
                    "light_twin" => FlightConfig::light_twin(),
                    "single_prop" => FlightConfig::single_prop(),
                    other => {
                        return Err(SimError::InvalidArgument(format!(
                            "unknown preset '{}'",
                            other
                        )))
                    }
                }
            }
            "--ticks" => options.ticks = parse_count("--ticks", &value("--ticks")?)?,
            "--every" => options.report_every = parse_count("--every", &value("--every")?)?,
            other => {
                return Err(SimError::InvalidArgument(format!(
                    "unexpected argument '{}'",
                    other
                )))
            }
        }
    }

    Ok(options)
}

fn parse_count(name: &str, raw: &str) -> Result<usize, SimError> {
    match raw.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(SimError::InvalidArgument(format!(
            "{} expects a positive integer, got '{}'",
            name, raw
        ))),
    }
}
