use flightsim::{
    components::ControlInputs,
    resources::{FlightConfig, GroundContactPolicy},
    systems::FlightDynamicsEngine,
    utils::{ConfigError, SimError},
};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

use crate::common::{flat_ground, DT};

const LIGHT_TWIN_YAML: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/configs/light_twin.yaml");

#[test]
fn test_shipped_config_matches_preset() {
    let loaded = FlightConfig::load(LIGHT_TWIN_YAML).unwrap();
    assert_eq!(loaded, FlightConfig::light_twin());
}

#[test]
fn test_loaded_config_drives_engine() {
    let engine = FlightDynamicsEngine::new(FlightConfig::load(LIGHT_TWIN_YAML).unwrap()).unwrap();
    let ground = flat_ground();
    let mut state = engine.spawn_state(&ground);
    let mut bank = engine.engine_bank();

    let telemetry = engine.step(&mut state, &mut bank, &ControlInputs::default(), DT, &ground);
    assert!(telemetry.on_ground);
    assert_eq!(bank.engines.len(), 2);
}

#[test]
fn test_single_prop_round_trips_through_file() {
    let file = NamedTempFile::new().unwrap();
    FlightConfig::single_prop().save(file.path()).unwrap();

    let loaded = FlightConfig::load(file.path()).unwrap();
    assert!(matches!(
        loaded.contact.policy,
        GroundContactPolicy::Suspension { .. }
    ));
    assert!(FlightDynamicsEngine::new(loaded).is_ok());
}

#[test]
fn test_unstable_spring_is_rejected() {
    let mut yaml = std::fs::read_to_string(LIGHT_TWIN_YAML).unwrap();
    yaml = yaml.replace(
        "    type: hard_floor\n    friction: 0.08\n    angular_friction: 4.0\n",
        "    type: suspension\n    stiffness: 200.0\n    damping: 6.0\n    rolling_friction: 0.08\n",
    );
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    let err = FlightConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidParameter { .. }));

    let wrapped: SimError = err.into();
    assert!(wrapped.to_string().starts_with("Config error"));
}

#[test]
fn test_negative_tolerance_is_rejected() {
    let mut config = FlightConfig::light_twin();
    config.contact.contact_tolerance = -0.1;
    assert!(FlightDynamicsEngine::new(config).is_err());
}
