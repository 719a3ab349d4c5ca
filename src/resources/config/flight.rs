use std::path::Path;

use bevy::log::{error, info};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::validate::{finite, non_negative};
use super::{EngineConfig, GroundContactConfig, PhysicsConstants};
use crate::components::LandingGear;
use crate::utils::ConfigError;

/// Where and how the vehicle appears at spawn and respawn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnConfig {
    /// Requested origin position [m]; raised if the gear would sit below ground
    pub position: Vector3<f64>,
    pub heading_degrees: f64,
    /// Gap left under the lowest gear point when raised [m]
    #[serde(default)]
    pub clearance: f64,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            heading_degrees: 0.0,
            clearance: 0.0,
        }
    }
}

/// Complete description of one simulated vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightConfig {
    pub physics: PhysicsConstants,
    pub engines: EngineConfig,
    pub gear: LandingGear,
    pub contact: GroundContactConfig,
    pub spawn: SpawnConfig,
}

impl FlightConfig {
    /// Twin-engine aircraft on a tricycle gear, hard floor contact.
    pub fn light_twin() -> Self {
        Self {
            physics: PhysicsConstants::light_twin(),
            engines: EngineConfig::twin(),
            gear: LandingGear::tricycle(1.0, 2.5, 3.0),
            contact: GroundContactConfig::hard_floor(),
            spawn: SpawnConfig::default(),
        }
    }

    /// Single-engine aircraft on sprung gear.
    pub fn single_prop() -> Self {
        Self {
            physics: PhysicsConstants {
                thrust_scale: 5.0,
                ..PhysicsConstants::light_twin()
            },
            engines: EngineConfig::single(),
            gear: LandingGear::tricycle(0.8, 1.6, 2.4),
            contact: GroundContactConfig::suspension(),
            spawn: SpawnConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.physics.validate()?;
        self.engines.validate()?;
        if self.gear.is_empty() {
            return Err(ConfigError::invalid(
                "gear.points",
                "at least one gear point is required",
            ));
        }
        for point in &self.gear.points {
            if point.offset.iter().any(|v| !v.is_finite()) {
                return Err(ConfigError::invalid(
                    "gear.points",
                    format!("offset of '{}' must be finite", point.name),
                ));
            }
        }

        if self.spawn.position.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::invalid("spawn.position", "must be finite"));
        }
        finite("spawn.heading_degrees", self.spawn.heading_degrees)?;
        non_negative("spawn.clearance", self.spawn.clearance)?;

        self.contact
            .validate(self.physics.max_dt, self.gear.points.len())?;
        Ok(())
    }

    /// Parse and validate a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: FlightConfig = serde_yaml::from_str(yaml)?;
        if let Err(e) = config.validate() {
            error!("Rejected flight config: {}", e);
            return Err(e);
        }
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&yaml)?;
        info!(
            "Loaded flight config from {} ({} engines, {} gear points)",
            path.display(),
            config.engines.count,
            config.gear.points.len()
        );
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }
}
