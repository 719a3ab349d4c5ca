use serde::{Deserialize, Serialize};

use super::validate::{non_negative, positive};
use crate::utils::ConfigError;

/// How gear/ground penetration is resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GroundContactPolicy {
    /// Snap the vehicle out of the ground after integration
    HardFloor {
        /// Horizontal velocity decay while in contact [1/s]
        friction: f64,
        /// Angular velocity decay while in contact [1/s]
        angular_friction: f64,
    },
    /// Spring-damper per gear point, applied as a force
    Suspension {
        /// Spring acceleration per metre of penetration, per gear point [1/s^2]
        stiffness: f64,
        /// Damping per m/s of vertical velocity, per gear point [1/s]
        damping: f64,
        /// Horizontal rolling resistance while on the ground [1/s]
        rolling_friction: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundContactConfig {
    pub policy: GroundContactPolicy,
    /// Clearance below which a gear point counts as touching [m]
    pub contact_tolerance: f64,
    /// Extra clearance needed to leave the ground once grounded [m]; 0 disables hysteresis
    #[serde(default)]
    pub release_margin: f64,
}

impl GroundContactConfig {
    pub fn hard_floor() -> Self {
        Self {
            policy: GroundContactPolicy::HardFloor {
                friction: 0.08,
                angular_friction: 4.0,
            },
            contact_tolerance: 0.05,
            release_margin: 0.0,
        }
    }

    pub fn suspension() -> Self {
        Self {
            policy: GroundContactPolicy::Suspension {
                stiffness: 15.0,
                damping: 6.0,
                rolling_friction: 0.08,
            },
            contact_tolerance: 0.05,
            release_margin: 0.0,
        }
    }

    /// Every penetrating gear point adds its own spring and damper, so the
    /// stability bounds apply to the sums over `gear_points`:
    /// `n * stiffness * max_dt^2 < 1` and `n * damping * max_dt < 1`.
    pub fn validate(&self, max_dt: f64, gear_points: usize) -> Result<(), ConfigError> {
        non_negative("contact.contact_tolerance", self.contact_tolerance)?;
        non_negative("contact.release_margin", self.release_margin)?;
        match self.policy {
            GroundContactPolicy::HardFloor {
                friction,
                angular_friction,
            } => {
                non_negative("contact.friction", friction)?;
                non_negative("contact.angular_friction", angular_friction)?;
            }
            GroundContactPolicy::Suspension {
                stiffness,
                damping,
                rolling_friction,
            } => {
                positive("contact.stiffness", stiffness)?;
                non_negative("contact.damping", damping)?;
                non_negative("contact.rolling_friction", rolling_friction)?;

                let points = gear_points.max(1) as f64;
                let spring = points * stiffness * max_dt * max_dt;
                if spring >= 1.0 {
                    return Err(ConfigError::invalid(
                        "contact.stiffness",
                        format!(
                            "{} points * stiffness * max_dt^2 = {} must stay below 1",
                            gear_points, spring
                        ),
                    ));
                }
                let damper = points * damping * max_dt;
                if damper >= 1.0 {
                    return Err(ConfigError::invalid(
                        "contact.damping",
                        format!(
                            "{} points * damping * max_dt = {} must stay below 1",
                            gear_points, damper
                        ),
                    ));
                }
            }
        }
        Ok(())
    }
}
