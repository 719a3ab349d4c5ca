use serde::{Deserialize, Serialize};

use super::validate::positive;
use crate::components::{EngineBank, ThrustGate};
use crate::utils::ConfigError;

/// Engine bank layout and spool behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Number of engines in the bank
    pub count: usize,
    /// Spool-up rate [%/s]
    pub spool_up_rate: f64,
    /// Spool-down rate [%/s]
    pub spool_down_rate: f64,
    pub thrust_gate: ThrustGate,
}

impl EngineConfig {
    /// Two engines that must both reach full spool; spin-down twice as fast as spin-up.
    pub fn twin() -> Self {
        Self {
            count: 2,
            spool_up_rate: 20.0,
            spool_down_rate: 40.0,
            thrust_gate: ThrustGate::AllReady,
        }
    }

    /// A single engine producing thrust as soon as it is switched on.
    pub fn single() -> Self {
        Self {
            count: 1,
            spool_up_rate: 50.0,
            spool_down_rate: 100.0,
            thrust_gate: ThrustGate::AnyRunning,
        }
    }

    /// A fresh bank of engines, all off
    pub fn bank(&self) -> EngineBank {
        EngineBank::new(self.count)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("engines.spool_up_rate", self.spool_up_rate)?;
        positive("engines.spool_down_rate", self.spool_down_rate)?;
        Ok(())
    }
}
