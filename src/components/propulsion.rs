use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Fully spooled engine, in percent
pub const FULL_SPOOL: f64 = 100.0;

/// Phase of an engine's spool cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpoolPhase {
    Off,
    SpoolingUp,
    Ready,
    SpoolingDown,
}

/// Represents the current state of an engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineState {
    /// Spool progress (0.0 to 100.0)
    pub percent_spooled: f64,
    /// Whether the pilot has the engine switched on
    pub commanded_on: bool,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            percent_spooled: 0.0,
            commanded_on: false,
        }
    }
}

impl EngineState {
    /// An engine already running at full spool
    pub fn ready() -> Self {
        Self {
            percent_spooled: FULL_SPOOL,
            commanded_on: true,
        }
    }

    pub fn phase(&self) -> SpoolPhase {
        match (self.commanded_on, self.percent_spooled) {
            (true, p) if p >= FULL_SPOOL => SpoolPhase::Ready,
            (false, p) if p <= 0.0 => SpoolPhase::Off,
            (true, _) => SpoolPhase::SpoolingUp,
            (false, _) => SpoolPhase::SpoolingDown,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.percent_spooled >= FULL_SPOOL
    }
}

/// Policy deciding when the engine bank produces thrust
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThrustGate {
    /// Every engine must be fully spooled (twin-engine aircraft)
    AllReady,
    /// Any engine switched on is enough (single-engine aircraft)
    AnyRunning,
}

impl ThrustGate {
    /// An empty bank never produces thrust.
    pub fn is_open(&self, bank: &EngineBank) -> bool {
        if bank.engines.is_empty() {
            return false;
        }
        match self {
            ThrustGate::AllReady => bank.engines.iter().all(EngineState::is_ready),
            ThrustGate::AnyRunning => bank.engines.iter().any(|engine| engine.commanded_on),
        }
    }
}

/// Component to track the state of all engines
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineBank {
    pub engines: Vec<EngineState>,
}

impl Default for EngineBank {
    fn default() -> Self {
        Self::new(2)
    }
}

impl EngineBank {
    /// Creates a bank of `num_engines` engines, all off
    pub fn new(num_engines: usize) -> Self {
        Self {
            engines: vec![EngineState::default(); num_engines],
        }
    }

    /// Switches every engine on or off
    pub fn command_all(&mut self, on: bool) {
        for engine in &mut self.engines {
            engine.commanded_on = on;
        }
    }

    /// Switches a single engine; out-of-range indices are ignored
    pub fn command(&mut self, engine_index: usize, on: bool) {
        if let Some(engine) = self.engines.get_mut(engine_index) {
            engine.commanded_on = on;
        }
    }

    /// Mean spool over the bank, 0 for an empty bank
    pub fn mean_spool(&self) -> f64 {
        if self.engines.is_empty() {
            return 0.0;
        }
        self.engines.iter().map(|e| e.percent_spooled).sum::<f64>() / self.engines.len() as f64
    }
}
