use crate::utils::SNAPSHOT_RATE_HZ;

/// Fixed-rate broadcast clock fed with frame time.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotScheduler {
    interval: f64,
    accumulated: f64,
}

impl Default for SnapshotScheduler {
    fn default() -> Self {
        Self::new(SNAPSHOT_RATE_HZ)
    }
}

impl SnapshotScheduler {
    /// Non-positive or non-finite rates fall back to the default rate.
    pub fn new(rate_hz: f64) -> Self {
        let rate = if rate_hz.is_finite() && rate_hz > 0.0 {
            rate_hz
        } else {
            SNAPSHOT_RATE_HZ
        };
        Self {
            interval: 1.0 / rate,
            accumulated: 0.0,
        }
    }

    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Advance by `dt` and report whether a snapshot is due. A long frame
    /// yields a single snapshot; the backlog is not replayed.
    pub fn tick(&mut self, dt: f64) -> bool {
        if !dt.is_finite() || dt <= 0.0 {
            return false;
        }
        self.accumulated += dt;
        if self.accumulated < self.interval {
            return false;
        }
        self.accumulated -= self.interval;
        if self.accumulated >= self.interval {
            self.accumulated = 0.0;
        }
        true
    }
}
