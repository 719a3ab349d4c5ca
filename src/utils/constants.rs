pub const GRAVITY: f64 = 9.80665; // m/s^2

/// Below this magnitude a vector is treated as zero and never normalized.
pub const NORMALIZE_EPSILON: f64 = 1e-9;

/// Reference frame rate the remote smoothing factor is quoted against.
pub const REFERENCE_FRAME_RATE: f64 = 60.0; // Hz

/// Default peer broadcast rate.
pub const SNAPSHOT_RATE_HZ: f64 = 20.0;
