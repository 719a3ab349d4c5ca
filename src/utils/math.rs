use nalgebra::{UnitQuaternion, Vector3};
use std::f64::consts::PI;

use super::constants::NORMALIZE_EPSILON;

// Body axes: nose along +Z, canopy along +Y, right wing along -X.
// The world frame is Y-up; the identity attitude faces world +Z (heading 0).

/// Body-frame forward (nose) axis.
#[inline]
pub fn body_forward() -> Vector3<f64> {
    Vector3::z()
}

/// Body-frame up (canopy) axis.
#[inline]
pub fn body_up() -> Vector3<f64> {
    Vector3::y()
}

/// Body-frame right wing axis.
#[inline]
pub fn body_right() -> Vector3<f64> {
    -Vector3::x()
}

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Normalize `v` only when its magnitude is above [`NORMALIZE_EPSILON`].
#[inline]
pub fn safe_normalize(v: &Vector3<f64>) -> Option<Vector3<f64>> {
    v.try_normalize(NORMALIZE_EPSILON)
}

/// `acos` with its argument clamped to [-1, 1] so round-off never yields NaN.
#[inline]
pub fn clamped_acos(dot: f64) -> f64 {
    dot.clamp(-1.0, 1.0).acos()
}

/// Clamp to `[min, max]`, mapping NaN to `fallback`.
#[inline]
pub fn sanitize(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}

/// Fraction of a quantity retained after `dt` seconds of exponential decay at `rate` [1/s].
#[inline]
pub fn decay_retention(rate: f64, dt: f64) -> f64 {
    (-rate * dt).exp()
}

/// Turn body rates `(roll, pitch, yaw)` into a body-frame rotation vector.
pub fn body_rotation_vector(rates: &Vector3<f64>) -> Vector3<f64> {
    body_forward() * rates.x + body_right() * rates.y - body_up() * rates.z
}

/// Compass heading of the nose in degrees, clockwise from world +Z, in [0, 360).
pub fn heading_degrees(attitude: &UnitQuaternion<f64>) -> f64 {
    let forward = attitude * body_forward();
    // Right of +Z (seen from above) is world -X.
    let heading = rad_to_deg((-forward.x).atan2(forward.z)).rem_euclid(360.0);
    if heading >= 360.0 {
        0.0
    } else {
        heading
    }
}

/// Attitude with the nose pointing at `heading_deg` on the horizon.
pub fn attitude_from_heading(heading_deg: f64) -> UnitQuaternion<f64> {
    UnitQuaternion::from_axis_angle(&Vector3::y_axis(), -deg_to_rad(heading_deg))
}

/// Re-normalize an attitude quaternion after composition.
#[inline]
pub fn renormalize(attitude: &UnitQuaternion<f64>) -> UnitQuaternion<f64> {
    UnitQuaternion::new_normalize(attitude.into_inner())
}
