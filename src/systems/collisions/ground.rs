use nalgebra::{UnitQuaternion, Vector3};

use crate::components::{LandingGear, VehicleState};
use crate::resources::GroundProbe;
use crate::utils::decay_retention;

/// Outcome of a hard-floor pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloorCorrection {
    /// How far the vehicle was pushed up [m]
    pub depth: f64,
    /// Gear point that penetrated deepest
    pub gear_index: usize,
}

/// Contact test: any gear point within `tolerance` of the ground.
///
/// With `release_margin > 0` a vehicle that was already grounded stays
/// grounded until its clearance exceeds `tolerance + release_margin`.
pub fn is_on_ground<G: GroundProbe + ?Sized>(
    gear: &LandingGear,
    position: &Vector3<f64>,
    orientation: &UnitQuaternion<f64>,
    ground: &G,
    tolerance: f64,
    release_margin: f64,
    was_on_ground: bool,
) -> bool {
    let threshold = if was_on_ground {
        tolerance + release_margin
    } else {
        tolerance
    };
    gear.min_clearance(position, orientation, ground) <= threshold
}

/// Summed spring-damper acceleration of every penetrating gear point.
/// Each point only ever pushes up.
pub fn suspension_force<G: GroundProbe + ?Sized>(
    gear: &LandingGear,
    state: &VehicleState,
    ground: &G,
    stiffness: f64,
    damping: f64,
) -> Vector3<f64> {
    let vertical_speed = state.linear_velocity.y;
    let push: f64 = gear
        .clearances(&state.position, &state.orientation, ground)
        .filter(|(_, _, clearance)| *clearance < 0.0)
        .map(|(_, _, clearance)| (stiffness * -clearance - damping * vertical_speed).max(0.0))
        .sum();
    Vector3::new(0.0, push, 0.0)
}

/// Rolling resistance opposing horizontal motion.
pub fn rolling_friction(velocity: &Vector3<f64>, coefficient: f64) -> Vector3<f64> {
    Vector3::new(-velocity.x, 0.0, -velocity.z) * coefficient
}

/// Push the vehicle out of the ground by the deepest gear penetration, kill
/// any downward velocity and damp horizontal and angular motion.
pub fn resolve_hard_floor<G: GroundProbe + ?Sized>(
    state: &mut VehicleState,
    gear: &LandingGear,
    ground: &G,
    friction: f64,
    angular_friction: f64,
    dt: f64,
) -> Option<FloorCorrection> {
    let (gear_index, depth) =
        gear.deepest_penetration(&state.position, &state.orientation, ground)?;

    state.position.y += depth;
    if state.linear_velocity.y < 0.0 {
        state.linear_velocity.y = 0.0;
    }

    let retain = decay_retention(friction, dt);
    state.linear_velocity.x *= retain;
    state.linear_velocity.z *= retain;
    state.angular_velocity *= decay_retention(angular_friction, dt);

    Some(FloorCorrection { depth, gear_index })
}
