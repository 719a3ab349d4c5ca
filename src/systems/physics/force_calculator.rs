use nalgebra::Vector3;

/// Per-source accelerations acting on the vehicle during one tick, world frame [m/s^2]
#[derive(Debug, Clone, PartialEq)]
pub struct NetAcceleration {
    pub gravity: Vector3<f64>,
    pub thrust: Vector3<f64>,
    pub aerodynamic: Vector3<f64>,
    pub ground: Vector3<f64>,
}

impl NetAcceleration {
    pub fn gravity_only(gravity: f64) -> Self {
        Self {
            gravity: Vector3::new(0.0, -gravity, 0.0),
            thrust: Vector3::zeros(),
            aerodynamic: Vector3::zeros(),
            ground: Vector3::zeros(),
        }
    }

    pub fn total(&self) -> Vector3<f64> {
        self.gravity + self.thrust + self.aerodynamic + self.ground
    }
}
