use std::collections::HashMap;

use bevy::log::info;
use nalgebra::{UnitQuaternion, Vector3};
use uuid::Uuid;

use super::PeerSnapshot;
use crate::utils::{decay_retention, REFERENCE_FRAME_RATE};

/// Fraction of the remaining gap closed per reference frame.
const SMOOTHING_PER_FRAME: f64 = 0.1;

/// A peer's vehicle as displayed locally: the smoothed pose and the last
/// pose it reported.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteVehicle {
    pub position: Vector3<f64>,
    pub orientation: UnitQuaternion<f64>,
    pub target_position: Vector3<f64>,
    pub target_orientation: UnitQuaternion<f64>,
}

impl RemoteVehicle {
    fn from_snapshot(snapshot: &PeerSnapshot) -> Self {
        Self {
            position: snapshot.position,
            orientation: snapshot.orientation,
            target_position: snapshot.position,
            target_orientation: snapshot.orientation,
        }
    }

    /// Move a fraction `alpha` of the way toward the target pose.
    fn blend(&mut self, alpha: f64) {
        self.position = self.position.lerp(&self.target_position, alpha);
        self.orientation = self
            .orientation
            .try_slerp(&self.target_orientation, alpha, 1.0e-9)
            .unwrap_or(self.target_orientation);
    }
}

/// Every known peer vehicle, keyed by peer id.
#[derive(Debug, Clone)]
pub struct RemoteFleet {
    local_id: Uuid,
    vehicles: HashMap<Uuid, RemoteVehicle>,
}

impl RemoteFleet {
    pub fn new(local_id: Uuid) -> Self {
        Self {
            local_id,
            vehicles: HashMap::new(),
        }
    }

    pub fn local_id(&self) -> Uuid {
        self.local_id
    }

    /// Record a peer's latest pose. Our own broadcasts are ignored; an
    /// unseen peer appears directly at its reported pose.
    pub fn ingest(&mut self, snapshot: &PeerSnapshot) {
        if snapshot.id == self.local_id {
            return;
        }
        match self.vehicles.get_mut(&snapshot.id) {
            Some(vehicle) => {
                vehicle.target_position = snapshot.position;
                vehicle.target_orientation = snapshot.orientation;
            }
            None => {
                info!("New peer joined: {}", snapshot.id);
                self.vehicles
                    .insert(snapshot.id, RemoteVehicle::from_snapshot(snapshot));
            }
        }
    }

    /// Smooth every vehicle toward its target over `dt` seconds. The blend
    /// matches a fixed share per reference frame at any frame rate.
    pub fn advance(&mut self, dt: f64) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        let alpha = smoothing_factor(dt);
        for vehicle in self.vehicles.values_mut() {
            vehicle.blend(alpha);
        }
    }

    pub fn remove(&mut self, id: &Uuid) -> Option<RemoteVehicle> {
        self.vehicles.remove(id)
    }

    pub fn get(&self, id: &Uuid) -> Option<&RemoteVehicle> {
        self.vehicles.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Uuid, &RemoteVehicle)> {
        self.vehicles.iter()
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}

/// Share of the gap closed in `dt` seconds.
pub(crate) fn smoothing_factor(dt: f64) -> f64 {
    let rate = -(1.0 - SMOOTHING_PER_FRAME).ln() * REFERENCE_FRAME_RATE;
    1.0 - decay_retention(rate, dt)
}
