use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::components::VehicleState;
use crate::utils::{renormalize, NetworkError, NORMALIZE_EPSILON};

/// Pose of one vehicle as broadcast to peers.
///
/// Encoded as JSON: `position` is `[x, y, z]` and `orientation` is the
/// quaternion `[i, j, k, w]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeerSnapshot {
    pub id: Uuid,
    pub position: Vector3<f64>,
    pub orientation: UnitQuaternion<f64>,
}

impl PeerSnapshot {
    pub fn capture(id: Uuid, state: &VehicleState) -> Self {
        Self {
            id,
            position: state.position,
            orientation: state.orientation,
        }
    }

    pub fn to_json(&self) -> Result<String, NetworkError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a peer message. Non-finite poses are rejected and the
    /// orientation is renormalized, since peers are not trusted.
    pub fn from_json(payload: &str) -> Result<Self, NetworkError> {
        let mut snapshot: PeerSnapshot = serde_json::from_str(payload)?;
        let finite = snapshot.position.iter().all(|v| v.is_finite())
            && snapshot.orientation.coords.iter().all(|v| v.is_finite());
        if !finite {
            return Err(NetworkError::NonFinite);
        }
        if snapshot.orientation.as_ref().norm() <= NORMALIZE_EPSILON {
            return Err(NetworkError::DegenerateOrientation);
        }
        snapshot.orientation = renormalize(&snapshot.orientation);
        Ok(snapshot)
    }
}
