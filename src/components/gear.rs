use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::resources::GroundProbe;

/// A landing-gear attachment point in the body frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GearPoint {
    pub name: String,
    /// Contact point relative to the vehicle origin, body frame [m]
    pub offset: Vector3<f64>,
}

impl GearPoint {
    pub fn new(name: impl Into<String>, offset: Vector3<f64>) -> Self {
        Self {
            name: name.into(),
            offset,
        }
    }

    /// Contact point in the world frame for the given pose
    pub fn world_position(
        &self,
        position: &Vector3<f64>,
        orientation: &UnitQuaternion<f64>,
    ) -> Vector3<f64> {
        position + orientation * self.offset
    }
}

/// The set of gear points tested against the ground every tick
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandingGear {
    pub points: Vec<GearPoint>,
}

impl LandingGear {
    pub fn new(points: Vec<GearPoint>) -> Self {
        Self { points }
    }

    /// Nose wheel ahead of the origin, two mains either side of it, all `height` below it.
    pub fn tricycle(height: f64, wheelbase: f64, track: f64) -> Self {
        Self::new(vec![
            GearPoint::new("nose", Vector3::new(0.0, -height, wheelbase)),
            GearPoint::new("left main", Vector3::new(track / 2.0, -height, 0.0)),
            GearPoint::new("right main", Vector3::new(-track / 2.0, -height, 0.0)),
        ])
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Height of each gear point above the ground beneath it; negative when penetrating.
    pub fn clearances<'a, G: GroundProbe + ?Sized>(
        &'a self,
        position: &'a Vector3<f64>,
        orientation: &'a UnitQuaternion<f64>,
        ground: &'a G,
    ) -> impl Iterator<Item = (&'a GearPoint, Vector3<f64>, f64)> + 'a {
        self.points.iter().map(move |point| {
            let world = point.world_position(position, orientation);
            let clearance = world.y - ground.height_at(world.x, world.z);
            (point, world, clearance)
        })
    }

    /// Smallest clearance over all points, `f64::INFINITY` without gear.
    pub fn min_clearance<G: GroundProbe + ?Sized>(
        &self,
        position: &Vector3<f64>,
        orientation: &UnitQuaternion<f64>,
        ground: &G,
    ) -> f64 {
        self.clearances(position, orientation, ground)
            .map(|(_, _, clearance)| clearance)
            .fold(f64::INFINITY, f64::min)
    }

    /// Index and depth of the deepest penetrating point, if any point is below ground.
    pub fn deepest_penetration<G: GroundProbe + ?Sized>(
        &self,
        position: &Vector3<f64>,
        orientation: &UnitQuaternion<f64>,
        ground: &G,
    ) -> Option<(usize, f64)> {
        self.clearances(position, orientation, ground)
            .enumerate()
            .filter(|(_, (_, _, clearance))| *clearance < 0.0)
            .map(|(index, (_, _, clearance))| (index, -clearance))
            .fold(None, |deepest, (index, depth)| match deepest {
                Some((_, best)) if best >= depth => deepest,
                _ => Some((index, depth)),
            })
    }
}
