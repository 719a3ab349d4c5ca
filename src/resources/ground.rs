use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::utils::ConfigError;

/// Host-supplied ground height query over world (x, z).
///
/// The dynamics core only ever asks "how high is the surface below this
/// point"; a flat plane, a sampled heightmap and a mesh raycast all fit.
pub trait GroundProbe {
    fn height_at(&self, x: f64, z: f64) -> f64;
}

impl<F> GroundProbe for F
where
    F: Fn(f64, f64) -> f64,
{
    fn height_at(&self, x: f64, z: f64) -> f64 {
        self(x, z)
    }
}

/// The ground shared by every flight entity in a Bevy app.
#[derive(Resource)]
pub struct GroundSurface(pub Box<dyn GroundProbe + Send + Sync>);

impl GroundSurface {
    pub fn new(probe: impl GroundProbe + Send + Sync + 'static) -> Self {
        Self(Box::new(probe))
    }

    pub fn probe(&self) -> &(dyn GroundProbe + Send + Sync) {
        self.0.as_ref()
    }
}

impl Default for GroundSurface {
    fn default() -> Self {
        Self::new(FlatGround::default())
    }
}

impl std::fmt::Debug for GroundSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroundSurface").finish_non_exhaustive()
    }
}

/// Infinite horizontal plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlatGround {
    pub height: f64,
}

impl FlatGround {
    pub fn new(height: f64) -> Self {
        Self { height }
    }
}

impl Default for FlatGround {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl GroundProbe for FlatGround {
    fn height_at(&self, _x: f64, _z: f64) -> f64 {
        self.height
    }
}

/// Regular grid of heights sampled with bilinear interpolation.
///
/// Queries outside the grid clamp to the nearest edge sample. Deserialized
/// fields go through [`HeightField::new`], so every instance is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawHeightField", into = "RawHeightField")]
pub struct HeightField {
    /// World (x, z) of sample (0, 0)
    origin: [f64; 2],
    /// Spacing between samples [m]
    cell_size: f64,
    /// Samples along x
    columns: usize,
    /// Samples along z
    rows: usize,
    /// Row-major heights, `rows * columns` long
    heights: Vec<f64>,
}

/// Unchecked wire form of [`HeightField`]
#[derive(Serialize, Deserialize)]
struct RawHeightField {
    origin: [f64; 2],
    cell_size: f64,
    columns: usize,
    rows: usize,
    heights: Vec<f64>,
}

impl TryFrom<RawHeightField> for HeightField {
    type Error = ConfigError;

    fn try_from(raw: RawHeightField) -> Result<Self, Self::Error> {
        Self::new(raw.origin, raw.cell_size, raw.columns, raw.rows, raw.heights)
    }
}

impl From<HeightField> for RawHeightField {
    fn from(field: HeightField) -> Self {
        Self {
            origin: field.origin,
            cell_size: field.cell_size,
            columns: field.columns,
            rows: field.rows,
            heights: field.heights,
        }
    }
}

impl HeightField {
    pub fn new(
        origin: [f64; 2],
        cell_size: f64,
        columns: usize,
        rows: usize,
        heights: Vec<f64>,
    ) -> Result<Self, ConfigError> {
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(ConfigError::invalid(
                "cell_size",
                format!("must be positive, got {cell_size}"),
            ));
        }
        if columns < 2 || rows < 2 {
            return Err(ConfigError::invalid(
                "heights",
                "a height field needs at least 2x2 samples",
            ));
        }
        if columns.checked_mul(rows) != Some(heights.len()) {
            return Err(ConfigError::invalid(
                "heights",
                format!("expected {columns}x{rows} samples, got {}", heights.len()),
            ));
        }
        if heights.iter().any(|h| !h.is_finite()) {
            return Err(ConfigError::invalid("heights", "samples must be finite"));
        }
        if origin.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::invalid("origin", "must be finite"));
        }
        Ok(Self {
            origin,
            cell_size,
            columns,
            rows,
            heights,
        })
    }

    pub fn origin(&self) -> [f64; 2] {
        self.origin
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Sample counts along x and z
    pub fn dimensions(&self) -> (usize, usize) {
        (self.columns, self.rows)
    }

    fn sample(&self, column: usize, row: usize) -> f64 {
        self.heights[row * self.columns + column]
    }
}

impl GroundProbe for HeightField {
    fn height_at(&self, x: f64, z: f64) -> f64 {
        let max_u = (self.columns - 1) as f64;
        let max_v = (self.rows - 1) as f64;
        let u = ((x - self.origin[0]) / self.cell_size).clamp(0.0, max_u);
        let v = ((z - self.origin[1]) / self.cell_size).clamp(0.0, max_v);

        // NaN coordinates fall back to the origin sample.
        let u = if u.is_nan() { 0.0 } else { u };
        let v = if v.is_nan() { 0.0 } else { v };

        let c0 = (u.floor() as usize).min(self.columns - 2);
        let r0 = (v.floor() as usize).min(self.rows - 2);
        let fu = u - c0 as f64;
        let fv = v - r0 as f64;

        let h00 = self.sample(c0, r0);
        let h10 = self.sample(c0 + 1, r0);
        let h01 = self.sample(c0, r0 + 1);
        let h11 = self.sample(c0 + 1, r0 + 1);

        let near = h00 + (h10 - h00) * fu;
        let far = h01 + (h11 - h01) * fu;
        near + (far - near) * fv
    }
}
