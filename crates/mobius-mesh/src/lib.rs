#![warn(missing_docs)]

//! Discretized Möbius strip model for the mobius kernel.
//!
//! Owns the three strip parameters (radius, width, resolution), derives a
//! full `resolution × resolution` coordinate grid from them, and computes
//! the two scalar metrics of the strip: surface area and boundary length.
//!
//! The pipeline is strictly linear — parameter storage → parameter axes →
//! coordinate grids → derived metrics — and is re-run as a whole on every
//! parameter change. There is no incremental recomputation: radius, width
//! and resolution jointly determine the grid shape and every coordinate, so
//! derived state is either rebuilt completely or left untouched.
//!
//! Both estimators are fixed-resolution Riemann sums with no adaptive
//! refinement and no error estimate; precision is tuned solely through
//! `resolution`.

mod error;
mod grid;
mod trimesh;

pub use error::{ParameterError, Result};
pub use grid::{Grid2, SurfaceGrid};
pub use trimesh::TriangleMesh;

use std::f64::consts::PI;

use mobius_geom::{MobiusSurface, Surface};
use mobius_math::Point2;
use serde::{Deserialize, Serialize};

/// Parameters defining a discretized Möbius strip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StripParams {
    /// Distance from the center axis to the strip mid-line. Must be positive.
    pub radius: f64,
    /// Strip width along the local cross-section direction. Must be positive.
    pub width: f64,
    /// Number of samples per parameter axis. Must be at least 2.
    pub resolution: usize,
}

impl StripParams {
    /// Create a parameter set. Constraints are checked by [`MobiusStrip::new`].
    pub fn new(radius: f64, width: f64, resolution: usize) -> Self {
        Self {
            radius,
            width,
            resolution,
        }
    }

    /// Check the parameter constraints.
    pub fn validate(&self) -> Result<()> {
        if !(self.radius > 0.0) {
            return Err(ParameterError::NonPositiveRadius(self.radius));
        }
        if !(self.width > 0.0) {
            return Err(ParameterError::NonPositiveWidth(self.width));
        }
        if self.resolution < 2 {
            return Err(ParameterError::ResolutionTooSmall(self.resolution));
        }
        Ok(())
    }
}

impl Default for StripParams {
    /// The reference configuration: radius 3.0, width 1.0, resolution 100.
    fn default() -> Self {
        Self {
            radius: 3.0,
            width: 1.0,
            resolution: 100,
        }
    }
}

/// One boundary polyline of the strip, borrowed from the model's grids.
///
/// Each axis slice has `resolution` entries.
#[derive(Debug, Clone, Copy)]
pub struct EdgeCurve<'a> {
    /// X coordinates along the boundary.
    pub x: &'a [f64],
    /// Y coordinates along the boundary.
    pub y: &'a [f64],
    /// Z coordinates along the boundary.
    pub z: &'a [f64],
}

/// A Möbius strip sampled on a uniform parameter grid.
///
/// Construction validates the parameters and samples the full grid eagerly;
/// [`MobiusStrip::update`] re-validates and re-samples everything, so no
/// accessor can ever observe derived state that lags the parameters.
#[derive(Debug, Clone)]
pub struct MobiusStrip {
    params: StripParams,
    surface: MobiusSurface,
    grid: SurfaceGrid,
}

impl MobiusStrip {
    /// Build a strip model from validated parameters.
    pub fn new(params: StripParams) -> Result<Self> {
        params.validate()?;
        let surface = MobiusSurface::new(params.radius, params.width);
        let grid = SurfaceGrid::sample(&surface, params.resolution, params.resolution);
        Ok(Self {
            params,
            surface,
            grid,
        })
    }

    /// Current parameters.
    pub fn params(&self) -> StripParams {
        self.params
    }

    /// The sampled grid: parameter axes plus coordinate arrays.
    pub fn grid(&self) -> &SurfaceGrid {
        &self.grid
    }

    /// Partially update parameters; omitted fields keep their current value.
    ///
    /// The merged parameter set is validated before anything changes. On
    /// success every derived array — both parameter axes and all three
    /// coordinate grids — is recomputed from scratch; on error the previous
    /// state stays fully observable.
    pub fn update(
        &mut self,
        radius: Option<f64>,
        width: Option<f64>,
        resolution: Option<usize>,
    ) -> Result<()> {
        let merged = StripParams {
            radius: radius.unwrap_or(self.params.radius),
            width: width.unwrap_or(self.params.width),
            resolution: resolution.unwrap_or(self.params.resolution),
        };
        *self = Self::new(merged)?;
        Ok(())
    }

    /// The three coordinate grids `(x, y, z)`.
    ///
    /// Shared borrows: callers read the grids in place and cannot mutate
    /// them, so derived computations always see consistent data.
    pub fn coordinates(&self) -> (&Grid2, &Grid2, &Grid2) {
        (&self.grid.x, &self.grid.y, &self.grid.z)
    }

    /// The two boundary rows, at `v = -width/2` and `v = +width/2`.
    ///
    /// Because of the half-twist both rows trace the same single closed
    /// edge of the strip. They are still returned as two separate polylines
    /// — the rows only coincide where the strip glues to itself (the end of
    /// one row meets the start of the other), not element-wise. Callers that
    /// care about the topological edge are responsible for identifying them.
    pub fn edge_points(&self) -> (EdgeCurve<'_>, EdgeCurve<'_>) {
        (self.edge_row(0), self.edge_row(self.params.resolution - 1))
    }

    fn edge_row(&self, row: usize) -> EdgeCurve<'_> {
        EdgeCurve {
            x: self.grid.x.row(row),
            y: self.grid.y.row(row),
            z: self.grid.z.row(row),
        }
    }

    /// Approximate surface area of the strip.
    ///
    /// Riemann sum of `|∂R/∂u × ∂R/∂v| du dv`: the integrand is evaluated
    /// with the exact analytic partials at every grid node, summed, and
    /// scaled by the cell area `du·dv`.
    pub fn surface_area(&self) -> f64 {
        let du = self.grid.du();
        let dv = self.grid.dv();
        let mut total = 0.0;
        for &v in &self.grid.v {
            for &u in &self.grid.u {
                let uv = Point2::new(u, v);
                let r_u = self.surface.d_du(uv);
                let r_v = self.surface.d_dv(uv);
                total += r_u.cross(&r_v).norm();
            }
        }
        total * du * dv
    }

    /// Approximate length of one boundary curve.
    ///
    /// Sums the Euclidean distances between consecutive samples along the
    /// `v = -width/2` boundary row, then scales by `2π / resolution`.
    ///
    /// Note: the normalization is exactly `2π / resolution` — not the `u`
    /// step `2π / (resolution - 1)` and not the bare chord sum. Regression
    /// baselines depend on this factor; changing it changes every reported
    /// length.
    pub fn edge_length(&self) -> f64 {
        let (edge, _) = self.edge_points();
        let mut total = 0.0;
        for k in 1..edge.x.len() {
            let dx = edge.x[k] - edge.x[k - 1];
            let dy = edge.y[k] - edge.y[k - 1];
            let dz = edge.z[k] - edge.z[k - 1];
            total += (dx * dx + dy * dy + dz * dz).sqrt();
        }
        total * 2.0 * PI / self.params.resolution as f64
    }
}
