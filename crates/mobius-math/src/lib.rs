#![warn(missing_docs)]

//! Math types for the mobius geometry kernel.
//!
//! Thin wrappers around nalgebra providing domain-specific types for
//! parametric-surface geometry (points, vectors, directions), the uniform
//! parameter-sampling primitive used by the mesh layer, and tolerance
//! constants for geometric comparisons.

use nalgebra::{Unit, Vector2, Vector3};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f64>>;

/// A point in 2D parameter space.
pub type Point2 = nalgebra::Point2<f64>;

/// A vector in 2D space.
pub type Vec2 = Vector2<f64>;

/// `n` evenly spaced samples over `[start, stop]`, both endpoints included.
///
/// This is the discretization primitive for parameter axes: the first sample
/// is exactly `start`, the last is exactly `stop`, and interior samples are
/// spaced `(stop - start) / (n - 1)` apart.
///
/// # Panics
/// Panics if `n < 2` (a single sample has no defined spacing).
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    assert!(n >= 2, "linspace needs at least 2 samples, got {n}");
    let step = (stop - start) / (n - 1) as f64;
    let mut samples: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
    // Pin the last sample so accumulated rounding never shifts the endpoint.
    samples[n - 1] = stop;
    samples
}

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear distance tolerance.
    pub linear: f64,
}

impl Tolerance {
    /// Default tolerance for sampled-geometry comparisons (1e-9 linear).
    pub const DEFAULT: Self = Self { linear: 1e-9 };

    /// Check if two points are coincident within tolerance.
    pub fn points_equal(&self, a: &Point3, b: &Point3) -> bool {
        (a - b).norm() < self.linear
    }

    /// Check if a scalar distance is effectively zero.
    pub fn is_zero(&self, d: f64) -> bool {
        d.abs() < self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}
