#![warn(missing_docs)]

//! Analytic surface types for the mobius kernel.
//!
//! Provides the trait-based seam between analytic geometry and the mesh
//! layer, with the Möbius band as the concrete surface. Partial derivatives
//! are closed-form, not finite differences, so downstream integrands
//! (`|R_u × R_v|` for surface area) are exact at every sample.

use std::f64::consts::PI;

use mobius_math::{Dir3, Point2, Point3, Vec3};

/// A parametric surface in 3D space.
pub trait Surface: Send + Sync + std::fmt::Debug {
    /// Evaluate the surface at parameter `(u, v)` to get a 3D point.
    fn evaluate(&self, uv: Point2) -> Point3;

    /// Surface normal at parameter `(u, v)`.
    fn normal(&self, uv: Point2) -> Dir3;

    /// Partial derivative with respect to u at `(u, v)`.
    fn d_du(&self, uv: Point2) -> Vec3;

    /// Partial derivative with respect to v at `(u, v)`.
    fn d_dv(&self, uv: Point2) -> Vec3;

    /// Parameter domain as `((u_min, u_max), (v_min, v_max))`.
    fn domain(&self) -> ((f64, f64), (f64, f64));
}

/// A Möbius band around the Z axis.
///
/// Parameterization:
/// ```text
/// P(u, v) = ((R + v·cos(u/2))·cos(u), (R + v·cos(u/2))·sin(u), v·sin(u/2))
/// ```
///
/// Where:
/// - `R` = radius (center axis to strip mid-line)
/// - `u ∈ [0, 2π]` is the angle around the axis
/// - `v ∈ [-width/2, width/2]` is the position across the strip
///
/// The cross-section angle is `u/2`, so one full sweep of `u` rotates the
/// cross-section by half a turn. That half-twist is what makes the band
/// single-sided: `P(2π, v) = P(0, -v)`, the strip glues back to itself with
/// the `v` axis reversed. With `u` in place of `u/2` the same formula is a
/// plain cylinder wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MobiusSurface {
    /// Distance from the center axis to the strip mid-line.
    pub radius: f64,
    /// Strip width, measured along the local cross-section direction.
    pub width: f64,
}

impl MobiusSurface {
    /// Create a Möbius band with the given radius and width.
    ///
    /// No validation happens here; the band is plain data and callers with
    /// constraints (the model layer) check them at their own boundary.
    pub fn new(radius: f64, width: f64) -> Self {
        Self { radius, width }
    }
}

impl Surface for MobiusSurface {
    fn evaluate(&self, uv: Point2) -> Point3 {
        let (u, v) = (uv.x, uv.y);
        let (sin_u, cos_u) = u.sin_cos();
        let (sin_half, cos_half) = (u / 2.0).sin_cos();
        let radial = self.radius + v * cos_half;
        Point3::new(radial * cos_u, radial * sin_u, v * sin_half)
    }

    fn normal(&self, uv: Point2) -> Dir3 {
        Dir3::new_normalize(self.d_du(uv).cross(&self.d_dv(uv)))
    }

    fn d_du(&self, uv: Point2) -> Vec3 {
        let (u, v) = (uv.x, uv.y);
        let (sin_u, cos_u) = u.sin_cos();
        let (sin_half, cos_half) = (u / 2.0).sin_cos();
        let radial = self.radius + v * cos_half;
        // d/du of the cross-section angle contributes the /2 terms.
        Vec3::new(
            -v * sin_half * cos_u / 2.0 - radial * sin_u,
            -v * sin_half * sin_u / 2.0 + radial * cos_u,
            v * cos_half / 2.0,
        )
    }

    fn d_dv(&self, uv: Point2) -> Vec3 {
        let u = uv.x;
        let (sin_u, cos_u) = u.sin_cos();
        let (sin_half, cos_half) = (u / 2.0).sin_cos();
        Vec3::new(cos_half * cos_u, cos_half * sin_u, sin_half)
    }

    fn domain(&self) -> ((f64, f64), (f64, f64)) {
        ((0.0, 2.0 * PI), (-self.width / 2.0, self.width / 2.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_on_midline() {
        let band = MobiusSurface::new(3.0, 1.0);
        // v=0 stays on the mid-line circle of radius R.
        let p = band.evaluate(Point2::new(0.0, 0.0));
        assert!((p.x - 3.0).abs() < 1e-12);
        assert!(p.y.abs() < 1e-12);
        assert!(p.z.abs() < 1e-12);

        let p90 = band.evaluate(Point2::new(PI / 2.0, 0.0));
        assert!(p90.x.abs() < 1e-12);
        assert!((p90.y - 3.0).abs() < 1e-12);
        assert!(p90.z.abs() < 1e-12);
    }

    #[test]
    fn test_evaluate_cross_section_tilt() {
        let band = MobiusSurface::new(3.0, 1.0);
        // At u=0 the cross-section lies in the XY plane: v moves radially.
        let p = band.evaluate(Point2::new(0.0, 0.5));
        assert!((p.x - 3.5).abs() < 1e-12);
        assert!(p.z.abs() < 1e-12);

        // At u=π the cross-section angle is π/2: v moves vertically.
        let q = band.evaluate(Point2::new(PI, 0.5));
        assert!((q.x + 3.0).abs() < 1e-12);
        assert!(q.y.abs() < 1e-10);
        assert!((q.z - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_half_twist_seam() {
        let band = MobiusSurface::new(3.0, 1.0);
        let tol = mobius_math::Tolerance::DEFAULT;
        // After one full sweep the strip glues to itself with v reversed.
        for &v in &[-0.5, -0.2, 0.0, 0.3, 0.5] {
            let end = band.evaluate(Point2::new(2.0 * PI, v));
            let start = band.evaluate(Point2::new(0.0, -v));
            assert!(tol.points_equal(&end, &start), "seam mismatch at v={v}");
        }
    }

    #[test]
    fn test_partials_match_finite_differences() {
        let band = MobiusSurface::new(3.0, 1.0);
        let uv = Point2::new(0.7, 0.3);
        let eps = 1e-7;

        let p0 = band.evaluate(uv);
        let pu = band.evaluate(Point2::new(uv.x + eps, uv.y));
        let pv = band.evaluate(Point2::new(uv.x, uv.y + eps));

        let d_du_fd = (pu - p0) / eps;
        let d_dv_fd = (pv - p0) / eps;

        let d_du = band.d_du(uv);
        let d_dv = band.d_dv(uv);

        assert!((d_du.x - d_du_fd.x).abs() < 1e-4);
        assert!((d_du.y - d_du_fd.y).abs() < 1e-4);
        assert!((d_du.z - d_du_fd.z).abs() < 1e-4);
        assert!((d_dv.x - d_dv_fd.x).abs() < 1e-4);
        assert!((d_dv.y - d_dv_fd.y).abs() < 1e-4);
        assert!((d_dv.z - d_dv_fd.z).abs() < 1e-4);
    }

    #[test]
    fn test_normal_perpendicular_to_partials() {
        let band = MobiusSurface::new(2.0, 0.5);
        let uv = Point2::new(1.3, -0.1);
        let n = band.normal(uv);
        assert!(n.dot(&band.d_du(uv)).abs() < 1e-10);
        assert!(n.dot(&band.d_dv(uv)).abs() < 1e-10);
    }

    #[test]
    fn test_domain_tracks_width() {
        let band = MobiusSurface::new(3.0, 2.0);
        let ((u0, u1), (v0, v1)) = band.domain();
        assert_eq!(u0, 0.0);
        assert!((u1 - 2.0 * PI).abs() < 1e-15);
        assert_eq!(v0, -1.0);
        assert_eq!(v1, 1.0);
    }
}
