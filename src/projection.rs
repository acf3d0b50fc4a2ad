//! Forward projection model: orientation angles to plane coordinates.
//!
//! `Projection` holds the azimuth `phi`, which is fixed for the duration of
//! a solve, and maps the two free orientation angles `(alpha, theta)` to the
//! projected plane coordinates `(px, py)`. It also provides the four
//! analytic partial derivatives the Newton iteration needs.
//!
//! # Coordinate conventions
//!
//! - **Orientation angles** `(alpha, theta)`: radians. `alpha` tilts the
//!   orientation within the azimuthal reference plane, `theta` rotates it
//!   out of that plane.
//! - **Plane coordinates** `(px, py)`: dimensionless projections of a unit
//!   vector, each bounded in `[−1, 1]`. Callers working in physical
//!   momentum units scale to this range before solving.
//!
//! All functions are pure and defined for every real input; there is no
//! domain restriction to clamp or validate.

use crate::{Jacobian, Point2};

/// Forward projection at a fixed azimuth.
///
/// The model is
///
/// ```text
/// px = sin(alpha)·cos(phi) + cos(alpha)·sin(phi)·cos(theta)
/// py = cos(alpha)·sin(theta)
/// ```
///
/// `py` does not depend on `phi`; it lives here anyway so the two
/// coordinates share one call surface.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    /// Azimuthal angle in radians, constant across a solve.
    pub phi: f64,
}

impl Projection {
    /// Create a projection with the given azimuth (radians).
    pub fn new(phi: f64) -> Self {
        Self { phi }
    }

    /// First plane coordinate.
    pub fn px(&self, alpha: f64, theta: f64) -> f64 {
        alpha.sin() * self.phi.cos() + alpha.cos() * self.phi.sin() * theta.cos()
    }

    /// Second plane coordinate.
    pub fn py(&self, alpha: f64, theta: f64) -> f64 {
        alpha.cos() * theta.sin()
    }

    /// ∂px/∂alpha.
    pub fn dpx_dalpha(&self, alpha: f64, theta: f64) -> f64 {
        alpha.cos() * self.phi.cos() - alpha.sin() * self.phi.sin() * theta.cos()
    }

    /// ∂px/∂theta.
    pub fn dpx_dtheta(&self, alpha: f64, theta: f64) -> f64 {
        -alpha.cos() * self.phi.sin() * theta.sin()
    }

    /// ∂py/∂alpha.
    pub fn dpy_dalpha(&self, alpha: f64, theta: f64) -> f64 {
        -alpha.sin() * theta.sin()
    }

    /// ∂py/∂theta.
    pub fn dpy_dtheta(&self, alpha: f64, theta: f64) -> f64 {
        alpha.cos() * theta.cos()
    }

    /// Both plane coordinates at once.
    pub fn project(&self, alpha: f64, theta: f64) -> Point2 {
        Point2::new(self.px(alpha, theta), self.py(alpha, theta))
    }

    /// The full 2×2 Jacobian `[[∂px/∂α, ∂px/∂θ], [∂py/∂α, ∂py/∂θ]]`.
    ///
    /// Provided for callers that want the matrix as a unit; the solver
    /// evaluates the four partials individually.
    pub fn jacobian(&self, alpha: f64, theta: f64) -> Jacobian {
        Jacobian::new(
            self.dpx_dalpha(alpha, theta),
            self.dpx_dtheta(alpha, theta),
            self.dpy_dalpha(alpha, theta),
            self.dpy_dtheta(alpha, theta),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_py_boundary_values() {
        let proj = Projection::new(0.7);
        assert!(
            proj.py(0.0, 0.0).abs() < f64::EPSILON,
            "py(0, 0) should be 0, got {}",
            proj.py(0.0, 0.0)
        );
        assert!(
            (proj.py(0.0, FRAC_PI_2) - 1.0).abs() < f64::EPSILON,
            "py(0, π/2) should be 1, got {}",
            proj.py(0.0, FRAC_PI_2)
        );
    }

    #[test]
    fn test_px_at_zero_azimuth() {
        // With phi = 0 the cross term vanishes and px reduces to sin(alpha)
        let proj = Projection::new(0.0);
        for &alpha in &[-1.2, -0.4, 0.0, 0.3, 1.0] {
            for &theta in &[-0.8, 0.0, 0.5] {
                let px = proj.px(alpha, theta);
                assert!(
                    (px - alpha.sin()).abs() < 1e-15,
                    "px({}, {}) at phi=0: expected {}, got {}",
                    alpha,
                    theta,
                    alpha.sin(),
                    px
                );
            }
        }
    }

    #[test]
    fn test_projection_bounded_by_unit_disc() {
        // (px, py) are two components of a rotated unit vector
        let proj = Projection::new(0.45);
        for i in -6..=6 {
            for j in -6..=6 {
                let alpha = i as f64 * 0.5;
                let theta = j as f64 * 0.5;
                let p = proj.project(alpha, theta);
                assert!(
                    p.norm_squared() <= 1.0 + 1e-12,
                    "projection of ({}, {}) left the unit disc: {:?}",
                    alpha,
                    theta,
                    p
                );
            }
        }
    }

    #[test]
    fn test_project_matches_components() {
        let proj = Projection::new(-0.3);
        let p = proj.project(0.6, -1.1);
        assert_eq!(p.x, proj.px(0.6, -1.1));
        assert_eq!(p.y, proj.py(0.6, -1.1));
    }

    #[test]
    fn test_partials_against_central_differences() {
        let proj = Projection::new(0.3);
        let (alpha, theta) = (0.4, 0.7);
        let h = 1e-6;

        let dpx_da_num = (proj.px(alpha + h, theta) - proj.px(alpha - h, theta)) / (2.0 * h);
        let dpx_dt_num = (proj.px(alpha, theta + h) - proj.px(alpha, theta - h)) / (2.0 * h);
        let dpy_da_num = (proj.py(alpha + h, theta) - proj.py(alpha - h, theta)) / (2.0 * h);
        let dpy_dt_num = (proj.py(alpha, theta + h) - proj.py(alpha, theta - h)) / (2.0 * h);

        let checks = [
            ("dpx/dalpha", proj.dpx_dalpha(alpha, theta), dpx_da_num),
            ("dpx/dtheta", proj.dpx_dtheta(alpha, theta), dpx_dt_num),
            ("dpy/dalpha", proj.dpy_dalpha(alpha, theta), dpy_da_num),
            ("dpy/dtheta", proj.dpy_dtheta(alpha, theta), dpy_dt_num),
        ];
        for (name, analytic, numeric) in checks {
            assert!(
                (analytic - numeric).abs() < 1e-7,
                "{}: analytic {} vs central difference {}",
                name,
                analytic,
                numeric
            );
        }
    }

    #[test]
    fn test_jacobian_determinant_matches_explicit_product() {
        let proj = Projection::new(0.25);
        let (alpha, theta) = (-0.5, 0.9);

        let explicit = proj.dpx_dalpha(alpha, theta) * proj.dpy_dtheta(alpha, theta)
            - proj.dpx_dtheta(alpha, theta) * proj.dpy_dalpha(alpha, theta);
        let det = proj.jacobian(alpha, theta).determinant();

        assert!(
            (det - explicit).abs() < 1e-15,
            "determinant {} vs explicit product {}",
            det,
            explicit
        );
    }
}
