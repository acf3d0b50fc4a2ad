//! # kspace
//!
//! Inversion of the spherical-to-planar angle projection used in
//! angle-resolved momentum-space mapping.
//!
//! A detector geometry with a fixed azimuth `phi` maps a pair of orientation
//! angles `(alpha, theta)` to a point `(px, py)` on the projection plane.
//! Going the other way — from a measured plane coordinate back to the
//! orientation angles that produced it — has no closed form, so this crate
//! inverts the projection numerically:
//!
//! - **Forward model** — [`Projection`] evaluates the plane coordinates and
//!   the four analytic partial derivatives (no numerical differentiation)
//! - **Inversion** — [`solve`] runs a two-dimensional Newton-Raphson
//!   iteration with coordinate-wise linearized updates
//! - **Status, not errors** — a solve that runs out of iterations is a
//!   normal outcome, reported through [`SolveStatus`] and a fixed sentinel
//!   result rather than an `Err`
//!
//! ## Example
//!
//! ```rust
//! use kspace::{solve, Point2, Projection, SolveConfig, SolveStatus};
//!
//! // Geometry with the azimuth locked at zero.
//! let projection = Projection::new(0.0);
//!
//! // (px, py) = (0, 1) is the image of (alpha, theta) = (0, π/2).
//! let target = Point2::new(0.0, 1.0);
//!
//! let config = SolveConfig {
//!     tol: 1e-6,
//!     max_steps: 30,
//! };
//!
//! // Start the iteration from a rough guess.
//! let result = solve(0.1, 0.1, &projection, target, &config);
//!
//! assert_eq!(result.status, SolveStatus::Converged);
//! assert!(result.alpha.abs() < 1e-3);
//! assert!((result.theta - std::f64::consts::FRAC_PI_2).abs() < 1e-2);
//! println!("alpha = {:.6}, theta = {:.6} in {} steps",
//!     result.alpha, result.theta, result.steps);
//! ```
//!
//! ## Algorithm overview
//!
//! 1. Evaluate the forward model at the current estimate and compare both
//!    coordinates against the target.
//! 2. While either residual is at or above the tolerance, apply one Newton
//!    update to each angle. Both updates are computed from the *same*
//!    current estimate, each with its own cross-term denominator.
//! 3. On convergence, wrap both angles once with [`wrap_angle`].
//! 4. If the iteration cap is exceeded instead, overwrite the estimate with
//!    the sentinel pair `(π, π)` and report [`SolveStatus::IterationLimit`].
//!
//! The Jacobian denominators are not guarded against zero; a degenerate
//! orientation produces non-finite updates that ride out the remaining
//! iterations until the cap fires. See [`SolveResult::is_finite`].

pub mod angle;
pub mod projection;
pub mod solver;

pub use angle::wrap_angle;
pub use projection::Projection;
pub use solver::{solve, SolveConfig, SolveResult, SolveStatus};

// Commonly used types.
// All solver math is in 64-bit floats; the tolerances in play (1e-6 and
// below, on coordinates of order 1) are out of reach for f32.
pub type Point2 = nalgebra::Vector2<f64>;
pub type Jacobian = nalgebra::Matrix2<f64>;
