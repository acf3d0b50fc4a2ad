//! Two-dimensional Newton-Raphson inversion of the forward projection.
//!
//! Given a target plane point and a starting orientation, the solver
//! repeats a coordinate-wise linearized Newton update until both forward
//! residuals drop below the tolerance or the iteration cap is exceeded:
//!
//! 1. Evaluate the forward model and the four partials at the current
//!    `(alpha, theta)`.
//! 2. Update each angle from the *same* current estimate; the two updates
//!    are never applied sequentially within a step.
//! 3. On convergence, wrap both angles once onto the principal branch.
//! 4. On cap overrun, force the sentinel pair `(π, π)`.
//!
//! There is no guard on the Jacobian denominators. Near a degenerate
//! orientation the update blows up or goes NaN, rides out the remaining
//! iterations, and the cap converts it into the sentinel result.

use std::f64::consts::PI;

use tracing::{debug, trace};

use crate::angle::wrap_angle;
use crate::projection::Projection;
use crate::Point2;

// ── Configuration ───────────────────────────────────────────────────────────

/// Parameters controlling a solve.
#[derive(Debug, Clone, Copy)]
pub struct SolveConfig {
    /// Residual tolerance. Both `|px − target.x|` and `|py − target.y|`
    /// must fall below this for the solve to count as converged.
    /// Default 1e-7.
    pub tol: f64,
    /// Iteration cap. The step counter may reach `max_steps + 1` before the
    /// loop breaks, so that value in [`SolveResult::steps`] marks an
    /// exhausted solve. Default 30.
    pub max_steps: u32,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            tol: 1e-7,
            max_steps: 30,
        }
    }
}

// ── Status codes ────────────────────────────────────────────────────────────

/// Outcome of a solve attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// Both residuals fell below the tolerance.
    Converged,
    /// The iteration cap was exceeded; the result holds the sentinel angles.
    IterationLimit,
}

// ── Solve result ────────────────────────────────────────────────────────────

/// Result of a solve attempt.
///
/// Non-convergence is signalled three ways at once: [`SolveStatus`], the
/// sentinel angle pair `(π, π)`, and `steps == max_steps + 1`. Callers may
/// rely on any of them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveResult {
    /// Converged in-plane tilt angle (radians), wrapped onto the principal
    /// branch; `π` on the iteration-limit path.
    pub alpha: f64,
    /// Converged out-of-plane rotation angle (radians), wrapped onto the
    /// principal branch; `π` on the iteration-limit path.
    pub theta: f64,
    /// Number of Newton steps executed. Zero when the starting guess was
    /// already within tolerance; `max_steps + 1` when the cap fired.
    pub steps: u32,
    /// Outcome status.
    pub status: SolveStatus,
}

impl SolveResult {
    /// `true` when both angles are finite.
    ///
    /// A NaN estimate satisfies neither residual check, so the iteration
    /// loop can exit through the converged path carrying non-finite angles.
    /// Check this before trusting a [`SolveStatus::Converged`] result from
    /// poorly conditioned geometry.
    pub fn is_finite(&self) -> bool {
        self.alpha.is_finite() && self.theta.is_finite()
    }
}

// ── Newton driver ───────────────────────────────────────────────────────────

/// Invert the projection: find `(alpha, theta)` mapping to `target`.
///
/// Runs the Newton iteration from the starting estimate
/// `(alpha0, theta0)`. The closer the start is to the true orientation,
/// the faster (and more reliably) the iteration lands on it; a sweep over
/// neighbouring targets will typically warm-start each solve from the
/// previous result.
///
/// # Arguments
///
/// * `alpha0`, `theta0` — starting orientation estimate (radians).
/// * `projection` — forward model with the fixed azimuth.
/// * `target` — plane point to invert. Reachable targets lie inside the
///   unit disc; anything outside it can never satisfy the tolerance and
///   ends in [`SolveStatus::IterationLimit`].
/// * `config` — tolerance and iteration cap.
///
/// # Returns
///
/// A [`SolveResult`] by value; the inputs are not mutated.
pub fn solve(
    alpha0: f64,
    theta0: f64,
    projection: &Projection,
    target: Point2,
    config: &SolveConfig,
) -> SolveResult {
    let mut alpha = alpha0;
    let mut theta = theta0;
    let mut step = 0u32;

    while (projection.px(alpha, theta) - target.x).abs() >= config.tol
        || (projection.py(alpha, theta) - target.y).abs() >= config.tol
    {
        let (next_alpha, next_theta) = newton_step(projection, alpha, theta, target);
        alpha = next_alpha;
        theta = next_theta;
        step += 1;
        trace!(
            "step {}: alpha={:.9}, theta={:.9}",
            step,
            alpha,
            theta
        );
        if step > config.max_steps {
            break;
        }
    }

    if step > config.max_steps {
        debug!(
            "no convergence on ({:.6}, {:.6}) within {} steps",
            target.x, target.y, config.max_steps
        );
        SolveResult {
            alpha: PI,
            theta: PI,
            steps: step,
            status: SolveStatus::IterationLimit,
        }
    } else {
        let alpha = wrap_angle(alpha);
        let theta = wrap_angle(theta);
        debug!(
            "converged on ({:.6}, {:.6}) in {} steps: alpha={:.9}, theta={:.9}",
            target.x, target.y, step, alpha, theta
        );
        SolveResult {
            alpha,
            theta,
            steps: step,
            status: SolveStatus::Converged,
        }
    }
}

/// One coordinate-wise Newton update from `(alpha, theta)`.
///
/// Each angle gets a one-dimensional root-finding update with the other
/// variable's cross term held fixed. The two denominators are negatives of
/// each other by construction but are evaluated independently, each in its
/// own term order.
fn newton_step(projection: &Projection, alpha: f64, theta: f64, target: Point2) -> (f64, f64) {
    let rx = projection.px(alpha, theta) - target.x;
    let ry = projection.py(alpha, theta) - target.y;

    let dpx_da = projection.dpx_dalpha(alpha, theta);
    let dpx_dt = projection.dpx_dtheta(alpha, theta);
    let dpy_da = projection.dpy_dalpha(alpha, theta);
    let dpy_dt = projection.dpy_dtheta(alpha, theta);

    let alpha1 = alpha - (dpy_dt * rx - dpx_dt * ry) / (dpx_da * dpy_dt - dpx_dt * dpy_da);
    let theta1 = theta - (dpy_da * rx - dpx_da * ry) / (dpx_dt * dpy_da - dpx_da * dpy_dt);

    (alpha1, theta1)
}
