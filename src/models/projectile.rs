//! Projectile target distance
//!
//! A projectile launched at speed `v₀` and angle `θ` follows
//!
//! ```text
//! y(x) = x·tanθ - g·x²/(2·v₀²·cos²θ)
//! ```
//!
//! At what horizontal distance does it cross a target height `y_t`?
//! Moving the target to the left-hand side gives the residual
//!
//! ```text
//! f(x) = x·tanθ - g·x²/(2·v₀²·cos²θ) - y_t
//! ```
//!
//! a downward parabola with (for reachable targets) two roots: the
//! rising crossing and the falling crossing. Which one a method finds
//! is decided entirely by the bracket or seed, which is exactly the
//! ambiguity the course uses this problem to teach — together with the
//! bracket-scanning helper for finding a sign change in the first
//! place.

use crate::error::{SolverError, SolverResult};
use crate::function::{Differentiable, Objective};

/// Height-crossing residual of a ballistic trajectory.
///
/// Constructed with [`ProjectileRange::new`], which rejects
/// non-physical inputs (`v₀ <= 0`, angle outside (0°, 90°),
/// `g <= 0`) instead of normalising them.
///
/// # Example
///
/// ```rust
/// use metnum_rs::models::ProjectileRange;
/// use metnum_rs::roots::{bisect, RootFinderParams};
///
/// // 30 m/s at 60°, target height 5 m
/// let shot = ProjectileRange::new(30.0, 60.0, 5.0, 9.8)?;
///
/// let (a, b) = shot.suggest_bracket(100.0, 5.0).unwrap();
/// let result = bisect(&shot, a, b, &RootFinderParams::default())?;
/// assert!(result.converged);
/// # Ok::<(), metnum_rs::error::SolverError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ProjectileRange {
    /// Launch speed v₀ (m/s)
    pub launch_speed: f64,

    /// Launch angle θ (degrees)
    pub launch_angle_deg: f64,

    /// Target height y_t (m)
    pub target_height: f64,

    /// Gravitational acceleration g (m/s²)
    pub gravity: f64,

    // Quadratic coefficients precomputed from the inputs:
    // f(x) = linear·x - quadratic·x² - target_height
    quadratic: f64,
    linear: f64,
}

impl ProjectileRange {
    /// Create the residual for a launch; rejects non-physical inputs.
    ///
    /// # Errors
    ///
    /// [`SolverError::InvalidParameter`] when `v₀ <= 0`, `g <= 0` or
    /// the angle lies outside the open interval (0°, 90°).
    pub fn new(
        launch_speed: f64,
        launch_angle_deg: f64,
        target_height: f64,
        gravity: f64,
    ) -> SolverResult<Self> {
        if !launch_speed.is_finite() || launch_speed <= 0.0 {
            return Err(SolverError::InvalidParameter {
                name: "launch_speed",
                value: launch_speed,
            });
        }
        if !(0.0..90.0).contains(&launch_angle_deg) || launch_angle_deg == 0.0 {
            return Err(SolverError::InvalidParameter {
                name: "launch_angle_deg",
                value: launch_angle_deg,
            });
        }
        if !gravity.is_finite() || gravity <= 0.0 {
            return Err(SolverError::InvalidParameter {
                name: "gravity",
                value: gravity,
            });
        }

        let theta = launch_angle_deg.to_radians();
        let cos = theta.cos();
        Ok(Self {
            launch_speed,
            launch_angle_deg,
            target_height,
            gravity,
            quadratic: gravity / (2.0 * launch_speed * launch_speed * cos * cos),
            linear: theta.tan(),
        })
    }

    /// Trajectory height at horizontal distance `x`.
    pub fn height(&self, x: f64) -> f64 {
        self.linear * x - self.quadratic * x * x
    }

    /// Scan `[0, x_max]` in strides of `step` for the first
    /// sign-changing interval of the residual.
    ///
    /// Returns `None` when no crossing exists in range (target too
    /// high for this launch).
    pub fn suggest_bracket(&self, x_max: f64, step: f64) -> Option<(f64, f64)> {
        let mut x = 0.0;
        while x < x_max {
            let next = x + step;
            if self.evaluate(x) * self.evaluate(next) <= 0.0 {
                return Some((x, next));
            }
            x = next;
        }
        None
    }
}

impl Objective for ProjectileRange {
    fn evaluate(&self, x: f64) -> f64 {
        self.linear * x - self.quadratic * x * x - self.target_height
    }

    fn name(&self) -> &str {
        "Projectile Range"
    }
}

impl Differentiable for ProjectileRange {
    fn derivative(&self, x: f64) -> f64 {
        self.linear - 2.0 * self.quadratic * x
    }
}

// =================================================================================================
// Tests
// =================================================================================================
