//! Root-finding engine
//!
//! Locates roots of a scalar residual `f(x) = 0` supplied as an
//! [`Objective`](crate::function::Objective), producing the full
//! iteration table alongside the final estimate:
//!
//! | Method | Kind | Needs | Convergence |
//! |--------|------|-------|-------------|
//! | [`bisect`] | bracketing | sign-changing `[a, b]` | linear (bracket halves) |
//! | [`newton`] | open | supplied derivative, seed `x₀` | quadratic near the root |
//!
//! Both methods share [`RootFinderParams`] (tolerance on `|f(x)|`,
//! iteration cap) and return a [`RootResult`] whose
//! [`RootStatus`] distinguishes the three normal terminations:
//! converged, iteration cap reached, derivative vanished (Newton
//! only). Reaching the cap is **not** an error — the best available
//! estimate and the full trace come back for the caller to judge.
//!
//! # Which Root?
//!
//! A multi-root objective converges to whichever root the initial
//! bracket or seed selects; the engine makes no attempt to find "the"
//! root. Callers wanting a specific root must bracket or seed near it.
//!
//! # Quick Start
//!
//! ```rust
//! use metnum_rs::function::WithDerivative;
//! use metnum_rs::roots::{bisect, newton, RootFinderParams};
//!
//! // Beam sizing: x³ = 750 cm³
//! let f = |x: f64| x.powi(3) - 750.0;
//! let params = RootFinderParams::default(); // tol 1e-4, cap 100
//!
//! let bis = bisect(&f, 5.0, 15.0, &params)?;
//! assert!(bis.converged);
//! assert!((bis.root - 750.0_f64.cbrt()).abs() < 1e-3);
//!
//! let newt = newton(
//!     &WithDerivative::new(f, |x: f64| 3.0 * x * x),
//!     10.0,
//!     &params,
//! )?;
//! assert!(newt.converged);
//! assert!(newt.iterations < bis.iterations);
//! # Ok::<(), metnum_rs::error::SolverError>(())
//! ```

// =================================================================================================
// Module Declarations
// =================================================================================================

mod bisection;
mod newton;

use std::collections::HashMap;

use crate::error::SolverError;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use bisection::{BisectionRecord, bisect};
pub use newton::{NewtonRecord, newton};

// =================================================================================================
// Shared Parameters
// =================================================================================================

/// Parameters shared by both root finders.
///
/// The convergence test is on the residual: `|f(x)| <= tolerance`,
/// checked after the iteration is recorded.
#[derive(Debug, Clone, Copy)]
pub struct RootFinderParams {
    /// Convergence tolerance on `|f(x)|`
    pub tolerance: f64,

    /// Iteration cap; reaching it yields `converged = false`, not an
    /// error
    pub max_iterations: usize,
}

impl Default for RootFinderParams {
    fn default() -> Self {
        Self {
            tolerance: 1e-4,
            max_iterations: 100,
        }
    }
}

impl RootFinderParams {
    /// Parameters with the given tolerance and the default iteration
    /// cap of 100.
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            tolerance,
            ..Self::default()
        }
    }

    /// Validate that the parameters are numerically meaningful.
    ///
    /// # Errors
    ///
    /// [`SolverError::InvalidParameter`] when the tolerance is not a
    /// finite positive number or the iteration cap is zero.
    pub fn validate(&self) -> Result<(), SolverError> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(SolverError::InvalidParameter {
                name: "tolerance",
                value: self.tolerance,
            });
        }
        if self.max_iterations == 0 {
            return Err(SolverError::InvalidParameter {
                name: "max_iterations",
                value: 0.0,
            });
        }
        Ok(())
    }
}

// =================================================================================================
// Result Types
// =================================================================================================

/// How a root search terminated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RootStatus {
    /// `|f(x)| <= tolerance` was reached.
    Converged,

    /// The iteration cap was exhausted; `root` is the best available
    /// estimate.
    IterationLimit,

    /// Newton-Raphson stopped because `|f'(x)|` fell below its guard
    /// threshold before an update; the trace gathered so far is
    /// attached. Never produced by bisection.
    DerivativeNearZero {
        /// Point at which the derivative vanished
        x: f64,
        /// The offending derivative value
        derivative: f64,
    },
}

/// Iteration trace plus final estimate for one root search.
///
/// Generic over the record type because the two methods log different
/// columns ([`BisectionRecord`] vs [`NewtonRecord`]).
#[derive(Debug, Clone)]
pub struct RootResult<R> {
    /// Iteration records in order; `trace.len() == iterations`
    pub trace: Vec<R>,

    /// Final root estimate
    pub root: f64,

    /// True iff `status == RootStatus::Converged`
    pub converged: bool,

    /// Number of iterations performed
    pub iterations: usize,

    /// How the search terminated
    pub status: RootStatus,

    /// Diagnostic metadata (method, tolerance); never read by the
    /// engine
    pub metadata: HashMap<String, String>,
}

impl<R> RootResult<R> {
    pub(crate) fn new(trace: Vec<R>, root: f64, status: RootStatus) -> Self {
        let iterations = trace.len();
        Self {
            trace,
            root,
            converged: status == RootStatus::Converged,
            iterations,
            status,
            metadata: HashMap::new(),
        }
    }

    /// Attach a metadata entry.
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }
}

// =================================================================================================
// Tests
// =================================================================================================
