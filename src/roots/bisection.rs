//! Bisection root finder
//!
//! # Mathematical Background
//!
//! Bisection maintains a bracket `[a, b]` guaranteed to contain a root
//! because `f(a)` and `f(b)` have opposite signs. Each iteration
//! evaluates the midpoint `m = (a + b)/2` and keeps whichever half
//! still changes sign, halving the bracket width:
//!
//! ```text
//! [a, m]  if f(a)·f(m) < 0
//! [m, b]  otherwise
//! ```
//!
//! # Characteristics
//!
//! - **Convergence**: linear — one bit of the root per iteration
//! - **Robustness**: cannot escape the bracket, cannot diverge
//! - **Requirement**: a sign-changing bracket (checked up front)
//!
//! Slow but certain, which is exactly the contrast the worked problems
//! draw against [`newton`](crate::roots::newton).

use crate::error::{SolverError, SolverResult};
use crate::function::Objective;
use crate::roots::{RootFinderParams, RootResult, RootStatus};

// =================================================================================================
// Iteration Record
// =================================================================================================

/// One bisection iteration.
///
/// # Invariants
///
/// - The bracket is sign-changing at iteration 0 (`fa·fb <= 0`).
/// - Brackets are non-expanding: `[aᵢ₊₁, bᵢ₊₁] ⊆ [aᵢ, bᵢ]`, and the
///   width halves every iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct BisectionRecord {
    /// Iteration index, starting at 0
    pub iteration: usize,

    /// Lower bracket end
    pub a: f64,

    /// Upper bracket end
    pub b: f64,

    /// Midpoint `(a + b)/2`
    pub m: f64,

    /// `f(a)`
    pub fa: f64,

    /// `f(b)`
    pub fb: f64,

    /// `f(m)`
    pub fm: f64,

    /// Convergence measure `|f(m)|`
    pub tol: f64,
}

// =================================================================================================
// Engine Entry Point
// =================================================================================================

/// Find a root of `f` by bisection on the bracket `[a, b]`.
///
/// # Algorithm
///
/// 1. Validate `params`, then the bracket: `f(a)·f(b) <= 0` (a root at
///    an endpoint counts as a valid bracket). A same-sign bracket
///    returns [`SolverError::NoSignChange`] with **zero** iterations
///    performed.
/// 2. Loop up to `max_iterations` times: evaluate `m`, `f(a)`, `f(b)`,
///    `f(m)`; record the iteration; stop converged when
///    `|f(m)| <= tolerance` (the test runs **after** recording, so the
///    converging iteration appears in the table); otherwise narrow the
///    bracket towards the sign change.
/// 3. Exhausting the cap returns the last midpoint with
///    `converged = false` and [`RootStatus::IterationLimit`] — a
///    normal, reportable outcome.
///
/// # Example
///
/// ```rust
/// use metnum_rs::roots::{bisect, RootFinderParams};
///
/// // Geostationary-orbit residual would work the same; here the beam:
/// let result = bisect(&|x: f64| x.powi(3) - 750.0, 5.0, 15.0,
///                     &RootFinderParams::default())?;
///
/// assert!(result.converged);
/// assert!((result.root - 9.0856).abs() < 1e-3);
/// # Ok::<(), metnum_rs::error::SolverError>(())
/// ```
pub fn bisect<F>(
    f: &F,
    a: f64,
    b: f64,
    params: &RootFinderParams,
) -> SolverResult<RootResult<BisectionRecord>>
where
    F: Objective + ?Sized,
{
    // ====== Step 1: Validation ======

    params.validate()?;

    let fa0 = f.evaluate(a);
    let fb0 = f.evaluate(b);
    if fa0 * fb0 > 0.0 {
        return Err(SolverError::NoSignChange {
            a,
            b,
            fa: fa0,
            fb: fb0,
        });
    }

    // ====== Step 2: Bisection Loop ======

    let mut lower = a;
    let mut upper = b;
    let mut trace = Vec::new();
    let mut status = RootStatus::IterationLimit;

    for iteration in 0..params.max_iterations {
        let m = (lower + upper) / 2.0;
        let fa = f.evaluate(lower);
        let fb = f.evaluate(upper);
        let fm = f.evaluate(m);
        let tol = fm.abs();

        trace.push(BisectionRecord {
            iteration,
            a: lower,
            b: upper,
            m,
            fa,
            fb,
            fm,
            tol,
        });

        // Convergence test after recording, so the converging row is
        // part of the table
        if tol <= params.tolerance {
            status = RootStatus::Converged;
            break;
        }

        // Keep the half that still changes sign
        if fa * fm < 0.0 {
            upper = m;
        } else {
            lower = m;
        }
    }

    // ====== Step 3: Build Result ======

    let root = trace.last().map(|r| r.m).unwrap_or((a + b) / 2.0);
    let mut result = RootResult::new(trace, root, status);
    result.add_metadata("method", "Bisection");
    result.add_metadata("tolerance", &params.tolerance.to_string());

    Ok(result)
}

// =================================================================================================
// Tests
// =================================================================================================
