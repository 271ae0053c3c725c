//! Error types for the numerical engines
//!
//! Every engine entry point validates its inputs *before* producing any
//! trace record, and reports violations through [`SolverError`]. A
//! non-converged root search is deliberately **not** an error — it is a
//! normal [`RootResult`](crate::roots::RootResult) with
//! `converged = false` and the full diagnostic trace attached. Only
//! structural precondition violations, which make the requested
//! computation meaningless, are surfaced here.

use std::fmt;

/// Result type for engine operations.
pub type SolverResult<T> = Result<T, SolverError>;

/// Errors reported by the quadrature, ODE and root-finding engines.
///
/// # Design
///
/// Each variant carries the offending values so that a caller can build
/// a precise message (or a form-validation hint) without re-deriving
/// them. Variants map one-to-one onto the structural preconditions of
/// the engines:
///
/// - [`StructuralPrecondition`](Self::StructuralPrecondition):
///   Simpson 1/3 with odd `n`, Simpson 3/8 with `n` not divisible by 3,
///   or `n == 0` for any rule.
/// - [`InvalidInterval`](Self::InvalidInterval): quadrature bounds with
///   `a >= b`. The bounds are rejected, never silently swapped.
/// - [`NoSignChange`](Self::NoSignChange): bisection bracket whose
///   endpoint values have the same sign.
/// - [`InvalidStepSize`](Self::InvalidStepSize) /
///   [`InvalidHorizon`](Self::InvalidHorizon): non-positive `h` or
///   `t_final` for the ODE integrators.
/// - [`InvalidParameter`](Self::InvalidParameter): non-positive
///   tolerance or zero iteration cap for the root finders.
#[derive(Debug, Clone, PartialEq)]
pub enum SolverError {
    /// A quadrature rule was invoked with a subinterval count it cannot
    /// accept (wrong parity/divisibility, or zero).
    StructuralPrecondition {
        /// Name of the rule that rejected the partition
        rule: &'static str,
        /// Human-readable requirement, e.g. "n must be even"
        requirement: &'static str,
        /// The offending subinterval count
        n: usize,
    },

    /// Integration bounds with `a >= b`.
    InvalidInterval { a: f64, b: f64, context: &'static str },

    /// Bisection bracket `[a, b]` where `f(a)` and `f(b)` have the same
    /// sign, so no root is guaranteed inside.
    NoSignChange { a: f64, b: f64, fa: f64, fb: f64 },

    /// Non-positive (or non-finite) step size for an ODE integrator.
    InvalidStepSize { step_size: f64 },

    /// Non-positive (or non-finite) integration horizon.
    InvalidHorizon { t_final: f64 },

    /// Invalid numeric parameter (non-positive tolerance, zero
    /// iteration cap, ...).
    InvalidParameter { name: &'static str, value: f64 },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StructuralPrecondition { rule, requirement, n } => {
                write!(f, "{}: {} (got n = {})", rule, requirement, n)
            }
            Self::InvalidInterval { a, b, context } => {
                write!(
                    f,
                    "{}: invalid interval [{}, {}], bounds must satisfy a < b",
                    context, a, b
                )
            }
            Self::NoSignChange { a, b, fa, fb } => {
                write!(
                    f,
                    "bisection: no sign change on [{}, {}] (f(a) = {}, f(b) = {})",
                    a, b, fa, fb
                )
            }
            Self::InvalidStepSize { step_size } => {
                write!(f, "step size must be positive (got {})", step_size)
            }
            Self::InvalidHorizon { t_final } => {
                write!(f, "integration horizon must be positive (got {})", t_final)
            }
            Self::InvalidParameter { name, value } => {
                write!(f, "invalid parameter '{}': {}", name, value)
            }
        }
    }
}

impl std::error::Error for SolverError {}
