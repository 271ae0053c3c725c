//! Radio signal energy
//!
//! A received carrier with a DC offset:
//!
//! ```text
//! s(t) = A·cos(2π·f·t) + c
//! ```
//!
//! Integrating over a window gives the delivered signal "energy"; over
//! a whole number of periods the cosine contributes nothing and the
//! integral is just `c·(b - a)`, a convenient sanity check. The
//! antiderivative is `(A/2πf)·sin(2πf·t) + c·t`.

use std::f64::consts::PI;

use crate::function::Integrand;

/// Cosine carrier plus DC offset.
///
/// The reference problem uses `A = 5`, `f = 1`, `c = 3` over one
/// second (one full period), sampled with `n = 12`.
///
/// # Example
///
/// ```rust
/// use metnum_rs::models::RadioSignal;
/// use metnum_rs::quadrature::{integrate, QuadratureRule};
///
/// let signal = RadioSignal::reference();
/// let energy = integrate(&signal, 0.0, 1.0, 12, QuadratureRule::Simpson38)?;
///
/// // Over a full period only the offset survives: exactly 3
/// assert!((energy.approximation - 3.0).abs() < 1e-2);
/// # Ok::<(), metnum_rs::error::SolverError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RadioSignal {
    /// Carrier amplitude A
    pub amplitude: f64,

    /// Carrier frequency f (Hz)
    pub frequency: f64,

    /// DC offset c
    pub offset: f64,
}

impl RadioSignal {
    /// Create a signal from amplitude, frequency and offset.
    pub fn new(amplitude: f64, frequency: f64, offset: f64) -> Self {
        Self {
            amplitude,
            frequency,
            offset,
        }
    }

    /// The course's reference signal `s(t) = 5·cos(2πt) + 3`.
    pub fn reference() -> Self {
        Self::new(5.0, 1.0, 3.0)
    }

    /// Antiderivative `(A/2πf)·sin(2πf·t) + c·t`.
    fn antiderivative(&self, t: f64) -> f64 {
        let omega = 2.0 * PI * self.frequency;
        (self.amplitude / omega) * (omega * t).sin() + self.offset * t
    }

    /// Exact integral over `[a, b]`.
    pub fn exact_integral(&self, a: f64, b: f64) -> f64 {
        self.antiderivative(b) - self.antiderivative(a)
    }
}

impl Integrand for RadioSignal {
    fn evaluate(&self, t: f64) -> f64 {
        self.amplitude * (2.0 * PI * self.frequency * t).cos() + self.offset
    }

    fn name(&self) -> &str {
        "Radio Signal"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
