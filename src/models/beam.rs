//! Beam sizing
//!
//! What side length gives a cubic beam a target volume V? The residual
//!
//! ```text
//! f(x) = x³ - V
//! ```
//!
//! has the single real positive root `x = V^(1/3)` and the supplied
//! derivative `f'(x) = 3x²` — the course's head-to-head problem for
//! bisection (linear) versus Newton-Raphson (quadratic).

use crate::function::{Differentiable, Objective};

/// Cubic-beam volume residual `x³ - V`.
///
/// The reference problem targets `V = 750 cm³`, bracketed in
/// `[5, 15]` for bisection and seeded at `x₀ = 10` for Newton.
///
/// # Example
///
/// ```rust
/// use metnum_rs::models::BeamVolume;
/// use metnum_rs::roots::{bisect, newton, RootFinderParams};
///
/// let beam = BeamVolume::new(750.0);
/// let params = RootFinderParams::default();
///
/// let bis = bisect(&beam, 5.0, 15.0, &params)?;
/// let newt = newton(&beam, 10.0, &params)?;
///
/// assert!((bis.root - beam.exact_root()).abs() < 1e-3);
/// assert!(newt.iterations < bis.iterations);
/// # Ok::<(), metnum_rs::error::SolverError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BeamVolume {
    /// Target volume V (cm³)
    pub target_volume: f64,
}

impl BeamVolume {
    /// Create a sizing problem for the given target volume.
    pub fn new(target_volume: f64) -> Self {
        Self { target_volume }
    }

    /// The analytic side length `V^(1/3)`.
    pub fn exact_root(&self) -> f64 {
        self.target_volume.cbrt()
    }
}

impl Objective for BeamVolume {
    fn evaluate(&self, x: f64) -> f64 {
        x * x * x - self.target_volume
    }

    fn name(&self) -> &str {
        "Beam Volume"
    }
}

impl Differentiable for BeamVolume {
    fn derivative(&self, x: f64) -> f64 {
        3.0 * x * x
    }
}

// =================================================================================================
// Tests
// =================================================================================================
