//! Geostationary orbit radius
//!
//! A circular orbit is synchronous when its orbital speed matches the
//! speed demanded by the period `T`:
//!
//! ```text
//! √(μ/r) = 2π·r / T
//! ```
//!
//! giving the residual
//!
//! ```text
//! f(r) = √(μ/r) - 2π·r/T,    f'(r) = -√μ/(2·r^(3/2)) - 2π/T
//! ```
//!
//! and the closed-form radius `r = (T·√μ/2π)^(2/3)` — for Earth and a
//! sidereal-day-ish period, the familiar ~42 000 km.

use std::f64::consts::PI;

use crate::function::{Differentiable, Objective};

/// Synchronous-orbit residual for a central body.
///
/// The reference problem uses Earth's gravitational parameter
/// `μ = 3.986e14 m³/s²`, a 86 400 s period, bracket
/// `[3e7, 5e7] m` and Newton seed `4.2e7 m`.
///
/// # Example
///
/// ```rust
/// use metnum_rs::models::GeostationaryOrbit;
/// use metnum_rs::roots::{newton, RootFinderParams};
///
/// let orbit = GeostationaryOrbit::earth();
/// // Residual magnitudes are m/s, so a loose absolute tolerance works
/// let result = newton(&orbit, 4.2e7, &RootFinderParams::with_tolerance(1.0))?;
///
/// assert!(result.converged);
/// assert!((result.root - orbit.exact_radius()).abs() < 1e3);
/// # Ok::<(), metnum_rs::error::SolverError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GeostationaryOrbit {
    /// Gravitational parameter μ = G·M (m³/s²)
    pub gravitational_parameter: f64,

    /// Orbital period T (s)
    pub period: f64,

    /// Radius of the central body (m), for altitude reporting
    pub body_radius: f64,
}

impl GeostationaryOrbit {
    /// Create a synchronous-orbit problem.
    pub fn new(gravitational_parameter: f64, period: f64, body_radius: f64) -> Self {
        Self {
            gravitational_parameter,
            period,
            body_radius,
        }
    }

    /// Earth with a 24-hour period.
    pub fn earth() -> Self {
        Self::new(3.986e14, 86_400.0, 6_371_000.0)
    }

    /// Closed-form radius `(T·√μ/2π)^(2/3)`.
    pub fn exact_radius(&self) -> f64 {
        let factor = self.period * self.gravitational_parameter.sqrt() / (2.0 * PI);
        factor.powf(2.0 / 3.0)
    }

    /// Altitude above the body surface for a given orbital radius.
    pub fn altitude(&self, radius: f64) -> f64 {
        radius - self.body_radius
    }
}

impl Objective for GeostationaryOrbit {
    fn evaluate(&self, r: f64) -> f64 {
        (self.gravitational_parameter / r).sqrt() - 2.0 * PI * r / self.period
    }

    fn name(&self) -> &str {
        "Geostationary Orbit"
    }
}

impl Differentiable for GeostationaryOrbit {
    fn derivative(&self, r: f64) -> f64 {
        -self.gravitational_parameter.sqrt() / (2.0 * r.powf(1.5)) - 2.0 * PI / self.period
    }
}

// =================================================================================================
// Tests
// =================================================================================================
