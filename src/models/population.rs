//! Population growth integral
//!
//! A population following a quadratic growth curve:
//!
//! ```text
//! P(t) = P₀·(1 + r·t)²
//! ```
//!
//! Its integral over a planning horizon is the accumulated
//! person-years, with antiderivative `P₀·(1 + r·t)³/(3r)`. Being a
//! degree-2 polynomial it is also the worked example where both
//! Simpson rules are *exact* while the trapezoid is not.

use crate::function::Integrand;

/// Quadratic population growth curve.
///
/// The reference problem uses `P₀ = 1000`, `r = 0.1` over `[0, 10]`
/// years.
///
/// # Example
///
/// ```rust
/// use metnum_rs::models::PopulationGrowth;
/// use metnum_rs::quadrature::{integrate, QuadratureRule};
///
/// let town = PopulationGrowth::reference();
/// let result = integrate(&town, 0.0, 10.0, 10, QuadratureRule::Trapezoidal)?;
///
/// let exact = town.exact_integral(0.0, 10.0);
/// assert!((result.approximation - exact).abs() / exact < 1e-2);
/// # Ok::<(), metnum_rs::error::SolverError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PopulationGrowth {
    /// Initial population P₀
    pub initial_population: f64,

    /// Growth rate r (per year)
    pub growth_rate: f64,
}

impl PopulationGrowth {
    /// Create a growth curve from initial population and rate.
    pub fn new(initial_population: f64, growth_rate: f64) -> Self {
        Self {
            initial_population,
            growth_rate,
        }
    }

    /// The course's reference curve `P(t) = 1000·(1 + 0.1t)²`.
    pub fn reference() -> Self {
        Self::new(1000.0, 0.1)
    }

    /// Antiderivative `P₀·(1 + rt)³/(3r)`.
    fn antiderivative(&self, t: f64) -> f64 {
        let base = 1.0 + self.growth_rate * t;
        self.initial_population / (3.0 * self.growth_rate) * base * base * base
    }

    /// Exact accumulated person-years over `[a, b]`.
    pub fn exact_integral(&self, a: f64, b: f64) -> f64 {
        self.antiderivative(b) - self.antiderivative(a)
    }
}

impl Integrand for PopulationGrowth {
    fn evaluate(&self, t: f64) -> f64 {
        let base = 1.0 + self.growth_rate * t;
        self.initial_population * base * base
    }

    fn name(&self) -> &str {
        "Population Growth"
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quadrature::{QuadratureRule, integrate};

    #[test]
    fn test_curve_values() {
        let town = PopulationGrowth::reference();
        assert!((town.evaluate(0.0) - 1000.0).abs() < 1e-9);
        // (1 + 0.1·10)² = 4
        assert!((town.evaluate(10.0) - 4000.0).abs() < 1e-9);
    }

    #[test]
    fn test_exact_integral_reference() {
        let town = PopulationGrowth::reference();
        // (1000/0.3)·(2³ - 1³) = 23333.33…
        let exact = town.exact_integral(0.0, 10.0);
        assert!((exact - 1000.0 / 0.3 * 7.0).abs() < 1e-6);
    }

    #[test]
    fn test_simpson_rules_are_exact_on_quadratic() {
        let town = PopulationGrowth::reference();
        let exact = town.exact_integral(0.0, 10.0);

        let s13 = integrate(&town, 0.0, 10.0, 6, QuadratureRule::Simpson13).unwrap();
        let s38 = integrate(&town, 0.0, 10.0, 6, QuadratureRule::Simpson38).unwrap();

        assert!((s13.approximation - exact).abs() < 1e-8);
        assert!((s38.approximation - exact).abs() < 1e-8);
    }

    #[test]
    fn test_trapezoid_overestimates_convex_curve() {
        // The chord of a convex function lies above it
        let town = PopulationGrowth::reference();
        let exact = town.exact_integral(0.0, 10.0);

        let trap = integrate(&town, 0.0, 10.0, 10, QuadratureRule::Trapezoidal).unwrap();
        assert!(trap.approximation > exact);
    }
}
