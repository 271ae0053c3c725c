//! Newton's law of cooling
//!
//! A cup of coffee at 90 °C in a 20 °C room: the cooling rate is
//! proportional to the temperature difference,
//!
//! ```text
//! dT/dt = -k·(T - T_amb)
//! ```
//!
//! with the closed-form solution `T(t) = T_amb + (T₀ - T_amb)·e^(-kt)`
//! — the canonical problem for contrasting Euler against Heun, since
//! the exact curve is one `exp` away.

use nalgebra::DVector;

use crate::function::OdeSystem;
use crate::ode::OdeTrace;

/// Cooling of a body towards ambient temperature.
///
/// # Example
///
/// ```rust
/// use metnum_rs::models::NewtonCooling;
/// use metnum_rs::ode::{HeunSolver, IntegrationParams, OdeSolver};
///
/// let coffee = NewtonCooling::new(90.0, 20.0, 0.1);
/// let trace = HeunSolver.solve(&coffee, &IntegrationParams::new(1.0, 30.0))?;
///
/// let exact = coffee.exact_temperature(30.0);
/// assert!((trace.final_state()[0] - exact).abs() < 0.1);
/// # Ok::<(), metnum_rs::error::SolverError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NewtonCooling {
    /// Initial temperature T₀ (°C)
    pub initial_temperature: f64,

    /// Ambient temperature T_amb (°C)
    pub ambient_temperature: f64,

    /// Cooling constant k (1/min)
    pub cooling_constant: f64,
}

impl NewtonCooling {
    /// Create a cooling problem from initial temperature, ambient
    /// temperature and cooling constant.
    pub fn new(initial_temperature: f64, ambient_temperature: f64, cooling_constant: f64) -> Self {
        Self {
            initial_temperature,
            ambient_temperature,
            cooling_constant,
        }
    }

    /// Closed-form solution `T(t) = T_amb + (T₀ - T_amb)·e^(-kt)`.
    pub fn exact_temperature(&self, t: f64) -> f64 {
        self.ambient_temperature
            + (self.initial_temperature - self.ambient_temperature)
                * (-self.cooling_constant * t).exp()
    }

    /// Largest absolute error of a computed trace against the closed
    /// form, across all records.
    pub fn max_error(&self, trace: &OdeTrace) -> f64 {
        trace
            .records
            .iter()
            .map(|r| (r.state[0] - self.exact_temperature(r.t)).abs())
            .fold(0.0, f64::max)
    }
}

impl OdeSystem for NewtonCooling {
    fn dimension(&self) -> usize {
        1
    }

    fn rhs(&self, _t: f64, y: &DVector<f64>) -> DVector<f64> {
        DVector::from_vec(vec![
            -self.cooling_constant * (y[0] - self.ambient_temperature),
        ])
    }

    fn initial_state(&self) -> DVector<f64> {
        DVector::from_vec(vec![self.initial_temperature])
    }

    fn name(&self) -> &str {
        "Newton Cooling"
    }

    fn description(&self) -> Option<&str> {
        Some("dT/dt = -k(T - T_amb), cooling towards ambient temperature")
    }
}

// =================================================================================================
// Tests
// =================================================================================================
