//! Continuously compounded investment with deposits
//!
//! A balance earning interest at annual rate `r` while receiving a
//! fixed monthly deposit, modelled with the deposit annualised into a
//! continuous stream `D`:
//!
//! ```text
//! dP/dt = r·P + D
//! ```
//!
//! Closed form: `P(t) = (P₀ + D/r)·e^(rt) - D/r`, degenerating to the
//! linear `P₀ + D·t` when `r = 0`.

use nalgebra::DVector;

use crate::function::OdeSystem;

/// Investment balance under continuous compounding and deposits.
///
/// # Example
///
/// ```rust
/// use metnum_rs::models::CompoundInvestment;
/// use metnum_rs::ode::{HeunSolver, IntegrationParams, OdeSolver};
///
/// // 10 000 initial, 8% annual, 500/month, over 10 years
/// let plan = CompoundInvestment::new(10_000.0, 0.08, 500.0);
/// let trace = HeunSolver.solve(&plan, &IntegrationParams::new(0.05, 10.0))?;
///
/// let exact = plan.exact_balance(10.0);
/// assert!((trace.final_state()[0] - exact).abs() / exact < 1e-3);
/// # Ok::<(), metnum_rs::error::SolverError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CompoundInvestment {
    /// Initial balance P₀
    pub principal: f64,

    /// Annual interest rate r (e.g. 0.08 for 8 %)
    pub annual_rate: f64,

    /// Monthly deposit, annualised internally to a continuous stream
    pub monthly_deposit: f64,
}

impl CompoundInvestment {
    /// Create a plan from principal, annual rate and monthly deposit.
    pub fn new(principal: f64, annual_rate: f64, monthly_deposit: f64) -> Self {
        Self {
            principal,
            annual_rate,
            monthly_deposit,
        }
    }

    /// Annualised continuous deposit stream `D = 12·monthly`.
    pub fn annual_deposit(&self) -> f64 {
        12.0 * self.monthly_deposit
    }

    /// Closed-form balance `P(t) = (P₀ + D/r)·e^(rt) - D/r`, linear
    /// when `r = 0`.
    pub fn exact_balance(&self, t: f64) -> f64 {
        let d = self.annual_deposit();
        if self.annual_rate == 0.0 {
            return self.principal + d * t;
        }
        (self.principal + d / self.annual_rate) * (self.annual_rate * t).exp()
            - d / self.annual_rate
    }

    /// Sum actually paid in over `years` (principal plus deposits),
    /// the baseline the interest gain is measured against.
    pub fn total_deposited(&self, years: f64) -> f64 {
        self.principal + self.annual_deposit() * years
    }
}

impl OdeSystem for CompoundInvestment {
    fn dimension(&self) -> usize {
        1
    }

    fn rhs(&self, _t: f64, y: &DVector<f64>) -> DVector<f64> {
        DVector::from_vec(vec![self.annual_rate * y[0] + self.annual_deposit()])
    }

    fn initial_state(&self) -> DVector<f64> {
        DVector::from_vec(vec![self.principal])
    }

    fn name(&self) -> &str {
        "Compound Investment"
    }

    fn description(&self) -> Option<&str> {
        Some("dP/dt = rP + D, continuously compounded balance with deposits")
    }
}

// =================================================================================================
// Tests
// =================================================================================================
