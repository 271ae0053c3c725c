//! Plasma drug concentration and AUC
//!
//! After an oral dose the plasma concentration rises while the drug is
//! absorbed and falls as it is eliminated:
//!
//! ```text
//! c(t) = a·t·e^(-k·t)
//! ```
//!
//! The area under the curve (AUC) over the observation window is the
//! standard exposure metric, and the antiderivative is available in
//! closed form, so every quadrature rule can be graded exactly:
//!
//! ```text
//! ∫ a·t·e^(-kt) dt = -(a/k²)·e^(-kt)·(k·t + 1)
//! ```

use crate::function::Integrand;

/// One-compartment absorption/elimination concentration curve.
///
/// The reference problem uses `a = 10`, `k = 0.5` over `[0, 10]`
/// hours.
///
/// # Example
///
/// ```rust
/// use metnum_rs::models::DrugConcentration;
/// use metnum_rs::quadrature::{integrate, QuadratureRule};
///
/// let drug = DrugConcentration::reference();
/// let auc = integrate(&drug, 0.0, 10.0, 50, QuadratureRule::Simpson13)?;
///
/// let exact = drug.exact_integral(0.0, 10.0);
/// assert!((auc.approximation - exact).abs() < 0.01);
/// # Ok::<(), metnum_rs::error::SolverError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DrugConcentration {
    /// Absorption scale a (mg/L per hour)
    pub scale: f64,

    /// Elimination constant k (1/hour)
    pub elimination: f64,
}

impl DrugConcentration {
    /// Create a concentration curve from scale and elimination
    /// constant.
    pub fn new(scale: f64, elimination: f64) -> Self {
        Self { scale, elimination }
    }

    /// The course's reference parameters: `c(t) = 10·t·e^(-0.5t)`.
    pub fn reference() -> Self {
        Self::new(10.0, 0.5)
    }

    /// Antiderivative `-(a/k²)·e^(-kt)·(kt + 1)`.
    fn antiderivative(&self, t: f64) -> f64 {
        let k = self.elimination;
        -(self.scale / (k * k)) * (-k * t).exp() * (k * t + 1.0)
    }

    /// Exact AUC over `[a, b]`.
    pub fn exact_integral(&self, a: f64, b: f64) -> f64 {
        self.antiderivative(b) - self.antiderivative(a)
    }

    /// Time of the concentration peak, `t = 1/k`.
    pub fn peak_time(&self) -> f64 {
        1.0 / self.elimination
    }
}

impl Integrand for DrugConcentration {
    fn evaluate(&self, t: f64) -> f64 {
        self.scale * t * (-self.elimination * t).exp()
    }

    fn name(&self) -> &str {
        "Drug Concentration"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
