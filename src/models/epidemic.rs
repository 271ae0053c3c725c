//! SIR epidemic model
//!
//! A population split into susceptible (S), infected (I) and
//! recovered (R) compartments:
//!
//! ```text
//! dS/dt = -β·S·I
//! dI/dt =  β·S·I - γ·I
//! dR/dt =  γ·I
//! ```
//!
//! The three equations are coupled: the infection term β·S·I appears
//! in two of them with opposite signs, so the system only conserves
//! the population when every stage evaluates all components from the
//! same stage state. That makes it the course's worked example for
//! vector-valued integration.

use nalgebra::DVector;

use crate::function::OdeSystem;
use crate::ode::OdeTrace;

/// S-I-R outbreak dynamics.
///
/// # Example
///
/// ```rust
/// use metnum_rs::models::SirEpidemic;
/// use metnum_rs::ode::{HeunSolver, IntegrationParams, OdeSolver};
///
/// let outbreak = SirEpidemic::new(999.0, 1.0, 0.0, 0.0005, 0.1);
/// let trace = HeunSolver.solve(&outbreak, &IntegrationParams::new(1.0, 100.0))?;
///
/// // Population is conserved across the run
/// let total: f64 = trace.final_state().iter().sum();
/// assert!((total - outbreak.population()).abs() < 1e-6);
/// # Ok::<(), metnum_rs::error::SolverError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SirEpidemic {
    /// Initially susceptible individuals S₀
    pub susceptible: f64,

    /// Initially infected individuals I₀
    pub infected: f64,

    /// Initially recovered individuals R₀
    pub recovered: f64,

    /// Infection rate β (per contact per day)
    pub infection_rate: f64,

    /// Recovery rate γ (per day)
    pub recovery_rate: f64,
}

impl SirEpidemic {
    /// Create an outbreak scenario from the initial compartments and
    /// the two rates.
    pub fn new(
        susceptible: f64,
        infected: f64,
        recovered: f64,
        infection_rate: f64,
        recovery_rate: f64,
    ) -> Self {
        Self {
            susceptible,
            infected,
            recovered,
            infection_rate,
            recovery_rate,
        }
    }

    /// Total population N = S₀ + I₀ + R₀, conserved by the dynamics.
    pub fn population(&self) -> f64 {
        self.susceptible + self.infected + self.recovered
    }

    /// Basic reproduction number R₀ = β·N/γ; an outbreak grows when
    /// it exceeds 1.
    pub fn basic_reproduction_number(&self) -> f64 {
        self.infection_rate * self.population() / self.recovery_rate
    }

    /// Peak of the infected compartment across a computed trace:
    /// `(time, infected)` at the maximum.
    pub fn peak_infected(&self, trace: &OdeTrace) -> (f64, f64) {
        trace
            .records
            .iter()
            .map(|r| (r.t, r.state[1]))
            .fold((0.0, f64::MIN), |best, candidate| {
                if candidate.1 > best.1 { candidate } else { best }
            })
    }
}

impl OdeSystem for SirEpidemic {
    fn dimension(&self) -> usize {
        3
    }

    fn rhs(&self, _t: f64, y: &DVector<f64>) -> DVector<f64> {
        let (s, i) = (y[0], y[1]);
        let new_infections = self.infection_rate * s * i;
        let recoveries = self.recovery_rate * i;

        DVector::from_vec(vec![
            -new_infections,
            new_infections - recoveries,
            recoveries,
        ])
    }

    fn initial_state(&self) -> DVector<f64> {
        DVector::from_vec(vec![self.susceptible, self.infected, self.recovered])
    }

    fn name(&self) -> &str {
        "SIR Epidemic"
    }

    fn description(&self) -> Option<&str> {
        Some("Coupled S-I-R compartment dynamics with mass-action infection")
    }
}

// =================================================================================================
// Tests
// =================================================================================================
