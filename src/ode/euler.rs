//! Forward Euler integrator
//!
//! # Mathematical Background
//!
//! The explicit Euler method is the simplest time-stepping scheme for
//! `dy/dt = f(t, y)`:
//!
//! ```text
//! yᵢ₊₁ = yᵢ + h · f(tᵢ, yᵢ)
//! ```
//!
//! One slope, evaluated at the beginning of the interval, is used for
//! the whole step.
//!
//! # Characteristics
//!
//! - **Order**: first order — global error O(h)
//! - **Cost**: 1 function evaluation per step
//! - **Stability**: conditionally stable; needs a small `h` for fast
//!   dynamics
//!
//! Exact for `dy/dt = const`; for anything curved it systematically
//! lags the solution, which is precisely what the worked problems use
//! it to demonstrate against [`HeunSolver`](crate::ode::HeunSolver).
//!
//! # Example
//!
//! ```rust
//! use metnum_rs::models::NewtonCooling;
//! use metnum_rs::ode::{EulerSolver, IntegrationParams, OdeSolver};
//!
//! let coffee = NewtonCooling::new(90.0, 20.0, 0.1);
//! let trace = EulerSolver.solve(&coffee, &IntegrationParams::new(1.0, 30.0))?;
//!
//! // Cooling towards 20 °C
//! assert!(trace.final_state()[0] < 90.0);
//! assert!(trace.final_state()[0] > 20.0);
//! # Ok::<(), metnum_rs::error::SolverError>(())
//! ```

use crate::error::SolverResult;
use crate::function::OdeSystem;
use crate::ode::{IntegrationParams, OdeSolver, OdeStepRecord, OdeTrace, StageValues};

// =================================================================================================
// Forward Euler Solver
// =================================================================================================

/// Forward Euler time-stepping solver.
///
/// # Algorithm
///
/// 1. Validate parameters (typed failure before any record exists).
/// 2. Record the initial condition as iteration 0.
/// 3. For each step `i = 0..steps-1`:
///    - evaluate the slope `f(tᵢ, yᵢ)`;
///    - update `yᵢ₊₁ = yᵢ + h·f(tᵢ, yᵢ)`;
///    - record iteration `i+1` at `tᵢ₊₁ = (i+1)·h`.
///
/// Every record carries the slope evaluated at its own state — the
/// final record's slope is never used by an update but belongs in the
/// step table, which lists `f(t, y)` on every row the way the hand
/// calculation does.
///
/// Time points are computed as `i·h` from the index rather than
/// accumulated, so the final time matches `steps·h` to machine
/// precision.
#[derive(Debug, Clone, Copy, Default)]
pub struct EulerSolver;

impl EulerSolver {
    /// Create a new Forward Euler solver.
    pub fn new() -> Self {
        Self
    }
}

impl OdeSolver for EulerSolver {
    fn solve(&self, system: &dyn OdeSystem, params: &IntegrationParams) -> SolverResult<OdeTrace> {
        // ====== Step 1: Validation ======

        params.validate()?;

        // ====== Step 2: Setup ======

        let h = params.step_size;
        let steps = params.steps();

        let mut state = system.initial_state();
        let mut records = Vec::with_capacity(steps + 1);

        // ====== Step 3: Time Integration ======

        for i in 0..=steps {
            let t = (i as f64) * h;

            // Slope at the current state; recorded on this row and,
            // except on the last row, used for the update below
            let slope = system.rhs(t, &state);

            records.push(OdeStepRecord {
                iteration: i,
                t,
                state: state.clone(),
                h,
                stages: Some(StageValues::Euler {
                    slope: slope.clone(),
                }),
            });

            if i < steps {
                state += slope * h;
            }
        }

        // ====== Step 4: Build Result ======

        let mut trace = OdeTrace::new(records);
        trace.add_metadata("solver", self.name());
        trace.add_metadata("system", system.name());
        trace.add_metadata("step size", &h.to_string());
        trace.add_metadata("t final", &params.t_final.to_string());
        trace.add_metadata("steps", &steps.to_string());

        Ok(trace)
    }

    fn name(&self) -> &'static str {
        "Euler"
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolverError;
    use nalgebra::DVector;

    // ====== Mock systems with known analytic solutions ======

    /// dy/dt = c, exact solution y(t) = y₀ + c·t (Euler is exact here)
    struct ConstantGrowth {
        rate: f64,
    }

    impl OdeSystem for ConstantGrowth {
        fn dimension(&self) -> usize {
            1
        }

        fn rhs(&self, _t: f64, _y: &DVector<f64>) -> DVector<f64> {
            DVector::from_vec(vec![self.rate])
        }

        fn initial_state(&self) -> DVector<f64> {
            DVector::from_vec(vec![0.0])
        }

        fn name(&self) -> &str {
            "Constant Growth"
        }
    }

    /// dy/dt = -k·y, exact solution y(t) = y₀·e^(-kt)
    struct ExponentialDecay {
        decay_rate: f64,
    }

    impl OdeSystem for ExponentialDecay {
        fn dimension(&self) -> usize {
            1
        }

        fn rhs(&self, _t: f64, y: &DVector<f64>) -> DVector<f64> {
            DVector::from_vec(vec![-self.decay_rate * y[0]])
        }

        fn initial_state(&self) -> DVector<f64> {
            DVector::from_vec(vec![1.0])
        }

        fn name(&self) -> &str {
            "Exponential Decay"
        }
    }

    // ====== Creation ======

    #[test]
    fn test_solver_name() {
        assert_eq!(EulerSolver::new().name(), "Euler");
        assert_eq!(EulerSolver::default().name(), "Euler");
    }

    // ====== Validation ======

    #[test]
    fn test_rejects_bad_step_size() {
        let system = ConstantGrowth { rate: 1.0 };
        let result = EulerSolver.solve(&system, &IntegrationParams::new(0.0, 10.0));
        assert!(matches!(result, Err(SolverError::InvalidStepSize { .. })));
    }

    #[test]
    fn test_rejects_bad_horizon() {
        let system = ConstantGrowth { rate: 1.0 };
        let result = EulerSolver.solve(&system, &IntegrationParams::new(0.1, -3.0));
        assert!(matches!(result, Err(SolverError::InvalidHorizon { .. })));
    }

    // ====== Trace shape ======

    #[test]
    fn test_trace_length_and_times() {
        let system = ConstantGrowth { rate: 1.0 };
        let params = IntegrationParams::new(0.5, 10.0);
        let trace = EulerSolver.solve(&system, &params).unwrap();

        assert_eq!(trace.len(), 21);
        assert_eq!(trace.records[0].t, 0.0);
        assert_eq!(trace.records[0].state[0], 0.0);
        assert!((trace.final_time() - 10.0).abs() < 1e-12);

        // Uniform spacing, computed from the index
        for pair in trace.records.windows(2) {
            assert!(((pair[1].t - pair[0].t) - 0.5).abs() < 1e-12);
        }
    }

    #[test]
    fn test_every_record_carries_slope() {
        let system = ExponentialDecay { decay_rate: 0.1 };
        let trace = EulerSolver
            .solve(&system, &IntegrationParams::new(1.0, 5.0))
            .unwrap();

        for record in &trace.records {
            match &record.stages {
                Some(StageValues::Euler { slope }) => {
                    // Slope is f evaluated at the record's own state
                    assert!((slope[0] - (-0.1 * record.state[0])).abs() < 1e-15);
                }
                other => panic!("expected Euler stage values, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_horizon_shorter_than_step() {
        let system = ConstantGrowth { rate: 1.0 };
        let trace = EulerSolver
            .solve(&system, &IntegrationParams::new(2.0, 1.0))
            .unwrap();

        // floor(1/2) = 0 steps: only the initial record
        assert_eq!(trace.len(), 1);
        assert_eq!(trace.final_time(), 0.0);
    }

    // ====== Accuracy ======

    #[test]
    fn test_exact_for_constant_growth() {
        let system = ConstantGrowth { rate: 2.0 };
        let trace = EulerSolver
            .solve(&system, &IntegrationParams::new(0.1, 10.0))
            .unwrap();

        // y(10) = 0 + 2·10 = 20, exact for constant slope
        assert!((trace.final_state()[0] - 20.0).abs() < 1e-10);
    }

    #[test]
    fn test_first_order_error_on_decay() {
        let system = ExponentialDecay { decay_rate: 0.1 };
        let trace = EulerSolver
            .solve(&system, &IntegrationParams::new(0.01, 10.0))
            .unwrap();

        let exact = (-0.1_f64 * 10.0).exp();
        let error = (trace.final_state()[0] - exact).abs();

        // O(h) error with h = 0.01
        assert!(error < 0.01, "error {} too large for h = 0.01", error);
    }

    #[test]
    fn test_metadata() {
        let system = ConstantGrowth { rate: 1.0 };
        let trace = EulerSolver
            .solve(&system, &IntegrationParams::new(0.5, 10.0))
            .unwrap();

        assert_eq!(trace.metadata.get("solver"), Some(&"Euler".to_string()));
        assert_eq!(trace.metadata.get("steps"), Some(&"20".to_string()));
        assert_eq!(trace.metadata.get("system"), Some(&"Constant Growth".to_string()));
    }

    #[test]
    fn test_idempotence_bit_identical() {
        let system = ExponentialDecay { decay_rate: 0.3 };
        let params = IntegrationParams::new(0.25, 5.0);

        let first = EulerSolver.solve(&system, &params).unwrap();
        let second = EulerSolver.solve(&system, &params).unwrap();

        assert_eq!(first.len(), second.len());
        for (a, b) in first.records.iter().zip(second.records.iter()) {
            assert_eq!(a.state[0].to_bits(), b.state[0].to_bits());
            assert_eq!(a.t.to_bits(), b.t.to_bits());
        }
    }
}
