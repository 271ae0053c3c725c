//! Heun (improved Euler) integrator
//!
//! # Mathematical Background
//!
//! Heun's method is a two-stage predictor-corrector scheme for
//! `dy/dt = f(t, y)`:
//!
//! ```text
//! k₁ = f(tᵢ, yᵢ)                 (slope at the start)
//! y* = yᵢ + h·k₁                 (Euler-type predictor)
//! k₂ = f(tᵢ + h, y*)             (slope at the predicted end)
//! yᵢ₊₁ = yᵢ + (h/2)·(k₁ + k₂)    (corrector: average slope)
//! ```
//!
//! Averaging the slope at both ends of the interval cancels the
//! first-order error term of plain Euler.
//!
//! # Characteristics
//!
//! - **Order**: second order — global error O(h²)
//! - **Cost**: 2 function evaluations per step
//! - **Stability**: better than Euler at the same `h`
//!
//! # Coupled Systems
//!
//! Each stage is formed as a complete vector: every k₁ component is
//! evaluated from `yᵢ`, the full predictor vector exists before any
//! k₂ component is evaluated, and every k₂ component sees the whole
//! predictor. Evaluating components one at a time against a
//! half-updated state is the classic coupling mistake this structure
//! rules out.
//!
//! # Example
//!
//! ```rust
//! use metnum_rs::models::NewtonCooling;
//! use metnum_rs::ode::{EulerSolver, HeunSolver, IntegrationParams, OdeSolver};
//!
//! let coffee = NewtonCooling::new(90.0, 20.0, 0.1);
//! let params = IntegrationParams::new(1.0, 30.0);
//!
//! let euler = EulerSolver.solve(&coffee, &params)?;
//! let heun = HeunSolver.solve(&coffee, &params)?;
//!
//! let exact = coffee.exact_temperature(30.0);
//! let euler_error = (euler.final_state()[0] - exact).abs();
//! let heun_error = (heun.final_state()[0] - exact).abs();
//!
//! assert!(heun_error < euler_error);
//! # Ok::<(), metnum_rs::error::SolverError>(())
//! ```

use crate::error::SolverResult;
use crate::function::OdeSystem;
use crate::ode::{IntegrationParams, OdeSolver, OdeStepRecord, OdeTrace, StageValues};

// =================================================================================================
// Heun Solver
// =================================================================================================

/// Heun predictor-corrector solver.
///
/// # Algorithm
///
/// 1. Validate parameters (typed failure before any record exists).
/// 2. Record the initial condition as iteration 0 — stage values are
///    absent there, matching the hand-written tables where row 0 only
///    lists `y(0)`.
/// 3. For each step `i = 1..=steps`:
///    - k₁ from the current state;
///    - predictor `y* = y + h·k₁` (full vector);
///    - k₂ from the predictor at `t + h`;
///    - corrected state `y + (h/2)(k₁ + k₂)`, recorded together with
///      k₁, the predictor and k₂.
///
/// Time points are computed as `i·h` from the index, not accumulated.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeunSolver;

impl HeunSolver {
    /// Create a new Heun solver.
    pub fn new() -> Self {
        Self
    }
}

impl OdeSolver for HeunSolver {
    fn solve(&self, system: &dyn OdeSystem, params: &IntegrationParams) -> SolverResult<OdeTrace> {
        // ====== Step 1: Validation ======

        params.validate()?;

        // ====== Step 2: Setup ======

        let h = params.step_size;
        let steps = params.steps();

        let mut state = system.initial_state();
        let mut records = Vec::with_capacity(steps + 1);

        // Iteration 0: initial condition only, no stages
        records.push(OdeStepRecord {
            iteration: 0,
            t: 0.0,
            state: state.clone(),
            h,
            stages: None,
        });

        // ====== Step 3: Time Integration ======

        for i in 1..=steps {
            let t = ((i - 1) as f64) * h;

            // Predictor stage: slope at the start, full-vector Euler step
            let k1 = system.rhs(t, &state);
            let predictor = &state + &k1 * h;

            // Corrector stage: slope at the predicted end point
            let k2 = system.rhs(t + h, &predictor);

            // Average the two slopes over the step
            state += (&k1 + &k2) * (h / 2.0);

            records.push(OdeStepRecord {
                iteration: i,
                t: (i as f64) * h,
                state: state.clone(),
                h,
                stages: Some(StageValues::Heun { k1, predictor, k2 }),
            });
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
        "Heun"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
