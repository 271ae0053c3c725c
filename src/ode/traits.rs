//! ODE solver trait, parameters and trace types
//!
//! # Design Philosophy
//!
//! Mirrors the engine-wide pattern:
//! - [`IntegrationParams`] validates the numerical parameters up
//!   front and returns a typed failure before any record is produced.
//! - [`OdeTrace`] is the structured result: an ordered record
//!   sequence plus diagnostic metadata, owned by the caller after
//!   return and never mutated by the engine afterwards.
//! - The [`OdeSolver`] trait is the stable interface every
//!   integration scheme implements; solvers are stateless unit
//!   structs, so one instance can serve any number of concurrent
//!   calls.

use std::collections::HashMap;

use nalgebra::DVector;

use crate::error::{SolverError, SolverResult};
use crate::function::OdeSystem;

// =================================================================================================
// Integration Parameters
// =================================================================================================

/// Numerical parameters for a fixed-step integration.
///
/// # Example
///
/// ```rust
/// use metnum_rs::ode::IntegrationParams;
///
/// let params = IntegrationParams::new(1.0, 30.0);
/// assert_eq!(params.steps(), 30);
/// assert!(params.validate().is_ok());
///
/// // Non-positive values are rejected, never clamped
/// assert!(IntegrationParams::new(-0.5, 30.0).validate().is_err());
/// assert!(IntegrationParams::new(1.0, 0.0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct IntegrationParams {
    /// Step size `h`
    pub step_size: f64,

    /// Integration horizon: the trace covers `[0, t_final]`
    pub t_final: f64,
}

impl IntegrationParams {
    /// Create parameters for a fixed-step run.
    pub fn new(step_size: f64, t_final: f64) -> Self {
        Self { step_size, t_final }
    }

    /// Validate that the parameters are numerically meaningful.
    ///
    /// # Errors
    ///
    /// - [`SolverError::InvalidStepSize`] when `step_size` is not a
    ///   finite positive number.
    /// - [`SolverError::InvalidHorizon`] when `t_final` is not a
    ///   finite positive number.
    pub fn validate(&self) -> Result<(), SolverError> {
        if !self.step_size.is_finite() || self.step_size <= 0.0 {
            return Err(SolverError::InvalidStepSize {
                step_size: self.step_size,
            });
        }
        if !self.t_final.is_finite() || self.t_final <= 0.0 {
            return Err(SolverError::InvalidHorizon {
                t_final: self.t_final,
            });
        }
        Ok(())
    }

    /// Number of integration steps, `floor(t_final / h)`.
    ///
    /// The trace holds `steps() + 1` records including the initial
    /// condition.
    pub fn steps(&self) -> usize {
        (self.t_final / self.step_size).floor() as usize
    }
}

// =================================================================================================
// Step Records
// =================================================================================================

/// Per-stage values recorded for one integration step.
///
/// Which variant appears depends on the scheme that produced the
/// trace; the initial record of a Heun trace carries no stage values
/// at all (`stages: None`), matching the hand-written tables where
/// iteration 0 only lists the initial condition.
#[derive(Debug, Clone, PartialEq)]
pub enum StageValues {
    /// Euler records the single slope `f(tᵢ, yᵢ)` used (or, on the
    /// final record, merely evaluated) at this step.
    Euler {
        /// Slope at the record's own state
        slope: DVector<f64>,
    },

    /// Heun records both slopes and the intermediate predictor state.
    Heun {
        /// Predictor slope k₁ = f(tᵢ₋₁, yᵢ₋₁)
        k1: DVector<f64>,
        /// Euler-type predicted state yᵢ₋₁ + h·k₁
        predictor: DVector<f64>,
        /// Corrector slope k₂ = f(tᵢ₋₁ + h, predictor)
        k2: DVector<f64>,
    },
}

/// One record of an integration trace.
#[derive(Debug, Clone, PartialEq)]
pub struct OdeStepRecord {
    /// Iteration index, `0..=steps`
    pub iteration: usize,

    /// Time `iteration · h`
    pub t: f64,

    /// State vector at `t` (dimension-1 for scalar problems)
    pub state: DVector<f64>,

    /// Step size used (identical on every record)
    pub h: f64,

    /// Stage values, where the scheme produces them
    pub stages: Option<StageValues>,
}

// =================================================================================================
// Trace
// =================================================================================================

/// Ordered integration trace plus diagnostic metadata.
///
/// # Invariants
///
/// - `records[0].t == 0` and `records[0].state` is the initial
///   condition.
/// - `records[i].t == records[i-1].t + h` for `i > 0` (times are
///   computed from the index, so the identity holds to rounding).
/// - Length is `floor(t_final / h) + 1`.
#[derive(Debug, Clone)]
pub struct OdeTrace {
    /// Step records in iteration order
    pub records: Vec<OdeStepRecord>,

    /// Diagnostic metadata (solver, h, t_final, steps); never read by
    /// the engine
    pub metadata: HashMap<String, String>,
}

impl OdeTrace {
    pub(crate) fn new(records: Vec<OdeStepRecord>) -> Self {
        Self {
            records,
            metadata: HashMap::new(),
        }
    }

    /// Attach a metadata entry.
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    /// Number of records (`steps + 1`).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the trace holds no records (never the case for a
    /// trace returned by a solver).
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The last record of the trace.
    ///
    /// # Panics
    ///
    /// Panics on an empty trace; solver-produced traces always hold at
    /// least the initial record.
    pub fn final_record(&self) -> &OdeStepRecord {
        self.records.last().expect("trace holds at least the initial record")
    }

    /// Final state vector.
    pub fn final_state(&self) -> &DVector<f64> {
        &self.final_record().state
    }

    /// Final time reached, `steps · h`.
    pub fn final_time(&self) -> f64 {
        self.final_record().t
    }

    /// Time points of every record, in order.
    pub fn time_points(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.t).collect()
    }

    /// Series of one state component across the trace (useful for
    /// tables, CSV export and plotting).
    ///
    /// # Panics
    ///
    /// Panics when `component` is out of range for the system
    /// dimension.
    pub fn component(&self, component: usize) -> Vec<f64> {
        self.records.iter().map(|r| r.state[component]).collect()
    }
}

// =================================================================================================
// Solver Trait
// =================================================================================================

/// Interface implemented by every fixed-step integration scheme.
///
/// # Contract
///
/// - `solve` validates `params` before touching the system; a
///   validation failure returns the typed error and no trace.
/// - The returned trace satisfies the [`OdeTrace`] invariants.
/// - `solve` is a pure function of `(system, params)`: no state is
///   kept between calls, and identical inputs produce bit-identical
///   traces.
///
/// # Implementing a New Scheme
///
/// ```rust
/// use metnum_rs::error::SolverResult;
/// use metnum_rs::function::OdeSystem;
/// use metnum_rs::ode::{IntegrationParams, OdeSolver, OdeTrace};
///
/// struct MyScheme;
///
/// impl OdeSolver for MyScheme {
///     fn solve(&self, system: &dyn OdeSystem, params: &IntegrationParams)
///         -> SolverResult<OdeTrace>
///     {
///         params.validate()?;
///         // ... apply the scheme ...
///         # let _ = system;
///         # unimplemented!()
///     }
///
///     fn name(&self) -> &'static str {
///         "My Scheme"
///     }
/// }
/// ```
pub trait OdeSolver {
    /// Integrate `system` over `[0, params.t_final]`.
    fn solve(&self, system: &dyn OdeSystem, params: &IntegrationParams) -> SolverResult<OdeTrace>;

    /// Display name of the scheme.
    fn name(&self) -> &'static str;
}

// =================================================================================================
// Tests
// =================================================================================================
