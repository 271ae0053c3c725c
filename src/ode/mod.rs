//! Fixed-step ODE integration engine
//!
//! Solves initial-value problems `dy/dt = f(t, y)`, `y(0) = y₀` over
//! `[0, t_final]` with a fixed step `h`, producing a full per-step
//! trace ([`OdeTrace`]) rather than just the final state: the
//! engine's callers render the trace as the hand-calculation tables
//! students check their work against.
//!
//! # Architecture (WHAT vs HOW)
//!
//! - An [`OdeSystem`](crate::function::OdeSystem) supplies the
//!   equations, the dimension and the initial condition (WHAT to
//!   solve).
//! - [`IntegrationParams`] carries the numerical parameters (`h`,
//!   `t_final`) and validates them before any record exists (HOW
//!   finely to solve).
//! - A [`OdeSolver`] implementation applies one numerical scheme
//!   (HOW to solve):
//!
//! | Solver | Scheme | Order | Evaluations/step |
//! |--------|--------|-------|------------------|
//! | [`EulerSolver`] | explicit Euler | 1 | 1 |
//! | [`HeunSolver`] | predictor-corrector | 2 | 2 |
//!
//! # Coupled Systems
//!
//! The state is a single `DVector<f64>`: a scalar equation is a
//! dimension-1 system, and a coupled system (e.g. the S-I-R epidemic
//! equations) is a dimension-n system. Every stage is formed as a
//! complete vector (all k₁ components from `yᵢ`, the whole predictor
//! before any k₂ component), so component coupling stays correct by
//! construction; there is no sequential per-component update to get
//! wrong.
//!
//! # Quick Start
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
//! assert_eq!(euler.len(), 31); // initial record + 30 steps
//! assert_eq!(heun.len(), 31);
//! # Ok::<(), metnum_rs::error::SolverError>(())
//! ```

// =================================================================================================
// Module Declarations
// =================================================================================================

mod euler;
mod heun;
mod traits;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use euler::EulerSolver;
pub use heun::HeunSolver;
pub use traits::{IntegrationParams, OdeSolver, OdeStepRecord, OdeTrace, StageValues};
