//! Function models supplied to the numerical engines
//!
//! This module defines the seams between the problems (WHAT is being
//! analysed) and the engines (HOW it is analysed):
//!
//! - [`Integrand`]: a scalar function of one variable, consumed by the
//!   quadrature engine.
//! - [`OdeSystem`]: the right-hand side of `dy/dt = f(t, y)` together
//!   with its dimension and initial state, consumed by the ODE
//!   integrators. Scalar equations are dimension-1 systems; coupled
//!   systems (e.g. the three S-I-R equations) are dimension-n systems
//!   evaluated as one vector so that every component of a stage sees
//!   the same stage inputs.
//! - [`Objective`] / [`Differentiable`]: a scalar residual `f(x) = 0`
//!   for the root finders, optionally with a supplied closed-form
//!   derivative (Newton-Raphson never derives one itself).
//!
//! Plain closures `Fn(f64) -> f64` implement [`Integrand`] and
//! [`Objective`] directly; [`WithDerivative`] pairs two closures for
//! Newton. Concrete worked problems live in [`models`](crate::models).
//!
//! The engines never retain a function model beyond one invocation and
//! never mutate it — each call is a pure function of its inputs.

mod traits;

pub use traits::{Differentiable, Integrand, Objective, OdeSystem, WithDerivative};
