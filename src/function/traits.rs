//! Function model traits and adapters
//!
//! # Design Philosophy
//!
//! The engines are generic over small traits instead of taking bare
//! closures everywhere:
//! - A worked problem can implement the trait on a named struct that
//!   also carries its parameters and analytic reference solution.
//! - A throwaway closure still works, through the blanket impls below.
//!
//! # Stability
//!
//! These traits are the public contract between problems and engines.
//! Extensions go into new optional traits, not into these.

use nalgebra::DVector;

// =================================================================================================
// Integrand (quadrature)
// =================================================================================================

/// A scalar function of one variable, `f(x)`.
///
/// Consumed by [`quadrature::integrate`](crate::quadrature::integrate),
/// which evaluates it at the `n + 1` partition nodes of `[a, b]`.
///
/// # Example
///
/// ```rust
/// use metnum_rs::function::Integrand;
///
/// // Closures are integrands
/// let f = |x: f64| x * x;
/// assert_eq!(f.evaluate(3.0), 9.0);
/// ```
pub trait Integrand {
    /// Evaluate the function at `x`.
    fn evaluate(&self, x: f64) -> f64;

    /// Name of the function (used for display and metadata).
    fn name(&self) -> &str {
        "integrand"
    }
}

impl<F> Integrand for F
where
    F: Fn(f64) -> f64,
{
    fn evaluate(&self, x: f64) -> f64 {
        self(x)
    }
}

// =================================================================================================
// ODE system
// =================================================================================================

/// Right-hand side of an initial-value problem `dy/dt = f(t, y)`.
///
/// # Responsibility
///
/// The system provides the equations; the integrators in
/// [`ode`](crate::ode) provide the method. A system never advances
/// time itself.
///
/// # Scalar vs coupled
///
/// The state is always a [`DVector`]. A scalar equation is a
/// dimension-1 system; a coupled system returns every component slope
/// from the **same** input vector, which is what keeps multi-variable
/// coupling correct: the integrators form complete stage vectors
/// (all k₁ components, then the whole predictor, then all k₂
/// components) and never update components sequentially within a
/// stage.
///
/// # Example
///
/// ```rust
/// use metnum_rs::function::OdeSystem;
/// use nalgebra::DVector;
///
/// /// dy/dt = -k·y
/// struct Decay { k: f64 }
///
/// impl OdeSystem for Decay {
///     fn dimension(&self) -> usize { 1 }
///
///     fn rhs(&self, _t: f64, y: &DVector<f64>) -> DVector<f64> {
///         DVector::from_vec(vec![-self.k * y[0]])
///     }
///
///     fn initial_state(&self) -> DVector<f64> {
///         DVector::from_vec(vec![1.0])
///     }
///
///     fn name(&self) -> &str { "Exponential Decay" }
/// }
/// ```
pub trait OdeSystem: Send + Sync {
    /// Number of coupled equations (length of the state vector).
    fn dimension(&self) -> usize;

    /// Evaluate the slopes `f(t, y)` for the full state vector.
    ///
    /// Must be a pure function of `(t, y)`; the integrators call it
    /// several times per step at different stage states.
    fn rhs(&self, t: f64, y: &DVector<f64>) -> DVector<f64>;

    /// Initial condition `y(0)`.
    ///
    /// Length must equal [`dimension`](Self::dimension).
    fn initial_state(&self) -> DVector<f64>;

    /// Name of the system (used for display and metadata).
    fn name(&self) -> &str;

    /// Optional description of the modelled problem.
    fn description(&self) -> Option<&str> {
        None
    }
}

// =================================================================================================
// Objective (root finding)
// =================================================================================================

/// A scalar residual `f(x)` whose roots are sought.
///
/// [`bisect`](crate::roots::bisect) needs only this; Newton-Raphson
/// additionally needs [`Differentiable`].
pub trait Objective {
    /// Evaluate the residual at `x`.
    fn evaluate(&self, x: f64) -> f64;

    /// Name of the objective (used for display and metadata).
    fn name(&self) -> &str {
        "objective"
    }
}

impl<F> Objective for F
where
    F: Fn(f64) -> f64,
{
    fn evaluate(&self, x: f64) -> f64 {
        self(x)
    }
}

/// An [`Objective`] with a supplied closed-form derivative.
///
/// The derivative is *supplied* by the problem (the caller wrote it
/// down analytically) — the engine performs no symbolic or numeric
/// differentiation.
pub trait Differentiable: Objective {
    /// Evaluate the derivative `f'(x)`.
    fn derivative(&self, x: f64) -> f64;
}

// =================================================================================================
// Closure adapter for Newton
// =================================================================================================

/// Pairs a function closure with its derivative closure so that plain
/// closures can drive [`newton`](crate::roots::newton).
///
/// # Example
///
/// ```rust
/// use metnum_rs::function::{Differentiable, Objective, WithDerivative};
///
/// // f(x) = x³ - 750, f'(x) = 3x²
/// let f = WithDerivative::new(|x: f64| x.powi(3) - 750.0, |x: f64| 3.0 * x * x);
///
/// assert_eq!(f.evaluate(10.0), 250.0);
/// assert_eq!(f.derivative(10.0), 300.0);
/// ```
pub struct WithDerivative<F, D> {
    f: F,
    df: D,
}

impl<F, D> WithDerivative<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    /// Create the pair from a function and its derivative.
    pub fn new(f: F, df: D) -> Self {
        Self { f, df }
    }
}

impl<F, D> Objective for WithDerivative<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    fn evaluate(&self, x: f64) -> f64 {
        (self.f)(x)
    }
}

impl<F, D> Differentiable for WithDerivative<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    fn derivative(&self, x: f64) -> f64 {
        (self.df)(x)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
