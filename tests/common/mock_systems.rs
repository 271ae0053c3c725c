//! Mock ODE systems for testing
//!
//! These systems have known analytical solutions, making them ideal
//! for validating solver accuracy independent of the worked problem
//! models.

use metnum_rs::function::OdeSystem;
use nalgebra::DVector;

// =================================================================================================
// Exponential Decay: dy/dt = -k·y
// =================================================================================================

/// Exponential decay: `dy/dt = -k·y`, `y(0) = 1`.
///
/// Analytical solution: `y(t) = e^(-kt)`.
pub struct ExponentialDecay {
    pub decay_rate: f64,
}

impl ExponentialDecay {
    pub fn new(decay_rate: f64) -> Self {
        Self { decay_rate }
    }

    /// Analytical solution at time `t`.
    pub fn analytical_solution(&self, t: f64) -> f64 {
        (-self.decay_rate * t).exp()
    }
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

// =================================================================================================
// Constant Growth: dy/dt = c
// =================================================================================================

/// Constant growth: `dy/dt = c`, `y(0) = 0`.
///
/// Analytical solution: `y(t) = c·t`. Euler is exact for this system.
pub struct ConstantGrowth {
    pub growth_rate: f64,
}

impl ConstantGrowth {
    pub fn new(growth_rate: f64) -> Self {
        Self { growth_rate }
    }

    /// Analytical solution at time `t`.
    pub fn analytical_solution(&self, t: f64) -> f64 {
        self.growth_rate * t
    }
}

impl OdeSystem for ConstantGrowth {
    fn dimension(&self) -> usize {
        1
    }

    fn rhs(&self, _t: f64, _y: &DVector<f64>) -> DVector<f64> {
        DVector::from_vec(vec![self.growth_rate])
    }

    fn initial_state(&self) -> DVector<f64> {
        DVector::from_vec(vec![0.0])
    }

    fn name(&self) -> &str {
        "Constant Growth"
    }
}
