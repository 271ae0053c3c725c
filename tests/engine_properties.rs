//! Contract properties of the numerical engines
//!
//! End-to-end checks of the behaviours the engines guarantee to their
//! callers: exactness classes of the quadrature rules, method
//! orderings on the worked problems, typed precondition failures, and
//! purity (bit-identical reruns).

use metnum_rs::analysis::{rank_by_accuracy, relative_error};
use metnum_rs::error::SolverError;
use metnum_rs::function::WithDerivative;
use metnum_rs::models::{BeamVolume, NewtonCooling, SirEpidemic};
use metnum_rs::ode::{EulerSolver, HeunSolver, IntegrationParams, OdeSolver};
use metnum_rs::quadrature::{QuadratureRule, integrate};
use metnum_rs::roots::{RootFinderParams, RootStatus, bisect, newton};

mod common;
use common::test_helpers::assert_traces_identical;
use common::{ConstantGrowth, ExponentialDecay};

// =================================================================================================
// Quadrature Properties
// =================================================================================================

#[test]
fn test_trapezoid_exact_on_linear_for_any_n() {
    // Degree ≤ 1 is the trapezoid's exactness class
    let f = |x: f64| 3.0 * x + 2.0;
    // ∫₁⁴ (3x + 2) dx = 28.5
    for n in [1, 2, 3, 7, 50] {
        let result = integrate(&f, 1.0, 4.0, n, QuadratureRule::Trapezoidal).unwrap();
        assert!(
            (result.approximation - 28.5).abs() < 1e-10,
            "n = {} gave {}",
            n,
            result.approximation
        );
    }
}

#[test]
fn test_simpson_rules_exact_on_cubic_for_any_valid_n() {
    // Degree ≤ 3 is the Simpson exactness class
    let f = |x: f64| x * x * x - 2.0 * x * x + 5.0;
    // ∫₀² (x³ - 2x² + 5) dx = 4 - 16/3 + 10
    let exact = 4.0 - 16.0 / 3.0 + 10.0;

    for n in [2, 4, 8, 20] {
        let result = integrate(&f, 0.0, 2.0, n, QuadratureRule::Simpson13).unwrap();
        assert!((result.approximation - exact).abs() < 1e-10);
    }
    for n in [3, 6, 9, 21] {
        let result = integrate(&f, 0.0, 2.0, n, QuadratureRule::Simpson38).unwrap();
        assert!((result.approximation - exact).abs() < 1e-10);
    }
}

#[test]
fn test_doubling_n_strictly_improves_all_rules() {
    // Smooth non-polynomial integrand over [0, 10]
    let f = |t: f64| 10.0 * t * (-0.5 * t).exp();
    let anti = |t: f64| -40.0 * (-0.5 * t).exp() - 20.0 * t * (-0.5 * t).exp();
    let exact = anti(10.0) - anti(0.0);

    for rule in QuadratureRule::all() {
        // n = 6 satisfies every rule; doubling preserves that
        let mut n = 6;
        let mut previous = f64::INFINITY;
        for _ in 0..4 {
            let result = integrate(&f, 0.0, 10.0, n, rule).unwrap();
            let error = (result.approximation - exact).abs();
            assert!(
                error < previous,
                "{} error did not shrink at n = {}",
                rule.name(),
                n
            );
            previous = error;
            n *= 2;
        }
    }
}

#[test]
fn test_simpson13_rejects_odd_n() {
    let result = integrate(&|x: f64| x, 0.0, 1.0, 7, QuadratureRule::Simpson13);

    match result {
        Err(SolverError::StructuralPrecondition { rule, n, .. }) => {
            assert_eq!(rule, "Simpson 1/3");
            assert_eq!(n, 7);
        }
        other => panic!("expected StructuralPrecondition, got {:?}", other),
    }
}

#[test]
fn test_quadrature_accuracy_ranking() {
    // With matched n, both Simpson rules beat the trapezoid on a
    // smooth curve; report in the fixed method order
    let f = |t: f64| 10.0 * t * (-0.5 * t).exp();
    let anti = |t: f64| -40.0 * (-0.5 * t).exp() - 20.0 * t * (-0.5 * t).exp();
    let exact = anti(10.0) - anti(0.0);

    let candidates: Vec<(&str, f64)> = QuadratureRule::all()
        .iter()
        .map(|&rule| {
            let approx = integrate(&f, 0.0, 10.0, 12, rule).unwrap().approximation;
            (rule.name(), approx)
        })
        .collect();

    let ranked = rank_by_accuracy(&candidates, exact);
    assert_eq!(ranked[2].label, "Trapezoidal");
}

// =================================================================================================
// ODE Properties
// =================================================================================================

#[test]
fn test_heun_beats_euler_on_cooling_reference() {
    // T' = -0.1(T - 20), T(0) = 90, h = 1, t_final = 30
    let coffee = NewtonCooling::new(90.0, 20.0, 0.1);
    let params = IntegrationParams::new(1.0, 30.0);

    let euler = EulerSolver.solve(&coffee, &params).unwrap();
    let heun = HeunSolver.solve(&coffee, &params).unwrap();

    // Exact: T(30) = 20 + 70e^(-3)
    let exact = 20.0 + 70.0 * (-3.0_f64).exp();
    assert!((coffee.exact_temperature(30.0) - exact).abs() < 1e-12);

    let euler_error = (euler.final_state()[0] - exact).abs();
    let heun_error = (heun.final_state()[0] - exact).abs();

    assert!(
        heun_error < euler_error,
        "Heun error {} not strictly below Euler error {}",
        heun_error,
        euler_error
    );
}

#[test]
fn test_euler_exact_for_constant_slope() {
    // dy/dt = c has no curvature, so one slope per step is enough
    let system = ConstantGrowth::new(2.0);
    let trace = EulerSolver
        .solve(&system, &IntegrationParams::new(0.5, 10.0))
        .unwrap();

    assert!((trace.final_state()[0] - system.analytical_solution(10.0)).abs() < 1e-10);
}

#[test]
fn test_trace_time_grid_invariants() {
    let system = ExponentialDecay::new(0.2);
    let params = IntegrationParams::new(0.25, 10.0);

    for trace in [
        EulerSolver.solve(&system, &params).unwrap(),
        HeunSolver.solve(&system, &params).unwrap(),
    ] {
        assert_eq!(trace.len(), 41);
        assert_eq!(trace.records[0].t, 0.0);
        assert_eq!(trace.records[0].state[0], 1.0);

        for pair in trace.records.windows(2) {
            assert!(((pair[1].t - pair[0].t) - 0.25).abs() < 1e-12);
        }
        assert!((trace.final_time() - 10.0).abs() < 1e-12);
    }
}

#[test]
fn test_ode_rejects_bad_parameters_before_work() {
    let system = ExponentialDecay::new(0.2);

    assert!(matches!(
        EulerSolver.solve(&system, &IntegrationParams::new(0.0, 10.0)),
        Err(SolverError::InvalidStepSize { .. })
    ));
    assert!(matches!(
        HeunSolver.solve(&system, &IntegrationParams::new(0.5, -1.0)),
        Err(SolverError::InvalidHorizon { .. })
    ));
}

#[test]
fn test_coupled_system_methods_agree_on_conserved_quantity() {
    // Population conservation holds for both methods independently of
    // accuracy, because the slopes sum to zero componentwise
    let outbreak = SirEpidemic::new(999.0, 1.0, 0.0, 0.0005, 0.1);
    let params = IntegrationParams::new(0.5, 60.0);

    for trace in [
        EulerSolver.solve(&outbreak, &params).unwrap(),
        HeunSolver.solve(&outbreak, &params).unwrap(),
    ] {
        let total: f64 = trace.final_state().iter().sum();
        assert!((total - outbreak.population()).abs() < 1e-6);
    }
}

// =================================================================================================
// Root-Finding Properties
// =================================================================================================

#[test]
fn test_bisection_on_beam_reference() {
    // x³ = 750 over [5, 15] → 9.085603
    let beam = BeamVolume::new(750.0);
    let result = bisect(&beam, 5.0, 15.0, &RootFinderParams::default()).unwrap();

    assert!(result.converged);
    assert!(relative_error(result.root, 9.085603) < 1e-4);

    // Bracket width halves every iteration
    for pair in result.trace.windows(2) {
        let before = pair[0].b - pair[0].a;
        let after = pair[1].b - pair[1].a;
        assert!((after - before / 2.0).abs() < 1e-12);
    }
}

#[test]
fn test_newton_converges_in_fewer_iterations_than_bisection() {
    let beam = BeamVolume::new(750.0);
    let params = RootFinderParams::default();

    let bis = bisect(&beam, 5.0, 15.0, &params).unwrap();
    let newt = newton(&beam, 10.0, &params).unwrap();

    assert!(bis.converged && newt.converged);
    assert!(relative_error(newt.root, bis.root) < 1e-3);
    assert!(
        newt.iterations < bis.iterations,
        "Newton {} iterations vs bisection {}",
        newt.iterations,
        bis.iterations
    );
}

#[test]
fn test_same_sign_bracket_yields_no_sign_change_and_no_trace() {
    let beam = BeamVolume::new(750.0);

    // Both endpoints below the root: f < 0 on the whole bracket
    let result = bisect(&beam, 1.0, 5.0, &RootFinderParams::default());

    match result {
        Err(SolverError::NoSignChange { fa, fb, .. }) => {
            assert!(fa < 0.0 && fb < 0.0);
        }
        other => panic!("expected NoSignChange, got {:?}", other),
    }
}

#[test]
fn test_newton_derivative_guard_keeps_partial_trace() {
    // Flat tangent at the seed: x³ with seed 0 never moves
    let f = WithDerivative::new(|x: f64| x * x * x - 8.0, |x: f64| 3.0 * x * x);
    let result = newton(&f, 0.0, &RootFinderParams::default()).unwrap();

    assert!(!result.converged);
    assert!(matches!(result.status, RootStatus::DerivativeNearZero { .. }));
    assert_eq!(result.iterations, 1);
}

// =================================================================================================
// Purity
// =================================================================================================

#[test]
fn test_engines_are_pure_across_calls() {
    let system = ExponentialDecay::new(0.3);
    let params = IntegrationParams::new(0.1, 5.0);

    assert_traces_identical(
        &EulerSolver.solve(&system, &params).unwrap(),
        &EulerSolver.solve(&system, &params).unwrap(),
    );
    assert_traces_identical(
        &HeunSolver.solve(&system, &params).unwrap(),
        &HeunSolver.solve(&system, &params).unwrap(),
    );

    let beam = BeamVolume::new(750.0);
    let first = bisect(&beam, 5.0, 15.0, &RootFinderParams::default()).unwrap();
    let second = bisect(&beam, 5.0, 15.0, &RootFinderParams::default()).unwrap();
    assert_eq!(first.iterations, second.iterations);
    assert_eq!(first.root.to_bits(), second.root.to_bits());
}
