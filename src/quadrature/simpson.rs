//! Composite Simpson rules (1/3 and 3/8)
//!
//! # Mathematical Background
//!
//! Simpson's rules replace the integrand by low-degree interpolating
//! polynomials — parabolas through triples of nodes (1/3 rule) or
//! cubics through quadruples (3/8 rule):
//!
//! ```text
//! 1/3:  ∫ₐᵇ f(x) dx ≈ (h/3)  · (y₀ + yₙ + 4·Σ_{odd i} yᵢ + 2·Σ_{even interior i} yᵢ)
//! 3/8:  ∫ₐᵇ f(x) dx ≈ (3h/8) · (y₀ + yₙ + 2·Σ_{i ≡ 0 mod 3} yᵢ + 3·Σ_{other interior i} yᵢ)
//! ```
//!
//! # Characteristics
//!
//! - **Order**: both rules are exact for polynomials of degree ≤ 3
//! - **Error**: O(h⁴) for smooth integrands
//! - **Preconditions**: the 1/3 rule tiles `[a, b]` with parabola
//!   segments spanning two subintervals each, so `n` must be even; the
//!   3/8 rule tiles with cubic segments spanning three, so `n` must be
//!   divisible by 3. The partition check happens before any function
//!   evaluation — a wrong `n` produces no node table at all.

use super::QuadratureNode;

/// Apply the Simpson 1/3 weights to an evaluated node table.
///
/// Caller guarantees `nodes.len() - 1` is even and at least 2,
/// enforced up front by the partition check in
/// [`integrate`](crate::quadrature::integrate).
pub(super) fn weighted_sum_13(nodes: &[QuadratureNode], h: f64) -> f64 {
    let n = nodes.len() - 1;

    let mut odd_sum = 0.0;
    let mut even_sum = 0.0;
    for node in &nodes[1..n] {
        if node.index % 2 != 0 {
            odd_sum += node.y;
        } else {
            even_sum += node.y;
        }
    }

    (h / 3.0) * (nodes[0].y + nodes[n].y + 4.0 * odd_sum + 2.0 * even_sum)
}

/// Apply the Simpson 3/8 weights to an evaluated node table.
///
/// Caller guarantees `nodes.len() - 1` is divisible by 3 and at least 3.
pub(super) fn weighted_sum_38(nodes: &[QuadratureNode], h: f64) -> f64 {
    let n = nodes.len() - 1;

    let mut multiple_of_3_sum = 0.0;
    let mut other_sum = 0.0;
    for node in &nodes[1..n] {
        if node.index % 3 == 0 {
            multiple_of_3_sum += node.y;
        } else {
            other_sum += node.y;
        }
    }

    (3.0 * h / 8.0) * (nodes[0].y + nodes[n].y + 2.0 * multiple_of_3_sum + 3.0 * other_sum)
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use crate::quadrature::{QuadratureRule, integrate};

    #[test]
    fn test_simpson13_exact_for_cubic() {
        // ∫₀¹ x³ dx = 1/4, exact for degree ≤ 3 regardless of (even) n
        for n in [2, 4, 6, 10] {
            let result =
                integrate(&|x: f64| x * x * x, 0.0, 1.0, n, QuadratureRule::Simpson13).unwrap();
            assert!(
                (result.approximation - 0.25).abs() < 1e-12,
                "n = {} gave {}",
                n,
                result.approximation
            );
        }
    }

    #[test]
    fn test_simpson38_exact_for_cubic() {
        // ∫₀² x³ dx = 4
        for n in [3, 6, 9, 12] {
            let result =
                integrate(&|x: f64| x * x * x, 0.0, 2.0, n, QuadratureRule::Simpson38).unwrap();
            assert!(
                (result.approximation - 4.0).abs() < 1e-12,
                "n = {} gave {}",
                n,
                result.approximation
            );
        }
    }

    #[test]
    fn test_simpson13_minimal_partition() {
        // n = 2 is a single parabola segment
        let result = integrate(&|x: f64| x * x, 0.0, 1.0, 2, QuadratureRule::Simpson13).unwrap();
        assert!((result.approximation - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_simpson38_minimal_partition() {
        // n = 3 is a single cubic segment
        let result = integrate(&|x: f64| x * x, 0.0, 1.0, 3, QuadratureRule::Simpson38).unwrap();
        assert!((result.approximation - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_signal_energy_against_closed_form() {
        // Radio signal from the worked problems: s(t) = 5cos(2πt) + 3
        // ∫₀¹ s(t) dt = 3 exactly (full period of the cosine)
        use std::f64::consts::PI;
        let s = |t: f64| 5.0 * (2.0 * PI * t).cos() + 3.0;

        let s13 = integrate(&s, 0.0, 1.0, 12, QuadratureRule::Simpson13).unwrap();
        let s38 = integrate(&s, 0.0, 1.0, 12, QuadratureRule::Simpson38).unwrap();

        assert!((s13.approximation - 3.0).abs() < 1e-3);
        assert!((s38.approximation - 3.0).abs() < 1e-3);
    }

    #[test]
    fn test_refinement_decreases_error() {
        let f = |t: f64| 10.0 * t * (-0.5 * t).exp();
        let anti = |t: f64| -40.0 * (-0.5 * t).exp() - 20.0 * t * (-0.5 * t).exp();
        let exact = anti(10.0) - anti(0.0);

        let mut previous_error = f64::INFINITY;
        for n in [6, 12, 24, 48] {
            // n chosen divisible by both 2 and 3 so the same refinement
            // sequence exercises both rules
            for rule in [QuadratureRule::Simpson13, QuadratureRule::Simpson38] {
                let result = integrate(&f, 0.0, 10.0, n, rule).unwrap();
                let error = (result.approximation - exact).abs();
                assert!(error.is_finite());
            }

            let result = integrate(&f, 0.0, 10.0, n, QuadratureRule::Simpson13).unwrap();
            let error = (result.approximation - exact).abs();
            assert!(
                error < previous_error,
                "error did not shrink at n = {}",
                n
            );
            previous_error = error;
        }
    }

    #[test]
    fn test_simpson_more_accurate_than_trapezoid() {
        let f = |t: f64| 10.0 * t * (-0.5 * t).exp();
        let anti = |t: f64| -40.0 * (-0.5 * t).exp() - 20.0 * t * (-0.5 * t).exp();
        let exact = anti(10.0) - anti(0.0);

        let trap = integrate(&f, 0.0, 10.0, 12, QuadratureRule::Trapezoidal).unwrap();
        let simp = integrate(&f, 0.0, 10.0, 12, QuadratureRule::Simpson13).unwrap();

        let trap_error = (trap.approximation - exact).abs();
        let simp_error = (simp.approximation - exact).abs();

        assert!(
            simp_error < trap_error,
            "Simpson error {} not smaller than trapezoid error {}",
            simp_error,
            trap_error
        );
    }
}
