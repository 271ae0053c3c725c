//! Composite trapezoidal rule
//!
//! # Mathematical Background
//!
//! The trapezoidal rule replaces the integrand by a straight line on
//! each subinterval and sums the trapezoid areas:
//!
//! ```text
//! ∫ₐᵇ f(x) dx ≈ (h/2) · (y₀ + yₙ + 2·Σᵢ₌₁ⁿ⁻¹ yᵢ)
//! ```
//!
//! # Characteristics
//!
//! - **Order**: exact for polynomials of degree ≤ 1
//! - **Error**: O(h²) for smooth integrands
//! - **Precondition**: none — any `n >= 1` is accepted
//!
//! Compared with the Simpson rules it needs no parity on `n`, which is
//! why the worked problems offer it as the always-applicable baseline.

use super::QuadratureNode;

/// Apply the trapezoidal weights to an evaluated node table.
///
/// The node table is produced by
/// [`integrate`](crate::quadrature::integrate); `nodes.len() == n + 1`.
pub(super) fn weighted_sum(nodes: &[QuadratureNode], h: f64) -> f64 {
    let n = nodes.len() - 1;

    // Endpoints weight 1, interior nodes weight 2
    let mut sum = nodes[0].y + nodes[n].y;
    for node in &nodes[1..n] {
        sum += 2.0 * node.y;
    }

    (h / 2.0) * sum
}

// =================================================================================================
// Tests
// =================================================================================================
