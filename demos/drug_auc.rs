//! Demo: drug exposure (AUC) — three quadrature rules
//!
//! Plasma concentration c(t) = 10t·e^(-t/2) over a 10-hour window,
//! integrated by the trapezoid and both Simpson rules with n = 12 and
//! graded against the closed-form AUC.
//!
//! ```bash
//! cargo run --example drug_auc
//! ```

use metnum_rs::analysis::rank_by_accuracy;
use metnum_rs::models::DrugConcentration;
use metnum_rs::quadrature::{QuadratureRule, integrate};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("═══════════════════════════════════════════════════════");
    println!("  Drug Exposure (AUC) — Quadrature Comparison");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Problem parameters ======

    let drug = DrugConcentration::reference();
    let (a, b) = (0.0, 10.0); // Observation window (hours)
    let n = 12; // Subintervals: even AND divisible by 3

    println!("c(t) = 10·t·e^(-0.5t) over [{}, {}] h, n = {}", a, b, n);
    println!("Concentration peaks at t = {} h\n", drug.peak_time());

    // ====== Node table (shared by all rules) ======

    let trapezoid = integrate(&drug, a, b, n, QuadratureRule::Trapezoidal)?;

    println!("Node table:");
    println!("{:>4} {:>8} {:>12}", "i", "x", "c(x)");
    for node in &trapezoid.nodes {
        println!("{:>4} {:>8.4} {:>12.6}", node.index, node.x, node.y);
    }

    // ====== All three rules ======

    let exact = drug.exact_integral(a, b);
    let candidates: Vec<(&str, f64)> = QuadratureRule::all()
        .iter()
        .map(|&rule| {
            let result = integrate(&drug, a, b, n, rule).unwrap();
            (rule.name(), result.approximation)
        })
        .collect();

    println!("\nExact AUC = {:.6} mg·h/L\n", exact);

    let ranked = rank_by_accuracy(&candidates, exact);
    for (place, method) in ranked.iter().enumerate() {
        println!(
            "  {}. {:<12} AUC = {:>10.6}   abs err {:.2e}   rel err {:.4}%",
            place + 1,
            method.label,
            method.approximation,
            method.report.absolute_error,
            method.report.relative_error * 100.0
        );
    }

    // ====== Structural preconditions in action ======

    println!("\nPrecondition demo: Simpson 1/3 with n = 7 →");
    match integrate(&drug, a, b, 7, QuadratureRule::Simpson13) {
        Err(e) => println!("  rejected: {}", e),
        Ok(_) => unreachable!(),
    }

    Ok(())
}
