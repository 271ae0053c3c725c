//! Demo: beam sizing — bisection vs Newton-Raphson
//!
//! Side length of a cubic beam with volume 750 cm³: the residual
//! x³ - 750 solved by both root finders, printing the full iteration
//! tables the course renders.
//!
//! ```bash
//! cargo run --example beam
//! ```

use metnum_rs::models::BeamVolume;
use metnum_rs::roots::{RootFinderParams, bisect, newton};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("═══════════════════════════════════════════════════════");
    println!("  Beam Sizing — Bisection vs Newton-Raphson");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Problem parameters ======

    let beam = BeamVolume::new(750.0);
    let params = RootFinderParams::with_tolerance(1e-4);

    println!("f(x) = x³ - 750, f'(x) = 3x²");
    println!("Bisection bracket [5, 15], Newton seed x₀ = 10");
    println!("Tolerance {} on |f(x)|, analytic root {:.6}\n", params.tolerance, beam.exact_root());

    // ====== Bisection ======

    let bis = bisect(&beam, 5.0, 15.0, &params)?;

    println!("BISECTION");
    println!(
        "{:>4} {:>10} {:>10} {:>10} {:>12} {:>12} {:>12}",
        "#", "a", "b", "m", "f(a)", "f(m)", "|f(m)|"
    );
    for r in &bis.trace {
        println!(
            "{:>4} {:>10.6} {:>10.6} {:>10.6} {:>12.4} {:>12.6} {:>12.8}",
            r.iteration, r.a, r.b, r.m, r.fa, r.fm, r.tol
        );
    }
    println!(
        "  → root {:.6} in {} iterations (converged: {})\n",
        bis.root, bis.iterations, bis.converged
    );

    // ====== Newton-Raphson ======

    let newt = newton(&beam, 10.0, &params)?;

    println!("NEWTON-RAPHSON");
    println!("{:>4} {:>12} {:>14} {:>12} {:>12}", "#", "x", "f(x)", "f'(x)", "|f(x)|");
    for r in &newt.trace {
        println!(
            "{:>4} {:>12.8} {:>14.6} {:>12.4} {:>12.8}",
            r.iteration, r.x, r.fx, r.fpx, r.tol
        );
    }
    println!(
        "  → root {:.6} in {} iterations (converged: {})\n",
        newt.root, newt.iterations, newt.converged
    );

    // ====== Comparison ======

    println!("Linear vs quadratic convergence:");
    println!("  Bisection : {:>3} iterations", bis.iterations);
    println!("  Newton    : {:>3} iterations", newt.iterations);

    Ok(())
}
