//! Demo: Newton's law of cooling — Euler vs Heun
//!
//! The course's opening problem: a 90 °C coffee cup in a 20 °C room,
//! integrated for 30 minutes with h = 1 min by both fixed-step
//! methods and compared against the closed-form solution.
//!
//! ```bash
//! cargo run --example cooling
//! ```

use metnum_rs::analysis::{compare, rank_by_accuracy};
use metnum_rs::models::NewtonCooling;
use metnum_rs::ode::{EulerSolver, HeunSolver, IntegrationParams, OdeSolver, StageValues};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("═══════════════════════════════════════════════════════");
    println!("  Newton Cooling — Euler vs Heun");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Problem parameters ======

    let t0 = 90.0; // Initial temperature (°C)
    let t_amb = 20.0; // Ambient temperature (°C)
    let k = 0.1; // Cooling constant (1/min)
    let h = 1.0; // Step size (min)
    let t_final = 30.0; // Horizon (min)

    println!("Parameters:");
    println!("  T(0)    : {} °C", t0);
    println!("  T_amb   : {} °C", t_amb);
    println!("  k       : {} 1/min", k);
    println!("  h       : {} min", h);
    println!("  t_final : {} min\n", t_final);

    let coffee = NewtonCooling::new(t0, t_amb, k);
    let params = IntegrationParams::new(h, t_final);

    // ====== Solve with both methods ======

    let euler = EulerSolver.solve(&coffee, &params)?;
    let heun = HeunSolver.solve(&coffee, &params)?;

    // ====== Euler table ======

    println!("EULER  T(i+1) = T(i) + h·f(t, T)");
    println!("{:>4} {:>8} {:>12} {:>12} {:>12} {:>12}", "#", "t", "T", "f(t,T)", "T exact", "error");
    for record in &euler.records {
        let slope = match &record.stages {
            Some(StageValues::Euler { slope }) => slope[0],
            _ => unreachable!(),
        };
        let exact = coffee.exact_temperature(record.t);
        println!(
            "{:>4} {:>8.2} {:>12.6} {:>12.6} {:>12.6} {:>12.8}",
            record.iteration,
            record.t,
            record.state[0],
            slope,
            exact,
            (record.state[0] - exact).abs()
        );
    }

    // ====== Heun table ======

    println!("\nHEUN  T(n+1) = T(n) + (h/2)(k1 + k2)");
    println!(
        "{:>4} {:>8} {:>12} {:>12} {:>12} {:>12} {:>12}",
        "#", "t", "T", "k1", "T+h·k1", "k2", "error"
    );
    for record in &heun.records {
        let exact = coffee.exact_temperature(record.t);
        match &record.stages {
            Some(StageValues::Heun { k1, predictor, k2 }) => println!(
                "{:>4} {:>8.2} {:>12.6} {:>12.6} {:>12.6} {:>12.6} {:>12.8}",
                record.iteration,
                record.t,
                record.state[0],
                k1[0],
                predictor[0],
                k2[0],
                (record.state[0] - exact).abs()
            ),
            None => println!(
                "{:>4} {:>8.2} {:>12.6} {:>12} {:>12} {:>12} {:>12.8}",
                record.iteration,
                record.t,
                record.state[0],
                "-",
                "-",
                "-",
                (record.state[0] - exact).abs()
            ),
            _ => unreachable!(),
        }
    }

    // ====== Comparison ======

    let exact = coffee.exact_temperature(t_final);
    println!("\nExact T({} min) = {:.4} °C", t_final, exact);

    let ranked = rank_by_accuracy(
        &[
            ("Euler", euler.final_state()[0]),
            ("Heun", heun.final_state()[0]),
        ],
        exact,
    );

    for method in &ranked {
        let report = compare(method.approximation, exact);
        println!(
            "  {:<6} T = {:>10.4} °C   abs err {:.6}   rel err {:.4}%",
            method.label,
            method.approximation,
            report.absolute_error,
            report.relative_error * 100.0
        );
    }
    println!("\nMost accurate: {}", ranked[0].label);

    // ====== Plot ======

    #[cfg(feature = "visualization")]
    {
        use metnum_rs::output::plot::{PlotConfig, plot_trace_with_reference};

        let mut config = PlotConfig::default();
        config.title = "Newton Cooling: Heun vs Exact".to_string();
        config.xlabel = "t (min)".to_string();
        config.ylabel = "T (°C)".to_string();

        plot_trace_with_reference(&heun, &|t| coffee.exact_temperature(t), "cooling.png", Some(&config))?;
        println!("Wrote cooling.png");
    }

    Ok(())
}
