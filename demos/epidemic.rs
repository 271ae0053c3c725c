//! Demo: SIR epidemic — coupled-system integration
//!
//! 1000 people, one infected, β = 0.0005, γ = 0.1: integrate the
//! three coupled compartment equations for 100 days and report the
//! outbreak's shape.
//!
//! ```bash
//! cargo run --example epidemic
//! ```

use metnum_rs::models::SirEpidemic;
use metnum_rs::ode::{EulerSolver, HeunSolver, IntegrationParams, OdeSolver};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("═══════════════════════════════════════════════════════");
    println!("  SIR Epidemic — Coupled System");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Scenario ======

    let outbreak = SirEpidemic::new(999.0, 1.0, 0.0, 0.0005, 0.1);
    let params = IntegrationParams::new(1.0, 100.0);

    println!("Scenario:");
    println!("  S(0) = {}, I(0) = {}, R(0) = {}", 999, 1, 0);
    println!("  β = {}, γ = {}", outbreak.infection_rate, outbreak.recovery_rate);
    println!("  R₀ = {:.1}  (> 1: the outbreak takes off)\n", outbreak.basic_reproduction_number());

    // ====== Solve with both methods ======

    let euler = EulerSolver.solve(&outbreak, &params)?;
    let heun = HeunSolver.solve(&outbreak, &params)?;

    // ====== Trajectory table (every 10th day, Heun) ======

    println!("Heun trajectory (every 10 days):");
    println!("{:>6} {:>10} {:>10} {:>10} {:>10}", "day", "S", "I", "R", "total");
    for record in heun.records.iter().step_by(10) {
        println!(
            "{:>6.0} {:>10.2} {:>10.2} {:>10.2} {:>10.2}",
            record.t,
            record.state[0],
            record.state[1],
            record.state[2],
            record.state.iter().sum::<f64>()
        );
    }

    // ====== Outbreak shape ======

    let (euler_peak_t, euler_peak_i) = outbreak.peak_infected(&euler);
    let (heun_peak_t, heun_peak_i) = outbreak.peak_infected(&heun);

    println!("\nEpidemic peak:");
    println!("  Euler: {:.1} infected on day {:.0}", euler_peak_i, euler_peak_t);
    println!("  Heun : {:.1} infected on day {:.0}", heun_peak_i, heun_peak_t);

    println!("\nAfter {} days (Heun):", params.t_final);
    println!("  Susceptible : {:.1}", heun.final_state()[0]);
    println!("  Infected    : {:.1}", heun.final_state()[1]);
    println!("  Recovered   : {:.1}", heun.final_state()[2]);

    #[cfg(feature = "visualization")]
    {
        use metnum_rs::output::plot::{PlotConfig, plot_trace};

        let mut config = PlotConfig::default();
        config.title = "SIR Outbreak (Heun)".to_string();
        config.xlabel = "t (days)".to_string();
        config.ylabel = "individuals".to_string();

        plot_trace(&heun, "epidemic.png", Some(&config))?;
        println!("\nWrote epidemic.png");
    }

    Ok(())
}
