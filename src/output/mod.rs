//! Output module for engine results
//!
//! Tools to get traces out of the process for external analysis:
//!
//! - **Export**: CSV dumps of node tables, integration traces and
//!   root-finding iteration tables (std only, always available)
//! - **Visualization** (feature `visualization`): PNG plots via
//!   `plotters`
//!
//! The engines never depend on this module — it consumes their result
//! types through the same public API any caller uses.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use metnum_rs::models::NewtonCooling;
//! use metnum_rs::ode::{EulerSolver, IntegrationParams, OdeSolver};
//! use metnum_rs::output::csv::export_trace_csv;
//!
//! let trace = EulerSolver.solve(
//!     &NewtonCooling::new(90.0, 20.0, 0.1),
//!     &IntegrationParams::new(1.0, 30.0),
//! )?;
//!
//! export_trace_csv(&trace, "cooling.csv", None)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod csv;

#[cfg(feature = "visualization")]
pub mod plot;

pub use csv::{
    CsvConfig, export_bisection_csv, export_newton_csv, export_quadrature_csv, export_trace_csv,
};

#[cfg(feature = "visualization")]
pub use plot::{PlotConfig, plot_trace, plot_trace_with_reference};
