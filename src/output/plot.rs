//! Static plot generation for engine results
//!
//! Uses the `plotters` library to render integration traces as PNG
//! line charts — one series per state component, optionally with the
//! analytic reference curve overlaid for the visual version of the
//! error tables.
//!
//! Only compiled with the `visualization` feature.
//!
//! # Example
//!
//! ```rust,no_run
//! use metnum_rs::models::NewtonCooling;
//! use metnum_rs::ode::{HeunSolver, IntegrationParams, OdeSolver};
//! use metnum_rs::output::plot::{plot_trace_with_reference, PlotConfig};
//!
//! let coffee = NewtonCooling::new(90.0, 20.0, 0.1);
//! let trace = HeunSolver.solve(&coffee, &IntegrationParams::new(1.0, 30.0))?;
//!
//! let mut config = PlotConfig::default();
//! config.title = "Coffee Cooling: Heun vs Exact".to_string();
//!
//! plot_trace_with_reference(
//!     &trace,
//!     &|t| coffee.exact_temperature(t),
//!     "cooling.png",
//!     Some(&config),
//! )?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::error::Error;

use plotters::prelude::*;

use crate::ode::OdeTrace;

// =================================================================================================
// Configuration
// =================================================================================================

/// Configuration for trace plots.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Integration Trace")
    pub title: String,

    /// X-axis label (default: "t")
    pub xlabel: String,

    /// Y-axis label (default: "y")
    pub ylabel: String,

    /// Line thickness in pixels (default: 2)
    pub line_width: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Integration Trace".to_string(),
            xlabel: "t".to_string(),
            ylabel: "y".to_string(),
            line_width: 2,
        }
    }
}

/// Fixed series palette; component `i` wraps around it.
fn series_color(index: usize) -> RGBColor {
    const PALETTE: [RGBColor; 6] = [RED, BLUE, GREEN, MAGENTA, CYAN, BLACK];
    PALETTE[index % PALETTE.len()]
}

// =================================================================================================
// Helpers
// =================================================================================================

/// Bounds of the plotted values, padded so flat series stay visible.
fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    let pad = ((max - min).abs() * 0.05).max(1e-9);
    (min - pad, max + pad)
}

// =================================================================================================
// Plot Functions
// =================================================================================================

/// Plot every state component of a trace as a line series.
pub fn plot_trace(
    trace: &OdeTrace,
    path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    plot_impl(trace, None, path, config)
}

/// Plot a trace together with an analytic reference curve.
///
/// The reference is sampled at the trace's own time points and drawn
/// dashed-black; intended for scalar problems (only component 0 is
/// compared, every component is still drawn).
pub fn plot_trace_with_reference(
    trace: &OdeTrace,
    reference: &dyn Fn(f64) -> f64,
    path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    plot_impl(trace, Some(reference), path, config)
}

fn plot_impl(
    trace: &OdeTrace,
    reference: Option<&dyn Fn(f64) -> f64>,
    path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let default = PlotConfig::default();
    let config = config.unwrap_or(&default);

    if trace.is_empty() {
        return Err("cannot plot an empty trace".into());
    }

    let dimension = trace.records[0].state.len();
    let times = trace.time_points();

    let reference_values: Vec<f64> = match reference {
        Some(f) => times.iter().map(|&t| f(t)).collect(),
        None => Vec::new(),
    };

    let (x_min, x_max) = padded_range(times.iter().copied());
    let (y_min, y_max) = padded_range(
        trace
            .records
            .iter()
            .flat_map(|r| r.state.iter().copied())
            .chain(reference_values.iter().copied()),
    );

    let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 30))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc(config.xlabel.as_str())
        .y_desc(config.ylabel.as_str())
        .draw()?;

    for component in 0..dimension {
        let color = series_color(component);
        let series = trace
            .records
            .iter()
            .map(|r| (r.t, r.state[component]));

        chart
            .draw_series(LineSeries::new(
                series,
                color.stroke_width(config.line_width),
            ))?
            .label(format!("y{}", component))
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    if !reference_values.is_empty() {
        chart
            .draw_series(LineSeries::new(
                times.iter().copied().zip(reference_values.iter().copied()),
                BLACK.stroke_width(1),
            ))?
            .label("exact")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK.stroke_width(1)));
    }

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
