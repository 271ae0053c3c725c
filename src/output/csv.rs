//! CSV export for engine results
//!
//! Dumps result tables to CSV (Comma-Separated Values) files readable
//! by Excel, pandas, MATLAB and most analysis tools.
//!
//! # Features
//!
//! - **One function per result type**: traces, node tables, root
//!   iteration tables
//! - **Metadata support**: optional `#`-prefixed header comments from
//!   the result's own metadata map
//! - **Customizable**: delimiter and precision via [`CsvConfig`]
//!
//! # Quick Example
//!
//! ```rust,no_run
//! use metnum_rs::output::csv::{CsvConfig, export_quadrature_csv};
//! use metnum_rs::quadrature::{integrate, QuadratureRule};
//!
//! let result = integrate(&|x: f64| x * x, 0.0, 1.0, 4, QuadratureRule::Simpson13)?;
//!
//! let config = CsvConfig::default().precision(10).with_metadata();
//! export_quadrature_csv(&result, "nodes.csv", Some(&config))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! **Output** (`nodes.csv`):
//! ```csv
//! # rule: Simpson 1/3
//! # n: 4
//! i,x,y,h
//! 0,0.0000000000,0.0000000000,0.2500000000
//! ...
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};

use crate::ode::OdeTrace;
use crate::quadrature::IntegrationResult;
use crate::roots::{BisectionRecord, NewtonRecord, RootResult};

// =================================================================================================
// Configuration
// =================================================================================================

/// Configuration for CSV export.
#[derive(Debug, Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Emit the result's metadata map as `#`-prefixed header comments
    /// (default: false)
    pub include_metadata: bool,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            precision: 6,
            include_metadata: false,
        }
    }
}

impl CsvConfig {
    /// Builder: set the delimiter.
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder: set the precision.
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder: turn on metadata header comments.
    pub fn with_metadata(mut self) -> Self {
        self.include_metadata = true;
        self
    }
}

// =================================================================================================
// Core Writer
// =================================================================================================

/// Write one table: optional metadata comments, a header row, then
/// number rows formatted at the configured precision.
fn write_table(
    path: &str,
    metadata: impl Iterator<Item = (String, String)>,
    headers: &[String],
    rows: impl Iterator<Item = Vec<f64>>,
    config: &CsvConfig,
) -> io::Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    let sep = config.delimiter.to_string();

    if config.include_metadata {
        for (key, value) in metadata {
            writeln!(out, "# {}: {}", key, value)?;
        }
    }

    writeln!(out, "{}", headers.join(sep.as_str()))?;

    for row in rows {
        let cells: Vec<String> = row
            .iter()
            .map(|value| format!("{:.*}", config.precision, value))
            .collect();
        writeln!(out, "{}", cells.join(sep.as_str()))?;
    }

    out.flush()
}

/// Metadata entries in a stable (sorted) order so exports are
/// reproducible run to run.
fn sorted_metadata(
    metadata: &std::collections::HashMap<String, String>,
) -> impl Iterator<Item = (String, String)> {
    let mut entries: Vec<_> = metadata
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    entries.sort();
    entries.into_iter()
}

// =================================================================================================
// Export Functions
// =================================================================================================

/// Export a quadrature node table: columns `i, x, y, h`.
pub fn export_quadrature_csv(
    result: &IntegrationResult,
    path: &str,
    config: Option<&CsvConfig>,
) -> io::Result<()> {
    let default = CsvConfig::default();
    let config = config.unwrap_or(&default);

    let headers = ["i", "x", "y", "h"].map(String::from).to_vec();
    let rows = result
        .nodes
        .iter()
        .map(|node| vec![node.index as f64, node.x, node.y, node.h]);

    write_table(path, sorted_metadata(&result.metadata), &headers, rows, config)
}

/// Export an integration trace: columns `iteration, t, y0..y{dim-1}, h`.
///
/// Stage values are omitted — the per-stage columns differ per scheme
/// and belong in the rendered tables, not the raw data dump.
pub fn export_trace_csv(trace: &OdeTrace, path: &str, config: Option<&CsvConfig>) -> io::Result<()> {
    let default = CsvConfig::default();
    let config = config.unwrap_or(&default);

    let dimension = trace
        .records
        .first()
        .map(|r| r.state.len())
        .unwrap_or(0);

    let mut headers = vec!["iteration".to_string(), "t".to_string()];
    for component in 0..dimension {
        headers.push(format!("y{}", component));
    }
    headers.push("h".to_string());

    let rows = trace.records.iter().map(|record| {
        let mut row = vec![record.iteration as f64, record.t];
        row.extend(record.state.iter().copied());
        row.push(record.h);
        row
    });

    write_table(path, sorted_metadata(&trace.metadata), &headers, rows, config)
}

/// Export a bisection iteration table: columns
/// `iteration, a, b, m, fa, fb, fm, tol`.
pub fn export_bisection_csv(
    result: &RootResult<BisectionRecord>,
    path: &str,
    config: Option<&CsvConfig>,
) -> io::Result<()> {
    let default = CsvConfig::default();
    let config = config.unwrap_or(&default);

    let headers = ["iteration", "a", "b", "m", "fa", "fb", "fm", "tol"]
        .map(String::from)
        .to_vec();
    let rows = result.trace.iter().map(|r| {
        vec![
            r.iteration as f64,
            r.a,
            r.b,
            r.m,
            r.fa,
            r.fb,
            r.fm,
            r.tol,
        ]
    });

    write_table(path, sorted_metadata(&result.metadata), &headers, rows, config)
}

/// Export a Newton-Raphson iteration table: columns
/// `iteration, x, fx, fpx, tol`.
pub fn export_newton_csv(
    result: &RootResult<NewtonRecord>,
    path: &str,
    config: Option<&CsvConfig>,
) -> io::Result<()> {
    let default = CsvConfig::default();
    let config = config.unwrap_or(&default);

    let headers = ["iteration", "x", "fx", "fpx", "tol"]
        .map(String::from)
        .to_vec();
    let rows = result
        .trace
        .iter()
        .map(|r| vec![r.iteration as f64, r.x, r.fx, r.fpx, r.tol]);

    write_table(path, sorted_metadata(&result.metadata), &headers, rows, config)
}

// =================================================================================================
// Tests
// =================================================================================================
