//! Export functionality for run results
//!
//! This module provides exporters for different data formats to enable
//! analysis with external tools.

pub mod csv;
pub mod json;

use crate::aggregate::AggregateReport;
use crate::error::MetricsError;
use mm1_core::SimulationConfig;
use std::path::Path;

/// Default file name of the per-trial CSV
pub const DEFAULT_CSV_PATH: &str = "simulation_stats.csv";

/// Trait for exporting run results to different formats
pub trait ReportExporter {
    /// Export the report to the configured destination
    fn export(&self, report: &AggregateReport) -> Result<(), MetricsError>;
}

/// Export per-trial rows to CSV
///
/// # Example
/// ```no_run
/// use mm1_metrics::{export::export_csv, TrialRunner};
/// use mm1_core::SimulationConfig;
///
/// let report = TrialRunner::new(SimulationConfig::default())?.run()?;
/// export_csv(&report, "simulation_stats.csv")?;
/// # Ok::<(), mm1_metrics::MetricsError>(())
/// ```
pub fn export_csv(report: &AggregateReport, path: impl AsRef<Path>) -> Result<(), MetricsError> {
    csv::CsvExporter::new(path.as_ref()).export(report)
}

/// Export configuration, aggregates and per-trial rows to JSON
pub fn export_json(
    report: &AggregateReport,
    config: &SimulationConfig,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), MetricsError> {
    json::JsonExporter::new(path.as_ref(), pretty)
        .with_config(config.clone())
        .export(report)
}
