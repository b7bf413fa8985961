//! JSON export of a finished run
//!
//! Exports the configuration, the aggregate summaries (times in seconds) and
//! every trial's averages in one document.

use crate::aggregate::{AggregateAverages, AggregateReport};
use crate::error::MetricsError;
use crate::export::ReportExporter;
use mm1_core::{ticks_to_secs, SimulationConfig};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// JSON exporter for run results
#[derive(Debug)]
pub struct JsonExporter {
    path: PathBuf,
    pretty: bool,
    config: Option<SimulationConfig>,
}

impl JsonExporter {
    /// Create a new JSON exporter
    ///
    /// # Arguments
    /// * `path` - Output file path
    /// * `pretty` - Whether to pretty-print the JSON
    pub fn new(path: &Path, pretty: bool) -> Self {
        Self {
            path: path.to_path_buf(),
            pretty,
            config: None,
        }
    }

    /// Embed the run configuration in the document.
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn to_json(&self, report: &AggregateReport) -> Result<String, MetricsError> {
        let export_data = ExportData::new(self.config.as_ref(), report);
        let json = if self.pretty {
            serde_json::to_string_pretty(&export_data)
        } else {
            serde_json::to_string(&export_data)
        }?;
        Ok(json)
    }
}

impl ReportExporter for JsonExporter {
    fn export(&self, report: &AggregateReport) -> Result<(), MetricsError> {
        let json = self.to_json(report)?;

        let mut file = File::create(&self.path).map_err(|e| {
            MetricsError::Export(format!(
                "Failed to create file {}: {e}",
                self.path.display()
            ))
        })?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}

/// Complete export data structure
#[derive(Debug, Serialize)]
struct ExportData<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    config: Option<&'a SimulationConfig>,
    trial_count: usize,
    averages: AggregateAverages,
    trials: Vec<TrialRow>,
}

/// Per-trial row with times in seconds
#[derive(Debug, Serialize)]
struct TrialRow {
    trial: usize,
    avg_customers_in_system: f64,
    avg_customers_in_queue: f64,
    avg_time_in_system_secs: Option<f64>,
    avg_time_in_queue_secs: Option<f64>,
    serviced_customers: usize,
    unserved_customers: usize,
}

impl<'a> ExportData<'a> {
    fn new(config: Option<&'a SimulationConfig>, report: &AggregateReport) -> Self {
        let trials = report
            .trials()
            .iter()
            .enumerate()
            .map(|(i, t)| TrialRow {
                trial: i + 1,
                avg_customers_in_system: t.avg_customers_in_system,
                avg_customers_in_queue: t.avg_customers_in_queue,
                avg_time_in_system_secs: t.avg_time_in_system.map(ticks_to_secs),
                avg_time_in_queue_secs: t.avg_time_in_queue.map(ticks_to_secs),
                serviced_customers: t.serviced_customers,
                unserved_customers: t.unserved_customers,
            })
            .collect();

        Self {
            config,
            trial_count: report.trial_count(),
            averages: report.averages_in_seconds(),
            trials,
        }
    }
}
