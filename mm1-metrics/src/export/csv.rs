//! CSV export of per-trial statistics
//!
//! One row per trial, 1-based trial number first, every value with two
//! decimals. Times are converted to seconds; an undefined time average is
//! written as an empty field.

use crate::aggregate::AggregateReport;
use crate::error::MetricsError;
use crate::export::ReportExporter;
use mm1_core::ticks_to_secs;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const CSV_HEADER: &str = "N,Average number of customers in the system,Average number of customers in the queue,Average time a customer spent in the system (seconds),Average time a customer spent in the queue (seconds)";

/// CSV exporter for per-trial statistics
#[derive(Debug)]
pub struct CsvExporter {
    path: PathBuf,
}

impl CsvExporter {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl ReportExporter for CsvExporter {
    fn export(&self, report: &AggregateReport) -> Result<(), MetricsError> {
        let file = File::create(&self.path).map_err(|e| {
            MetricsError::Export(format!(
                "Failed to create file {}: {e}",
                self.path.display()
            ))
        })?;
        let mut writer = BufWriter::new(file);
        write_csv(report, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

fn fmt_secs(ticks: Option<f64>) -> String {
    ticks
        .map(|t| format!("{:.2}", ticks_to_secs(t)))
        .unwrap_or_default()
}

/// Write the header and one row per trial to `out`.
pub fn write_csv(report: &AggregateReport, mut out: impl Write) -> Result<(), MetricsError> {
    writeln!(out, "{CSV_HEADER}")?;
    for (i, trial) in report.trials().iter().enumerate() {
        writeln!(
            out,
            "{},{:.2},{:.2},{},{}",
            i + 1,
            trial.avg_customers_in_system,
            trial.avg_customers_in_queue,
            fmt_secs(trial.avg_time_in_system),
            fmt_secs(trial.avg_time_in_queue),
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trial_stats::TrialStatistics;

    fn report() -> AggregateReport {
        AggregateReport::from_trials(vec![
            TrialStatistics {
                avg_customers_in_system: 3.456,
                avg_customers_in_queue: 2.5,
                avg_time_in_system: Some(1012.0),
                avg_time_in_queue: Some(777.0),
                serviced_customers: 100,
                unserved_customers: 1,
            },
            TrialStatistics {
                avg_customers_in_system: 0.25,
                avg_customers_in_queue: 0.0,
                avg_time_in_system: None,
                avg_time_in_queue: None,
                serviced_customers: 0,
                unserved_customers: 1,
            },
        ])
        .unwrap()
    }

    #[test]
    fn test_csv_rows() {
        let mut buf = Vec::new();
        write_csv(&report(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines[1], "1,3.46,2.50,101.20,77.70");
        assert_eq!(lines[2], "2,0.25,0.00,,");
    }

    #[test]
    fn test_csv_export_to_file() {
        let path = std::env::temp_dir().join(format!("mm1_csv_export_{}.csv", std::process::id()));
        CsvExporter::new(&path).export(&report()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("N,Average number of customers in the system"));
        assert_eq!(text.lines().count(), 3);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_csv_export_to_missing_directory_fails() {
        let path = std::env::temp_dir()
            .join("mm1_missing_dir_for_export")
            .join("nested")
            .join("stats.csv");
        let err = CsvExporter::new(&path).export(&report()).unwrap_err();
        assert!(matches!(err, MetricsError::Export(_)));
    }
}
