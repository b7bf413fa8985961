//! Statistics, aggregation and export for M/M/1 simulation runs
//!
//! This crate reduces each [`mm1_core::TrialOutcome`] to a
//! [`TrialStatistics`], drives many independent trials through
//! [`TrialRunner`], and aggregates them into an [`AggregateReport`] that the
//! console report and the CSV/JSON exporters read.

pub mod aggregate;
pub mod error;
pub mod export;
pub mod report;
pub mod runner;
pub mod summary;
pub mod theory;
pub mod trial_stats;

pub use aggregate::{AggregateAverages, AggregateReport};
pub use error::MetricsError;
pub use report::ConsoleReport;
pub use runner::TrialRunner;
pub use summary::MetricSummary;
pub use theory::Mm1Theory;
pub use trial_stats::TrialStatistics;
