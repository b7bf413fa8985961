//! Error types for statistics, aggregation and export

use mm1_core::SimError;
use thiserror::Error;

/// Errors raised while reducing or exporting trial results
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("Simulation error: {0}")]
    Sim(#[from] SimError),

    #[error("Trial recorded no ticks")]
    EmptyTrial,

    #[error("No trials to aggregate")]
    NoTrials,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Export error: {0}")]
    Export(String),
}
