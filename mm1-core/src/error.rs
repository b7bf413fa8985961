//! Error types for the simulation engine

use crate::time::Ticks;
use thiserror::Error;

/// Top-level error type for simulation operations
#[derive(Debug, Error)]
pub enum SimError {
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Service schedule exhausted at tick {}", tick.as_ticks())]
    ServiceScheduleExhausted { tick: Ticks },
}

impl SimError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        SimError::Configuration(message.into())
    }
}
