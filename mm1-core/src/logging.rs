//! Structured logging for simulation runs
//!
//! Logging goes through `tracing`. The binary installs a `fmt` subscriber with
//! an `EnvFilter`; `RUST_LOG` always wins over the level passed in code.
//!
//! ```bash
//! # Per-trial progress
//! RUST_LOG=debug mm1-sim 5 2.0 24 10
//!
//! # Every arrival and completion (very verbose)
//! RUST_LOG=mm1_core::engine=trace mm1-sim 1 2.0 24 1
//! ```
//!
//! Log level guidelines:
//! - **TRACE**: arrivals, completions and schedule generation inside a trial
//! - **DEBUG**: trial start and completion
//! - **INFO**: run start and summary
//! - **WARN**: unstable load, metrics undefined for a trial
//! - **ERROR**: export failures

use crate::config::SimulationConfig;
use tracing::{info, Span};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with a specific level
///
/// # Arguments
/// * `level` - Log level: "trace", "debug", "info", "warn", or "error"
///
/// Calling this more than once is harmless; only the first subscriber is kept.
pub fn init_simulation_logging_with_level(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("mm1_core={level},mm1_metrics={level},mm1_sim={level}").into()
    });

    let installed = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .try_init()
        .is_ok();

    if installed {
        info!("Simulation logging initialized at level: {}", level);
    }
}

/// Create a span covering a whole multi-trial run
pub fn simulation_span(config: &SimulationConfig) -> Span {
    tracing::info_span!(
        "simulation",
        hours = config.hours,
        lambda = config.lambda,
        mean = config.mean_service_secs,
        trials = config.trials
    )
}

/// Create a span for a single trial
pub fn trial_span(index: u32, seed: Option<u64>) -> Span {
    tracing::debug_span!("trial", index = index, seed = ?seed)
}

/// Logging utilities for common run events
pub mod events {
    use tracing::{debug, info};

    pub fn simulation_started(trials: u32, horizon_ticks: u64, utilization: f64) {
        info!(
            trials = trials,
            horizon_ticks = horizon_ticks,
            utilization = utilization,
            "Simulation started"
        );
    }

    pub fn trial_started(index: u32, seed: Option<u64>) {
        debug!(index = index, seed = ?seed, "Trial started");
    }

    pub fn trial_completed(index: u32, serviced: usize, unserved: usize) {
        debug!(
            index = index,
            serviced = serviced,
            unserved = unserved,
            "Trial completed"
        );
    }

    pub fn simulation_completed(trials: usize) {
        info!(trials = trials, "Simulation completed");
    }
}

/// Logging utilities for unusual conditions
pub mod diagnostics {
    use tracing::{error, warn};

    /// Offered load at or above one; averages will not settle.
    pub fn unstable_utilization(utilization: f64) {
        warn!(
            utilization = utilization,
            "Utilization is not below 1, queue is unstable"
        );
    }

    pub fn undefined_metric(index: u32, metric: &str) {
        warn!(
            index = index,
            metric = metric,
            "Trial serviced no customers, metric undefined"
        );
    }

    pub fn export_failed(format: &str, path: &str, error: &str) {
        error!(format = format, path = path, error = error, "Export failed");
    }
}
