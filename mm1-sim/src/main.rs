//! Command-line M/M/1 queue simulator
//!
//! ```bash
//! # defaults: 5 hours, 2 arrivals/min, 24 s mean service, 100 trials, no CSV
//! mm1-sim
//!
//! # 1 hour, λ = 1.5/min, 30 s mean service, 1000 trials, write simulation_stats.csv
//! mm1-sim 1 1.5 30 1000 1
//! ```

use clap::Parser;
use mm1_core::{init_simulation_logging_with_level, SimulationConfig};
use mm1_metrics::export::{export_csv, export_json, DEFAULT_CSV_PATH};
use mm1_metrics::{ConsoleReport, MetricsError, Mm1Theory, TrialRunner};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

// CLI -----------------------------------------------------------------------------------------------------------------

/// Fixed-tick M/M/1 queue simulator.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// Simulated hours per trial.
    #[arg(default_value_t = 5)]
    hours: u32,

    /// Mean arrivals per minute.
    #[arg(default_value_t = 2.0)]
    lambda: f64,

    /// Mean service time in seconds.
    #[arg(default_value_t = 24.0)]
    mean: f64,

    /// Number of independent trials.
    #[arg(default_value_t = 100)]
    trial_count: u32,

    /// Write per-trial rows to CSV (1) or not (0).
    #[arg(default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=1))]
    write_csv: u8,

    /// Base seed for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,

    /// Destination of the CSV export.
    #[arg(long, default_value = DEFAULT_CSV_PATH)]
    csv_path: PathBuf,

    /// Also write a JSON document with config, aggregates and trials.
    #[arg(long)]
    json: Option<PathBuf>,

    /// Print every trial's averages.
    #[arg(long)]
    per_trial: bool,

    /// Log level when RUST_LOG is not set.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    fn config(&self) -> SimulationConfig {
        SimulationConfig::default()
            .with_hours(self.hours)
            .with_lambda(self.lambda)
            .with_mean_service_secs(self.mean)
            .with_trials(self.trial_count)
            .with_seed(self.seed)
    }
}

// MAIN ----------------------------------------------------------------------------------------------------------------

fn run(args: &Args) -> Result<(), MetricsError> {
    let config = args.config();
    let runner = TrialRunner::new(config.clone())?;
    let report = runner.run()?;

    print!(
        "{}",
        ConsoleReport::new(&report)
            .with_per_trial(args.per_trial)
            .with_theory(Mm1Theory::from_config(&config))
    );

    // Export failures do not invalidate the results printed above.
    if args.write_csv == 1 {
        match export_csv(&report, &args.csv_path) {
            Ok(()) => {
                info!(path = %args.csv_path.display(), "CSV written");
                println!("Data written to {}", args.csv_path.display());
            }
            Err(e) => {
                let path = args.csv_path.display().to_string();
                mm1_core::logging::diagnostics::export_failed("csv", &path, &e.to_string());
                eprintln!("Error writing CSV file {path}: {e}");
            }
        }
    }

    if let Some(path) = &args.json {
        match export_json(&report, &config, path, true) {
            Ok(()) => println!("Data written to {}", path.display()),
            Err(e) => {
                let path = path.display().to_string();
                mm1_core::logging::diagnostics::export_failed("json", &path, &e.to_string());
                eprintln!("Error writing JSON file {path}: {e}");
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_simulation_logging_with_level(&args.log_level);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
