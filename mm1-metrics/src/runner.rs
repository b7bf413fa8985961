//! Multi-trial driver
//!
//! Runs independent trials one after another and reduces them into an
//! [`AggregateReport`]. With a base seed, trial `i` uses
//! `derive_seed(base, i)`; without one every trial draws fresh OS entropy.

use crate::aggregate::AggregateReport;
use crate::error::MetricsError;
use crate::trial_stats::TrialStatistics;
use mm1_core::logging::{diagnostics, events};
use mm1_core::{
    derive_seed, simulation_span, trial_span, QueueEngine, SimulationConfig, StdRandomProvider,
};

/// Runs `config.trials` trials of the configured queue
#[derive(Debug, Clone)]
pub struct TrialRunner {
    config: SimulationConfig,
    engine: QueueEngine,
}

impl TrialRunner {
    /// Validate `config` before any trial is run.
    pub fn new(config: SimulationConfig) -> Result<Self, MetricsError> {
        config.validate()?;
        let engine = QueueEngine::new(config.horizon());
        Ok(Self { config, engine })
    }

    /// Seed used for trial `index`, if the run is seeded
    pub fn trial_seed(&self, index: u32) -> Option<u64> {
        self.config
            .seed
            .map(|base| derive_seed(base, u64::from(index)))
    }

    /// Run a single trial and reduce it.
    pub fn run_one(&self, index: u32) -> Result<TrialStatistics, MetricsError> {
        let seed = self.trial_seed(index);
        let _span = trial_span(index, seed).entered();
        events::trial_started(index, seed);

        let provider = match seed {
            Some(seed) => StdRandomProvider::seeded(seed),
            None => StdRandomProvider::from_entropy(),
        };
        let outcome = self.engine.run_trial(&self.config, provider)?;
        let stats = TrialStatistics::from_outcome(&outcome)?;

        if stats.avg_time_in_system.is_none() {
            diagnostics::undefined_metric(index, "time_in_system");
        }
        events::trial_completed(index, stats.serviced_customers, stats.unserved_customers);
        Ok(stats)
    }

    /// Run every trial and aggregate the results.
    pub fn run(&self) -> Result<AggregateReport, MetricsError> {
        let _span = simulation_span(&self.config).entered();

        let utilization = self.config.utilization();
        events::simulation_started(self.config.trials, self.engine.horizon().as_ticks(), utilization);
        if utilization >= 1.0 {
            diagnostics::unstable_utilization(utilization);
        }

        let trials = (0..self.config.trials)
            .map(|index| self.run_one(index))
            .collect::<Result<Vec<_>, _>>()?;

        let report = AggregateReport::from_trials(trials)?;
        events::simulation_completed(report.trial_count());
        Ok(report)
    }
}
