//! Console rendering of a finished run

use crate::aggregate::AggregateReport;
use crate::theory::Mm1Theory;
use mm1_core::ticks_to_secs;
use std::fmt;

fn fmt_secs(ticks: Option<f64>) -> String {
    match ticks {
        Some(t) => format!("{:.2} seconds", ticks_to_secs(t)),
        None => "n/a".to_string(),
    }
}

/// Human-readable summary of an [`AggregateReport`]
///
/// ```rust
/// use mm1_metrics::{AggregateReport, ConsoleReport, TrialStatistics};
///
/// let report = AggregateReport::from_trials(vec![TrialStatistics {
///     avg_customers_in_system: 4.0,
///     avg_customers_in_queue: 3.2,
///     avg_time_in_system: Some(1200.0),
///     avg_time_in_queue: Some(960.0),
///     serviced_customers: 120,
///     unserved_customers: 2,
/// }])
/// .unwrap();
///
/// let text = ConsoleReport::new(&report).to_string();
/// assert!(text.contains("Average time a customer spent in the system: 120.00 seconds"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ConsoleReport<'a> {
    report: &'a AggregateReport,
    theory: Option<Mm1Theory>,
    per_trial: bool,
}

impl<'a> ConsoleReport<'a> {
    pub fn new(report: &'a AggregateReport) -> Self {
        Self {
            report,
            theory: None,
            per_trial: false,
        }
    }

    /// Append closed-form reference values.
    pub fn with_theory(mut self, theory: Option<Mm1Theory>) -> Self {
        self.theory = theory;
        self
    }

    /// Print every trial's averages before the aggregate.
    pub fn with_per_trial(mut self, per_trial: bool) -> Self {
        self.per_trial = per_trial;
        self
    }
}

impl fmt::Display for ConsoleReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.per_trial {
            for (i, trial) in self.report.trials().iter().enumerate() {
                writeln!(
                    f,
                    "Trial {}: {:.2} customers in system, {:.2} customers in queue, {} in system, {} in queue",
                    i + 1,
                    trial.avg_customers_in_system,
                    trial.avg_customers_in_queue,
                    fmt_secs(trial.avg_time_in_system),
                    fmt_secs(trial.avg_time_in_queue),
                )?;
            }
            writeln!(f)?;
        }

        writeln!(f, "Trials: {}", self.report.trial_count())?;
        writeln!(
            f,
            "Average number of customers in the system: {:.2} customers",
            self.report.avg_customers_in_system()
        )?;
        writeln!(
            f,
            "Average number of customers in the queue: {:.2} customers",
            self.report.avg_customers_in_queue()
        )?;
        writeln!(
            f,
            "Average time a customer spent in the system: {}",
            fmt_secs(self.report.avg_time_in_system())
        )?;
        writeln!(
            f,
            "Average time a customer spent in the queue: {}",
            fmt_secs(self.report.avg_time_in_queue())
        )?;

        if let Some(secs) = self.report.averages_in_seconds().time_in_system {
            if secs.samples > 1 {
                writeln!(
                    f,
                    "95% interval for time in system: [{:.2}, {:.2}] seconds",
                    secs.ci_low, secs.ci_high
                )?;
            }
        }

        if let Some(theory) = self.theory {
            writeln!(f)?;
            writeln!(f, "M/M/1 steady state (utilization {:.2}):", theory.utilization)?;
            writeln!(
                f,
                "  customers in system {:.2}, customers in queue {:.2}",
                theory.customers_in_system, theory.customers_in_queue
            )?;
            writeln!(
                f,
                "  time in system {:.2} seconds, time in queue {:.2} seconds",
                theory.time_in_system, theory.time_in_queue
            )?;
        }
        Ok(())
    }
}
