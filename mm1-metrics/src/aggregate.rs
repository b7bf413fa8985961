//! Cross-trial aggregation
//!
//! Every field is the arithmetic mean of the corresponding per-trial value.
//! Trials whose time averages are undefined (no serviced customers) are left
//! out of those two means only; `MetricSummary::samples` records how many
//! trials contributed.

use crate::error::MetricsError;
use crate::summary::MetricSummary;
use crate::trial_stats::TrialStatistics;
use mm1_core::TICKS_PER_SECOND;
use serde::Serialize;

fn column(
    trials: &[TrialStatistics],
    field: impl Fn(&TrialStatistics) -> Option<f64>,
) -> Vec<f64> {
    trials.iter().filter_map(field).collect()
}

/// Aggregated means with confidence intervals
///
/// Time fields are in ticks or seconds depending on how the value was
/// obtained, see [`AggregateReport::averages`] and
/// [`AggregateReport::averages_in_seconds`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AggregateAverages {
    pub customers_in_system: MetricSummary,
    pub customers_in_queue: MetricSummary,
    pub time_in_system: Option<MetricSummary>,
    pub time_in_queue: Option<MetricSummary>,
}

/// Results of a multi-trial run
#[derive(Debug, Clone)]
pub struct AggregateReport {
    trials: Vec<TrialStatistics>,
    averages: AggregateAverages,
}

impl AggregateReport {
    pub fn from_trials(trials: Vec<TrialStatistics>) -> Result<Self, MetricsError> {
        let customers_in_system =
            MetricSummary::from_samples(&column(&trials, |t| Some(t.avg_customers_in_system)))
                .ok_or(MetricsError::NoTrials)?;
        let customers_in_queue =
            MetricSummary::from_samples(&column(&trials, |t| Some(t.avg_customers_in_queue)))
                .ok_or(MetricsError::NoTrials)?;
        let time_in_system =
            MetricSummary::from_samples(&column(&trials, |t| t.avg_time_in_system));
        let time_in_queue = MetricSummary::from_samples(&column(&trials, |t| t.avg_time_in_queue));

        let averages = AggregateAverages {
            customers_in_system,
            customers_in_queue,
            time_in_system,
            time_in_queue,
        };
        Ok(Self { trials, averages })
    }

    /// Per-trial statistics in run order
    pub fn trials(&self) -> &[TrialStatistics] {
        &self.trials
    }

    pub fn trial_count(&self) -> usize {
        self.trials.len()
    }

    /// Aggregates with time fields in ticks
    pub fn averages(&self) -> &AggregateAverages {
        &self.averages
    }

    /// Aggregates with time fields converted to seconds
    pub fn averages_in_seconds(&self) -> AggregateAverages {
        let to_secs = 1.0 / TICKS_PER_SECOND as f64;
        AggregateAverages {
            time_in_system: self.averages.time_in_system.map(|s| s.scaled(to_secs)),
            time_in_queue: self.averages.time_in_queue.map(|s| s.scaled(to_secs)),
            ..self.averages
        }
    }

    pub fn avg_customers_in_system(&self) -> f64 {
        self.averages.customers_in_system.mean
    }

    pub fn avg_customers_in_queue(&self) -> f64 {
        self.averages.customers_in_queue.mean
    }

    /// Mean time in system in ticks, `None` if no trial serviced a customer
    pub fn avg_time_in_system(&self) -> Option<f64> {
        self.averages.time_in_system.map(|s| s.mean)
    }

    /// Mean time in queue in ticks, `None` if no trial serviced a customer
    pub fn avg_time_in_queue(&self) -> Option<f64> {
        self.averages.time_in_queue.map(|s| s.mean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trial(system: f64, queue: f64, tis: Option<f64>, tiq: Option<f64>) -> TrialStatistics {
        TrialStatistics {
            avg_customers_in_system: system,
            avg_customers_in_queue: queue,
            avg_time_in_system: tis,
            avg_time_in_queue: tiq,
            serviced_customers: usize::from(tis.is_some()),
            unserved_customers: 0,
        }
    }

    #[test]
    fn test_elementwise_means() {
        let report = AggregateReport::from_trials(vec![
            trial(4.0, 3.0, Some(1200.0), Some(960.0)),
            trial(2.0, 1.0, Some(800.0), Some(600.0)),
        ])
        .unwrap();

        assert_eq!(report.trial_count(), 2);
        assert_eq!(report.avg_customers_in_system(), 3.0);
        assert_eq!(report.avg_customers_in_queue(), 2.0);
        assert_eq!(report.avg_time_in_system(), Some(1000.0));
        assert_eq!(report.avg_time_in_queue(), Some(780.0));

        let secs = report.averages_in_seconds();
        assert!((secs.time_in_system.unwrap().mean - 100.0).abs() < 1e-9);
        assert!((secs.time_in_queue.unwrap().mean - 78.0).abs() < 1e-9);
        assert_eq!(secs.customers_in_system.mean, 3.0);
    }

    #[test]
    fn test_undefined_time_metrics_are_excluded() {
        let report = AggregateReport::from_trials(vec![
            trial(1.0, 0.5, Some(300.0), Some(100.0)),
            trial(0.0, 0.0, None, None),
        ])
        .unwrap();

        assert_eq!(report.avg_customers_in_system(), 0.5);
        assert_eq!(report.avg_time_in_system(), Some(300.0));
        assert_eq!(report.averages().time_in_system.unwrap().samples, 1);
        assert_eq!(report.averages().customers_in_system.samples, 2);

        let none_defined = AggregateReport::from_trials(vec![trial(0.1, 0.0, None, None)]).unwrap();
        assert_eq!(none_defined.avg_time_in_system(), None);
        assert_eq!(none_defined.avg_time_in_queue(), None);
    }

    #[test]
    fn test_no_trials_rejected() {
        assert!(matches!(
            AggregateReport::from_trials(Vec::new()),
            Err(MetricsError::NoTrials)
        ));
    }
}
