//! End-to-end runs through `TrialRunner`
//!
//! Seeds are fixed so the statistical checks are reproducible.

use mm1_core::{SimulationConfig, TICKS_PER_SECOND};
use mm1_metrics::{AggregateReport, Mm1Theory, TrialRunner};

fn seeded(hours: u32, lambda: f64, mean: f64, trials: u32, seed: u64) -> SimulationConfig {
    SimulationConfig::default()
        .with_hours(hours)
        .with_lambda(lambda)
        .with_mean_service_secs(mean)
        .with_trials(trials)
        .with_seed(Some(seed))
}

#[test]
fn aggregate_is_independent_of_trial_order() {
    let report = TrialRunner::new(seeded(1, 2.0, 24.0, 12, 17))
        .unwrap()
        .run()
        .unwrap();

    let mut shuffled = report.trials().to_vec();
    shuffled.reverse();
    shuffled.swap(0, 5);
    shuffled.swap(3, 9);
    let reordered = AggregateReport::from_trials(shuffled).unwrap();

    let close = |a: f64, b: f64| (a - b).abs() <= 1e-9 * a.abs().max(1.0);
    assert!(close(
        report.avg_customers_in_system(),
        reordered.avg_customers_in_system()
    ));
    assert!(close(
        report.avg_customers_in_queue(),
        reordered.avg_customers_in_queue()
    ));
    assert!(close(
        report.avg_time_in_system().unwrap(),
        reordered.avg_time_in_system().unwrap()
    ));
    assert!(close(
        report.avg_time_in_queue().unwrap(),
        reordered.avg_time_in_queue().unwrap()
    ));
}

#[test]
fn aggregate_is_elementwise_mean_of_trials() {
    let report = TrialRunner::new(seeded(1, 1.0, 20.0, 5, 3))
        .unwrap()
        .run()
        .unwrap();

    let n = report.trial_count() as f64;
    let expected: f64 = report
        .trials()
        .iter()
        .map(|t| t.avg_customers_in_queue)
        .sum::<f64>()
        / n;
    assert!((report.avg_customers_in_queue() - expected).abs() < 1e-12);
}

#[test]
fn single_hour_trial_is_within_half_of_theory() {
    // λ = 2/min, mean 24 s: ~120 arrivals in an hour, W = 120 s in steady state.
    let config = seeded(1, 2.0, 24.0, 1, 2024);
    let theory = Mm1Theory::from_config(&config).unwrap();
    let report = TrialRunner::new(config).unwrap().run().unwrap();

    let trial = report.trials()[0];
    assert!((40..=180).contains(&trial.serviced_customers));
    assert!(report.avg_customers_in_system() >= report.avg_customers_in_queue());

    let w = report.avg_time_in_system().unwrap() / TICKS_PER_SECOND as f64;
    assert!(
        (w - theory.time_in_system).abs() <= 0.5 * theory.time_in_system,
        "time in system {w:.2}s vs theory {:.2}s",
        theory.time_in_system
    );
}

#[test]
fn default_parameters_converge_to_theory() {
    // Five-hour trials at ρ = 0.8, averaged over 1000 trials.
    let config = seeded(5, 2.0, 24.0, 1000, 42);
    let theory = Mm1Theory::from_config(&config).unwrap();
    let report = TrialRunner::new(config).unwrap().run().unwrap();
    let secs = report.averages_in_seconds();

    let w = secs.time_in_system.unwrap().mean;
    let l = secs.customers_in_system.mean;
    assert!(
        (w - theory.time_in_system).abs() <= 0.05 * theory.time_in_system,
        "time in system {w:.2}s vs theory {:.2}s",
        theory.time_in_system
    );
    assert!(
        (l - theory.customers_in_system).abs() <= 0.05 * theory.customers_in_system,
        "customers in system {l:.3} vs theory {:.3}",
        theory.customers_in_system
    );
}

#[test]
fn light_load_converges_to_theory() {
    // ρ = 0.4: short relaxation time, so five-hour trials are close to steady state.
    let config = seeded(5, 1.0, 24.0, 100, 11);
    let theory = Mm1Theory::from_config(&config).unwrap();
    let report = TrialRunner::new(config).unwrap().run().unwrap();
    let secs = report.averages_in_seconds();

    let w = secs.time_in_system.unwrap().mean;
    let l = secs.customers_in_system.mean;
    assert!(
        (w - theory.time_in_system).abs() <= 0.1 * theory.time_in_system,
        "time in system {w:.2}s vs theory {:.2}s",
        theory.time_in_system
    );
    assert!(
        (l - theory.customers_in_system).abs() <= 0.1 * theory.customers_in_system,
        "customers in system {l:.3} vs theory {:.3}",
        theory.customers_in_system
    );
}
