//! Sequential estimate aggregator

use crate::board::BoardSize;
use crate::error::{QueensError, Result};
use crate::search::config::EstimateConfig;
use crate::search::result::EstimateReport;
use crate::search::stochastic::estimator::descend;
use log::{Level, info, log, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Instant;

/// Mean of `trials` independent estimator runs on an N×N board
pub fn average_estimate(n: i64, trials: i64) -> Result<f64> {
    let config = EstimateConfig::default().with_trials(trials);
    run_estimates(n, &config).map(|report| report.mean())
}

/// Run the estimator `config.trials` times and collect every estimate.
///
/// Without a seed each trial gets its own entropy-seeded generator; with one,
/// all trials draw from a single seeded stream so the batch is reproducible.
/// The timeout is only checked between trials.
pub fn run_estimates(n: i64, config: &EstimateConfig) -> Result<EstimateReport> {
    let size = BoardSize::new(n)?;
    let trials = validate_trials(config.trials)?;
    let start_time = Instant::now();
    let trial_level = if config.verbose {
        Level::Info
    } else {
        Level::Debug
    };

    let mut seeded = config.seed.map(ChaCha8Rng::seed_from_u64);
    let mut report = EstimateReport::new(size.get(), trials);

    for trial in 0..trials {
        if let Some(timeout) = config.timeout {
            if start_time.elapsed() >= timeout {
                warn!(
                    "Estimate timed out after {} of {} trials",
                    trial, trials
                );
                break;
            }
        }

        let estimate = match seeded.as_mut() {
            Some(rng) => descend(size, rng),
            None => descend(size, &mut ChaCha8Rng::from_os_rng()),
        };
        log!(trial_level, "{}. Estimate was: {}.", trial, estimate);
        report.estimates.push(estimate);
    }

    report.elapsed_time = start_time.elapsed();
    if report.estimates.is_empty() {
        return Err(QueensError::NoTrialsCompleted);
    }

    info!(
        "{}-queens: average of {} estimates is {}",
        size,
        report.trials_completed(),
        report.mean()
    );
    Ok(report)
}

/// Reject non-positive trial counts
pub(crate) fn validate_trials(trials: i64) -> Result<u64> {
    if trials <= 0 {
        return Err(QueensError::InvalidTrialCount(trials));
    }
    Ok(trials as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::backtrack::count_nodes;
    use std::time::Duration;

    #[test]
    fn test_invalid_trial_count() {
        assert!(matches!(
            average_estimate(8, 0),
            Err(QueensError::InvalidTrialCount(0))
        ));
        assert!(matches!(
            average_estimate(8, -1),
            Err(QueensError::InvalidTrialCount(-1))
        ));
    }

    #[test]
    fn test_invalid_size_checked_first() {
        assert!(matches!(
            average_estimate(0, 0),
            Err(QueensError::InvalidSize(0))
        ));
    }

    #[test]
    fn test_single_trial() {
        let report = run_estimates(2, &EstimateConfig::default().with_trials(1)).unwrap();
        assert_eq!(report.estimates, vec![7]);
        assert_eq!(report.mean(), 7.0);
        assert!(!report.timed_out());
    }

    #[test]
    fn test_seeded_batches_match() {
        let config = EstimateConfig::default().with_trials(50).with_seed(9);
        let a = run_estimates(8, &config).unwrap();
        let b = run_estimates(8, &config).unwrap();
        assert_eq!(a.estimates, b.estimates);
    }

    #[test]
    fn test_average_converges() {
        let truth = count_nodes(8).unwrap() as f64;
        let config = EstimateConfig::default().with_trials(20_000).with_seed(17);
        let mean = run_estimates(8, &config).unwrap().mean();
        assert!(
            (mean - truth).abs() / truth < 0.10,
            "mean {} too far from {}",
            mean,
            truth
        );
    }

    #[test]
    fn test_average_unseeded_within_tolerance() {
        let truth = count_nodes(6).unwrap() as f64;
        let mean = average_estimate(6, 20_000).unwrap();
        assert!((mean - truth).abs() / truth < 0.10);
    }

    #[test]
    fn test_zero_timeout_yields_no_trials() {
        let config = EstimateConfig::default()
            .with_trials(10)
            .with_timeout(Duration::ZERO);
        assert!(matches!(
            run_estimates(8, &config),
            Err(QueensError::NoTrialsCompleted)
        ));
    }
}
