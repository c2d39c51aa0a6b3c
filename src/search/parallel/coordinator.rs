//! Parallel estimate coordinator that manages worker threads.

use crate::board::BoardSize;
use crate::error::{QueensError, Result};
use crate::search::parallel::channel::{
    CoordinatorChannels, WorkerChannels, WorkerMessage, create_channels,
};
use crate::search::parallel::config::ParallelConfig;
use crate::search::result::EstimateReport;
use crate::search::stochastic::aggregate::validate_trials;
use crate::search::stochastic::estimator::descend;
use crossbeam_channel::RecvTimeoutError;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::{Duration, Instant};

/// Upper bound on how long the coordinator blocks before rechecking the deadline
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Run `trials` estimator trials for an N×N board across worker threads.
///
/// Estimates in the report are ordered by trial index. When the deadline
/// expires, trials already running finish and are kept; unclaimed trials are
/// dropped.
pub fn run_parallel_estimate(
    n: i64,
    trials: i64,
    config: &ParallelConfig,
) -> Result<EstimateReport> {
    let size = BoardSize::new(n)?;
    let trials = validate_trials(trials)?;
    let start_time = Instant::now();
    let num_workers = config.workers_for(trials);

    let (coordinator_channels, worker_channels) = create_channels(num_workers, trials);

    let worker_handles: Vec<_> = worker_channels
        .into_iter()
        .enumerate()
        .map(|(worker_id, channels)| {
            let seed = config.worker_seed(worker_id);
            std::thread::spawn(move || run_worker(worker_id, size, seed, channels))
        })
        .collect();

    let mut report = run_coordinator(
        size,
        trials,
        num_workers,
        coordinator_channels,
        config,
        start_time,
    );

    for handle in worker_handles {
        if handle.join().is_err() {
            warn!("Estimator worker panicked");
        }
    }

    report.elapsed_time = start_time.elapsed();
    if report.estimates.is_empty() {
        return Err(QueensError::NoTrialsCompleted);
    }

    info!(
        "{}-queens: average of {} estimates over {} workers is {}",
        size,
        report.trials_completed(),
        num_workers,
        report.mean()
    );
    Ok(report)
}

/// Coordinator loop that receives estimates and enforces the deadline.
fn run_coordinator(
    size: BoardSize,
    trials: u64,
    num_workers: usize,
    channels: CoordinatorChannels,
    config: &ParallelConfig,
    start_time: Instant,
) -> EstimateReport {
    let mut collected: Vec<(u64, u128)> = Vec::new();
    let mut finished_count = 0;
    let deadline = config.timeout.map(|t| start_time + t);

    loop {
        let wait = match deadline {
            Some(d) => {
                let now = Instant::now();
                if now >= d && !channels.shared.should_stop() {
                    warn!(
                        "Estimate deadline reached after {} of {} trials",
                        collected.len(),
                        trials
                    );
                    channels.shared.signal_stop();
                }
                d.saturating_duration_since(now).clamp(Duration::from_millis(1), POLL_INTERVAL)
            }
            None => POLL_INTERVAL,
        };

        match channels.from_workers.recv_timeout(wait) {
            Ok(WorkerMessage::Estimate {
                worker_id,
                trial,
                nodes,
            }) => {
                debug!("{}. Estimate was: {}. (worker {})", trial, nodes, worker_id);
                collected.push((trial, nodes));
            }
            Ok(WorkerMessage::Finished {
                worker_id,
                trials_run,
            }) => {
                debug!("Worker {} finished after {} trials", worker_id, trials_run);
                finished_count += 1;
                if finished_count >= num_workers {
                    break;
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    collected.sort_unstable_by_key(|&(trial, _)| trial);
    let mut report = EstimateReport::new(size.get(), trials);
    report.estimates = collected.into_iter().map(|(_, nodes)| nodes).collect();
    report
}

/// Worker loop: claim a trial, run one descent, report, repeat.
fn run_worker(worker_id: usize, size: BoardSize, seed: Option<u64>, channels: WorkerChannels) {
    let mut rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_os_rng(),
    };

    let mut trials_run = 0;
    while !channels.shared.should_stop() {
        let Some(trial) = channels.shared.claim_trial() else {
            break;
        };
        let nodes = descend(size, &mut rng);
        trials_run += 1;
        let msg = WorkerMessage::Estimate {
            worker_id,
            trial,
            nodes,
        };
        if channels.to_coordinator.send(msg).is_err() {
            return;
        }
    }

    let _ = channels.to_coordinator.send(WorkerMessage::Finished {
        worker_id,
        trials_run,
    });
}
