//! Channels and shared state between estimator workers and the coordinator.

use crossbeam_channel::{Receiver, Sender, unbounded};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Message sent from workers to the coordinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerMessage {
    /// Worker completed one estimator trial.
    Estimate {
        worker_id: usize,
        trial: u64,
        nodes: u128,
    },
    /// Worker has stopped claiming trials.
    Finished { worker_id: usize, trials_run: u64 },
}

/// Trial counter and stop flag shared by every worker.
#[derive(Debug)]
pub struct SharedProgress {
    /// Total number of trials in the batch.
    pub total_trials: u64,
    /// Index of the next unclaimed trial.
    pub next_trial: AtomicU64,
    /// Flag to signal all workers to stop.
    pub should_stop: AtomicBool,
}

impl SharedProgress {
    pub fn new(total_trials: u64) -> Self {
        Self {
            total_trials,
            next_trial: AtomicU64::new(0),
            should_stop: AtomicBool::new(false),
        }
    }

    /// Claim the next trial index, or None once the batch is exhausted.
    pub fn claim_trial(&self) -> Option<u64> {
        let mut current = self.next_trial.load(Ordering::SeqCst);
        loop {
            if current >= self.total_trials {
                return None;
            }
            match self.next_trial.compare_exchange_weak(
                current,
                current + 1,
                Ordering::SeqCst,
                Ordering::SeqCst,
            ) {
                Ok(_) => return Some(current),
                Err(c) => current = c,
            }
        }
    }

    /// Check if we should stop claiming trials.
    pub fn should_stop(&self) -> bool {
        self.should_stop.load(Ordering::SeqCst)
    }

    /// Signal all workers to stop.
    pub fn signal_stop(&self) {
        self.should_stop.store(true, Ordering::SeqCst);
    }
}

/// Channel endpoints for a worker.
pub struct WorkerChannels {
    /// Send messages to coordinator.
    pub to_coordinator: Sender<WorkerMessage>,
    /// Shared trial counter and stop flag.
    pub shared: Arc<SharedProgress>,
}

/// Channel endpoints for the coordinator.
pub struct CoordinatorChannels {
    /// Receive messages from workers.
    pub from_workers: Receiver<WorkerMessage>,
    /// Shared state.
    pub shared: Arc<SharedProgress>,
}

/// Create channels for a batch of `total_trials` split over `num_workers`.
pub fn create_channels(
    num_workers: usize,
    total_trials: u64,
) -> (CoordinatorChannels, Vec<WorkerChannels>) {
    let shared = Arc::new(SharedProgress::new(total_trials));

    // Unbounded so workers never block on a slow coordinator
    let (worker_tx, coordinator_rx) = unbounded();

    let worker_channels = (0..num_workers)
        .map(|_| WorkerChannels {
            to_coordinator: worker_tx.clone(),
            shared: Arc::clone(&shared),
        })
        .collect();

    let coordinator = CoordinatorChannels {
        from_workers: coordinator_rx,
        shared,
    };

    (coordinator, worker_channels)
}
