//! Configuration for parallel estimation.

use std::time::Duration;

/// Configuration for parallel estimation.
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    /// Number of worker threads to spawn.
    pub num_workers: usize,
    /// Deadline for the whole batch, checked between trials.
    pub timeout: Option<Duration>,
    /// Base random seed (workers get seed + worker_id).
    pub base_seed: Option<u64>,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            num_workers: num_cpus::get(),
            timeout: None,
            base_seed: None,
        }
    }
}

impl ParallelConfig {
    /// Set the number of workers (at least one).
    pub fn with_workers(mut self, num_workers: usize) -> Self {
        self.num_workers = num_workers.max(1);
        self
    }

    /// Set the overall deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the overall deadline from an Option.
    pub fn with_timeout_option(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the base random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.base_seed = Some(seed);
        self
    }

    /// Set the base random seed from an Option.
    pub fn with_seed_option(mut self, seed: Option<u64>) -> Self {
        self.base_seed = seed;
        self
    }

    /// Workers actually needed for `trials` trials.
    pub fn workers_for(&self, trials: u64) -> usize {
        let trials = usize::try_from(trials).unwrap_or(usize::MAX);
        self.num_workers.min(trials).max(1)
    }

    /// Seed for a given worker, if seeding is enabled.
    pub fn worker_seed(&self, worker_id: usize) -> Option<u64> {
        self.base_seed.map(|s| s.wrapping_add(worker_id as u64))
    }
}
