//! Search statistics and estimator reports

use crate::search::config::Algorithm;
use std::time::Duration;

/// Statistics from one exhaustive search
#[derive(Debug, Clone, Default)]
pub struct SearchStatistics {
    /// Algorithm used for the search
    pub algorithm: Algorithm,
    /// Board dimension N
    pub board_size: usize,
    /// Number of full placements emitted
    pub solutions_found: u64,
    /// Nodes visited: the root plus every candidate column tested
    pub nodes_visited: u64,
    /// Candidates that passed the promising test (solutions included)
    pub promising_nodes: u64,
    /// Total time spent searching
    pub elapsed_time: Duration,
}

impl SearchStatistics {
    pub fn new(algorithm: Algorithm, board_size: usize) -> Self {
        Self {
            algorithm,
            board_size,
            ..Default::default()
        }
    }

    /// Fraction of tested candidates that were promising (0.0 to 1.0)
    pub fn promising_rate(&self) -> f64 {
        let tested = self.nodes_visited.saturating_sub(1);
        if tested == 0 {
            0.0
        } else {
            self.promising_nodes as f64 / tested as f64
        }
    }

    /// Format statistics as a human-readable string
    pub fn format_summary(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!("Algorithm: {}\n", self.algorithm));
        s.push_str(&format!("Board size: {}\n", self.board_size));
        s.push_str(&format!("Time: {:.2?}\n", self.elapsed_time));
        s.push_str(&format!("Solutions found: {}\n", self.solutions_found));
        s.push_str(&format!("Nodes visited: {}\n", self.nodes_visited));
        s.push_str(&format!("Promising nodes: {}\n", self.promising_nodes));
        s.push_str(&format!(
            "Promising rate: {:.2}%\n",
            self.promising_rate() * 100.0
        ));
        s
    }
}

/// Outcome of a batch of estimator trials
#[derive(Debug, Clone, Default)]
pub struct EstimateReport {
    /// Always `Algorithm::Estimate`
    pub algorithm: Algorithm,
    /// Board dimension N
    pub board_size: usize,
    /// Trials asked for
    pub trials_requested: u64,
    /// One estimate per completed trial, in trial order
    pub estimates: Vec<u128>,
    /// Wall time for the whole batch
    pub elapsed_time: Duration,
}

impl EstimateReport {
    pub fn new(board_size: usize, trials_requested: u64) -> Self {
        Self {
            algorithm: Algorithm::Estimate,
            board_size,
            trials_requested,
            estimates: Vec::with_capacity(trials_requested.min(1 << 16) as usize),
            elapsed_time: Duration::ZERO,
        }
    }

    pub fn trials_completed(&self) -> u64 {
        self.estimates.len() as u64
    }

    /// Whether the batch stopped before every requested trial ran
    pub fn timed_out(&self) -> bool {
        self.trials_completed() < self.trials_requested
    }

    /// Arithmetic mean of the completed trials (0.0 if none completed)
    pub fn mean(&self) -> f64 {
        if self.estimates.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.estimates.iter().map(|&e| e as f64).sum();
        sum / self.estimates.len() as f64
    }

    pub fn min(&self) -> Option<u128> {
        self.estimates.iter().copied().min()
    }

    pub fn max(&self) -> Option<u128> {
        self.estimates.iter().copied().max()
    }

    /// Format the report as a human-readable string
    pub fn format_summary(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!("Algorithm: {}\n", self.algorithm));
        s.push_str(&format!("Board size: {}\n", self.board_size));
        s.push_str(&format!(
            "Trials: {}/{}\n",
            self.trials_completed(),
            self.trials_requested
        ));
        s.push_str(&format!("Time: {:.2?}\n", self.elapsed_time));
        if let (Some(min), Some(max)) = (self.min(), self.max()) {
            s.push_str(&format!("Min estimate: {}\n", min));
            s.push_str(&format!("Max estimate: {}\n", max));
        }
        s.push_str(&format!("Average: {}\n", self.mean()));
        s
    }
}
