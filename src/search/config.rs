//! Configuration types for the search and the estimator

use std::time::Duration;

/// Search algorithm selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Backtracking enumeration of every solution
    #[default]
    Exhaustive,
    /// Monte Carlo estimate of the backtracking tree size
    Estimate,
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Exhaustive => write!(f, "exhaustive"),
            Algorithm::Estimate => write!(f, "estimate"),
        }
    }
}

impl std::str::FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "exhaustive" | "backtrack" | "p" => Ok(Algorithm::Exhaustive),
            "estimate" | "monte-carlo" | "mc" | "s" => Ok(Algorithm::Estimate),
            _ => Err(format!(
                "Unknown algorithm: '{}'. Valid options: exhaustive, estimate",
                s
            )),
        }
    }
}

/// Configuration for the sequential estimate aggregator
#[derive(Debug, Clone)]
pub struct EstimateConfig {
    /// Number of independent estimator runs to average
    pub trials: i64,
    /// Seed for random number generator (None = OS entropy)
    pub seed: Option<u64>,
    /// Deadline for the whole batch, checked between trials
    pub timeout: Option<Duration>,
    /// Log every trial at info level instead of debug
    pub verbose: bool,
}

impl Default for EstimateConfig {
    fn default() -> Self {
        Self {
            trials: 20,
            seed: None,
            timeout: None,
            verbose: false,
        }
    }
}

impl EstimateConfig {
    pub fn with_trials(mut self, trials: i64) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_seed_option(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_timeout_option(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
