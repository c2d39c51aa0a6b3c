//! Search algorithms over the N-Queens backtracking tree
//!
//! This module provides:
//! - Exhaustive: backtracking enumeration of every solution
//! - Stochastic: Monte Carlo estimate of the tree's node count
//! - Parallel: the estimator's trials fanned out over worker threads

pub mod backtrack;
pub mod config;
pub mod parallel;
pub mod result;
pub mod stochastic;

pub use backtrack::{count_nodes, count_solutions, n_queens, solve_all};
pub use config::{Algorithm, EstimateConfig};
pub use parallel::{ParallelConfig, run_parallel_estimate};
pub use result::{EstimateReport, SearchStatistics};
pub use stochastic::{average_estimate, estimate_node_count, run_estimates};
