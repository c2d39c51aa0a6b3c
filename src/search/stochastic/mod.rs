//! Monte Carlo estimation of the backtracking tree size
//!
//! A single estimator run descends the tree once, picking one promising child
//! uniformly at random per level and extrapolating the node count from the
//! branching factors it sees (Knuth's backtrack estimator). The aggregator
//! averages many independent runs.

pub mod aggregate;
pub mod estimator;

pub use aggregate::{average_estimate, run_estimates};
pub use estimator::{estimate_node_count, estimate_node_count_with_rng};
