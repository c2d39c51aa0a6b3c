//! Parallel execution of estimator trials.
//!
//! # Architecture
//!
//! - A **coordinator** spawns worker threads, collects their estimates and
//!   enforces the deadline
//! - **Workers** claim trial indices from a shared atomic counter and run one
//!   estimator descent per claim, each with its own random source and its own
//!   placement buffer
//! - A **channel** carries estimates from workers to the coordinator
//! - **Shared state** holds the trial counter and the stop flag, which workers
//!   check between trials
//!
//! # Example
//!
//! ```no_run
//! use nqueens::search::parallel::{ParallelConfig, run_parallel_estimate};
//! use std::time::Duration;
//!
//! let config = ParallelConfig::default()
//!     .with_workers(4)
//!     .with_timeout(Duration::from_secs(10));
//!
//! let report = run_parallel_estimate(12, 10_000, &config).unwrap();
//! println!("Average was: {}.", report.mean());
//! ```

pub mod channel;
pub mod config;
pub mod coordinator;

pub use config::ParallelConfig;
pub use coordinator::run_parallel_estimate;
