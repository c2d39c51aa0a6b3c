//! N-Queens backtracking search and Knuth's Monte Carlo estimate of the
//! backtracking tree size.
//!
//! ```
//! let solutions = nqueens::search::solve_all(4).unwrap();
//! assert_eq!(solutions, vec![vec![2, 4, 1, 3], vec![3, 1, 4, 2]]);
//!
//! let estimate = nqueens::search::estimate_node_count(8).unwrap();
//! assert!(estimate >= 1);
//! ```

pub mod board;
pub mod error;
pub mod menu;
pub mod search;

pub use error::{QueensError, Result};
