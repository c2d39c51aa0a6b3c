//! Board model for the N-Queens problem
//!
//! Rows and columns are 1-based throughout. A [`Placement`] stores the column
//! of the queen in each row; slot 0 of the backing buffer is never used.

pub mod placement;

pub use placement::{Placement, format_columns, is_valid_solution, promising};

use crate::error::{QueensError, Result};
use std::fmt;

/// Largest supported board.
///
/// A single estimate is at most `1 + N * e * N!`, which fits in a `u128` for
/// N up to 32 and overflows it at 33.
pub const MAX_BOARD_SIZE: usize = 32;

/// Board dimension N, validated to lie in `1..=MAX_BOARD_SIZE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardSize(usize);

impl BoardSize {
    /// Validate a caller-supplied size. Zero, negative and oversized boards
    /// are rejected.
    pub fn new(n: i64) -> Result<Self> {
        match usize::try_from(n) {
            Ok(size) if (1..=MAX_BOARD_SIZE).contains(&size) => Ok(BoardSize(size)),
            _ => Err(QueensError::InvalidSize(n)),
        }
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
