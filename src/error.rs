//! Error type shared by the search, the estimator and the front ends

use crate::board::MAX_BOARD_SIZE;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueensError {
    #[error("invalid board size {0}: expected 1 to {max}", max = MAX_BOARD_SIZE)]
    InvalidSize(i64),
    #[error("invalid trial count {0}: at least one trial is required")]
    InvalidTrialCount(i64),
    #[error("deadline expired before any estimator trial completed")]
    NoTrialsCompleted,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, QueensError>;
