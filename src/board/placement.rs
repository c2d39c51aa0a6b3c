//! Queen placements and the promising test

use crate::board::BoardSize;
use std::collections::HashSet;
use std::fmt;

/// Column assignment per row for a partial or complete board.
///
/// Owned by a single top-level search or estimator call. Unassigned rows
/// hold 0, which is never a valid column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    columns: Vec<usize>,
}

impl Placement {
    pub fn new(size: BoardSize) -> Self {
        Self {
            columns: vec![0; size.get() + 1],
        }
    }

    pub fn size(&self) -> usize {
        self.columns.len() - 1
    }

    /// Put the queen of `row` in `col`, replacing any previous assignment
    pub fn place(&mut self, row: usize, col: usize) {
        debug_assert!(row >= 1 && row <= self.size(), "row {} out of range", row);
        debug_assert!(col >= 1 && col <= self.size(), "column {} out of range", col);
        self.columns[row] = col;
    }

    pub fn clear(&mut self, row: usize) {
        self.columns[row] = 0;
    }

    /// Whether a queen may go in `col` of `row` given rows `1..row`
    pub fn is_promising(&self, row: usize, col: usize) -> bool {
        promising(&self.columns, row, col)
    }

    /// Columns of every row, in row order
    pub fn as_columns(&self) -> &[usize] {
        &self.columns[1..]
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_columns(self.as_columns()))
    }
}

/// Render columns as `c1, c2, ..., cN`
pub fn format_columns(columns: &[usize]) -> String {
    let cols: Vec<String> = columns.iter().map(|c| c.to_string()).collect();
    cols.join(", ")
}

/// Promising test over a 1-indexed column buffer.
///
/// Returns false if any queen in rows `1..k` shares `candidate`'s column or
/// one of its diagonals. Only rows below `k` are read; rows holding 0 and
/// rows past the end of `placement` have no queen.
pub fn promising(placement: &[usize], k: usize, candidate: usize) -> bool {
    (1..k).all(|j| match placement.get(j) {
        Some(&col) if col != 0 => col != candidate && col.abs_diff(candidate) != j.abs_diff(k),
        _ => true,
    })
}

/// Independent check that `columns` (row 1 first) is a full N-Queens solution
pub fn is_valid_solution(columns: &[usize]) -> bool {
    let n = columns.len();
    let mut seen = HashSet::with_capacity(n);
    if !columns.iter().all(|&c| (1..=n).contains(&c) && seen.insert(c)) {
        return false;
    }
    for r1 in 0..n {
        for r2 in (r1 + 1)..n {
            if columns[r1].abs_diff(columns[r2]) == r2 - r1 {
                return false;
            }
        }
    }
    true
}
