//! Exhaustive backtracking search
//!
//! Depth-first over rows 1..=N, trying columns in ascending order, so full
//! placements are emitted in strictly increasing lexicographic order.

use crate::board::{BoardSize, Placement, is_valid_solution};
use crate::error::Result;
use crate::search::config::Algorithm;
use crate::search::result::SearchStatistics;
use log::{debug, info};
use std::time::Instant;

/// Enumerate every N-Queens solution, handing each to `emit`.
///
/// `emit` receives the columns of rows 1..=N (1-based). The placement buffer
/// lives only for the duration of this call.
pub fn n_queens<F>(n: i64, mut emit: F) -> Result<SearchStatistics>
where
    F: FnMut(&[usize]),
{
    let size = BoardSize::new(n)?;
    let start_time = Instant::now();

    let mut stats = SearchStatistics::new(Algorithm::Exhaustive, size.get());
    // The root (empty board) counts as a visited node
    stats.nodes_visited = 1;

    let mut placement = Placement::new(size);
    extend(&mut placement, 1, &mut stats, &mut emit);

    stats.elapsed_time = start_time.elapsed();
    info!(
        "{}-queens: {} solutions, {} nodes visited in {:.2?}",
        size, stats.solutions_found, stats.nodes_visited, stats.elapsed_time
    );
    Ok(stats)
}

fn extend<F>(placement: &mut Placement, k: usize, stats: &mut SearchStatistics, emit: &mut F)
where
    F: FnMut(&[usize]),
{
    let n = placement.size();
    for col in 1..=n {
        stats.nodes_visited += 1;
        if !placement.is_promising(k, col) {
            continue;
        }
        stats.promising_nodes += 1;
        placement.place(k, col);

        if k == n {
            debug_assert!(
                is_valid_solution(placement.as_columns()),
                "search emitted an invalid placement: {}",
                placement
            );
            stats.solutions_found += 1;
            debug!("solution {}: {}", stats.solutions_found, placement);
            emit(placement.as_columns());
        } else {
            extend(placement, k + 1, stats, emit);
        }
    }
    // Row k is unassigned again once every column has been tried
    placement.clear(k);
}

/// Collect every solution for an N×N board, in discovery order
pub fn solve_all(n: i64) -> Result<Vec<Vec<usize>>> {
    let mut solutions = Vec::new();
    n_queens(n, |cols| solutions.push(cols.to_vec()))?;
    Ok(solutions)
}

/// Number of solutions for an N×N board
pub fn count_solutions(n: i64) -> Result<u64> {
    n_queens(n, |_| {}).map(|stats| stats.solutions_found)
}

/// Number of nodes the exhaustive search visits, rejected candidates included.
///
/// This is the quantity the Monte Carlo estimator is an unbiased estimate of.
pub fn count_nodes(n: i64) -> Result<u64> {
    n_queens(n, |_| {}).map(|stats| stats.nodes_visited)
}
