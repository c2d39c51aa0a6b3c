//! Single-pass randomized node-count estimator

use crate::board::{BoardSize, Placement};
use crate::error::Result;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// One estimator run with a random source freshly seeded from OS entropy
pub fn estimate_node_count(n: i64) -> Result<u128> {
    let mut rng = ChaCha8Rng::from_os_rng();
    estimate_node_count_with_rng(n, &mut rng)
}

/// One estimator run drawing from `rng`
pub fn estimate_node_count_with_rng<R: Rng + ?Sized>(n: i64, rng: &mut R) -> Result<u128> {
    let size = BoardSize::new(n)?;
    Ok(descend(size, rng))
}

/// Random descent through the tree, never backtracking.
///
/// At each level the running product of promising-child counts times N is
/// added to the estimate, then one promising column is committed at random.
/// A level with no promising column ends the run early.
pub(crate) fn descend<R: Rng + ?Sized>(size: BoardSize, rng: &mut R) -> u128 {
    let n = size.get();
    let width = n as u128;
    let mut placement = Placement::new(size);
    let mut candidates = Vec::with_capacity(n);

    let mut num_nodes: u128 = 1;
    let mut branch_product: u128 = 1;
    let mut promising_children: usize = 1;
    let mut level = 0;

    while promising_children != 0 && level != n {
        branch_product = branch_product.saturating_mul(promising_children as u128);
        num_nodes = num_nodes.saturating_add(branch_product.saturating_mul(width));
        level += 1;

        candidates.clear();
        candidates.extend((1..=n).filter(|&col| placement.is_promising(level, col)));
        promising_children = candidates.len();

        if let Some(&col) = candidates.choose(rng) {
            placement.place(level, col);
        }
    }

    num_nodes
}
