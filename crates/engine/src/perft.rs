//! perft - move-sequence counts at fixed depth, for movegen verification.

use klotski_core::{Board, StateKey};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::movegen::{count_successors, successors};

/// Count move sequences of exactly `depth` single steps.
pub fn perft(board: &Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    if depth == 1 {
        return count_successors(board) as u64;
    }
    successors(board)
        .into_iter()
        .map(|(next, _)| perft(&next, depth - 1))
        .sum()
}

/// perft with subtree counts cached by `(state, depth)`. Identical
/// configurations reached by different move orders are counted once and
/// reused, which tames the factorial blowup at higher depths.
pub fn perft_memo(board: &Board, depth: u32) -> u64 {
    fn inner(board: &Board, depth: u32, memo: &mut FxHashMap<(StateKey, u32), u64>) -> u64 {
        if depth == 0 {
            return 1;
        }
        if depth == 1 {
            return count_successors(board) as u64;
        }
        let key = (board.key(), depth);
        if let Some(&cached) = memo.get(&key) {
            return cached;
        }
        let nodes = successors(board)
            .into_iter()
            .map(|(next, _)| inner(&next, depth - 1, memo))
            .sum();
        memo.insert(key, nodes);
        nodes
    }
    inner(board, depth, &mut FxHashMap::default())
}

/// perft with the root layer fanned out across threads.
pub fn perft_parallel(board: &Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    successors(board)
        .into_par_iter()
        .map(|(next, _)| perft(&next, depth - 1))
        .sum()
}
