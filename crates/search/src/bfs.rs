//! Single-frontier breadth-first search.

use klotski_core::{Board, Goal};
use rustc_hash::FxHashSet;

use crate::node::SearchNode;
use crate::{CancelToken, SearchLimits, SolveResult};

/// Layered BFS from `start`. The win predicate is checked on dequeue, not
/// only on generation, so a start that is already solved returns
/// immediately with an empty path and no expansion at all.
pub(crate) fn search(
    start: Board,
    goal: &Goal,
    limits: SearchLimits,
    cancel: &CancelToken,
) -> SolveResult {
    let mut visited = FxHashSet::default();
    visited.insert(start.key());
    let mut frontier = vec![SearchNode::root(start)];
    let mut processed = 0usize;
    let mut depth = 0u32;

    while !frontier.is_empty() {
        if cancel.is_cancelled() {
            log::debug!("bfs cancelled at depth {depth} after {processed} states");
            return SolveResult::Aborted;
        }
        let mut next = Vec::new();
        for node in frontier {
            if processed >= limits.max_states {
                log::debug!("bfs ceiling of {} states reached", limits.max_states);
                return SolveResult::Aborted;
            }
            processed += 1;
            if goal.is_met(&node.board) {
                log::debug!("bfs solved: {} moves, {processed} states", node.path.len());
                return SolveResult::Solved(node.path);
            }
            for child in node.expand() {
                if visited.insert(child.board.key()) {
                    next.push(child);
                }
            }
        }
        frontier = next;
        depth += 1;
        log::trace!(
            "bfs depth {depth}: frontier {}, visited {}",
            frontier.len(),
            visited.len()
        );
    }

    log::debug!("bfs exhausted after {processed} states");
    SolveResult::Exhausted
}
