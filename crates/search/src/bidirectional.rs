//! Meet-in-the-middle bidirectional breadth-first search.
//!
//! The move relation is symmetric (every legal step has a legal inverse),
//! so the backward frontier expands with the same successor generator as
//! the forward one; only path reconstruction knows which side a record
//! came from.

use klotski_core::{Board, Goal, MoveRecord, StateKey};
use rustc_hash::FxHashMap;

use crate::node::SearchNode;
use crate::path::stitch;
use crate::{CancelToken, SearchLimits, SolveResult};

pub(crate) fn search(
    start: Board,
    goal: &Goal,
    goal_board: Board,
    limits: SearchLimits,
    cancel: &CancelToken,
) -> SolveResult {
    if goal.is_met(&start) {
        return SolveResult::Solved(Vec::new());
    }

    // each ledger maps a discovered state to the path that reached it
    // from that direction's origin
    let mut fwd_seen: FxHashMap<StateKey, Vec<MoveRecord>> = FxHashMap::default();
    let mut bwd_seen: FxHashMap<StateKey, Vec<MoveRecord>> = FxHashMap::default();
    fwd_seen.insert(start.key(), Vec::new());
    bwd_seen.insert(goal_board.key(), Vec::new());
    let mut fwd_frontier = vec![SearchNode::root(start)];
    let mut bwd_frontier = vec![SearchNode::root(goal_board)];
    let mut processed = 0usize;
    let mut round = 0u32;

    while !fwd_frontier.is_empty() && !bwd_frontier.is_empty() {
        if cancel.is_cancelled() {
            log::debug!("bidirectional search cancelled after {processed} states");
            return SolveResult::Aborted;
        }
        round += 1;
        // expanding the smaller frontier keeps the two radii balanced,
        // which is where the total node count is lowest
        let forward = fwd_frontier.len() <= bwd_frontier.len();
        let (frontier, own, other) = if forward {
            (&mut fwd_frontier, &mut fwd_seen, &bwd_seen)
        } else {
            (&mut bwd_frontier, &mut bwd_seen, &fwd_seen)
        };

        let mut next = Vec::new();
        for node in frontier.drain(..) {
            if processed >= limits.max_states {
                log::debug!("bidirectional ceiling of {} states reached", limits.max_states);
                return SolveResult::Aborted;
            }
            processed += 1;
            for child in node.expand() {
                let key = child.board.key();
                // opposite ledger first: the child itself may be the
                // meeting point, and must not be swallowed by its own
                // ledger before we notice
                if let Some(opposite) = other.get(&key) {
                    let moves = if forward {
                        stitch(&child.path, opposite)
                    } else {
                        stitch(opposite, &child.path)
                    };
                    log::debug!(
                        "bidirectional met after {processed} states: {} moves",
                        moves.len()
                    );
                    return SolveResult::Solved(moves);
                }
                if !own.contains_key(&key) {
                    own.insert(key, child.path.clone());
                    next.push(child);
                }
            }
        }
        *frontier = next;
        log::trace!(
            "bidirectional round {round}: forward {} backward {}",
            fwd_frontier.len(),
            bwd_frontier.len()
        );
    }

    log::debug!("bidirectional exhausted after {processed} states");
    SolveResult::Exhausted
}
