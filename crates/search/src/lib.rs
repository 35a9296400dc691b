//! klotski-search - exact breadth-first solvers for sliding-block puzzles.
//!
//! Two strategies over the same movegen primitives: single-frontier BFS
//! and meet-in-the-middle bidirectional BFS. Both are exact in move count.

mod bfs;
mod bidirectional;
mod node;
mod path;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use klotski_core::{Board, Goal, MoveRecord};

/// Outcome of one solve call.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SolveResult {
    /// Minimal move list from the start configuration to a winning one.
    Solved(Vec<MoveRecord>),
    /// Every reachable configuration was examined and none wins. A proven
    /// negative result, not an error.
    Exhausted,
    /// Ceiling reached or cancelled. Solvability unknown; callers must not
    /// present this as "unsolvable".
    Aborted,
}

impl SolveResult {
    pub fn is_solved(&self) -> bool {
        matches!(self, Self::Solved(_))
    }

    /// The solution path, if solved.
    pub fn moves(&self) -> Option<&[MoveRecord]> {
        match self {
            Self::Solved(moves) => Some(moves),
            _ => None,
        }
    }
}

/// Which search to run.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Strategy {
    /// Single-frontier BFS from the start configuration.
    Unidirectional,
    /// Meet-in-the-middle BFS. `goal_board` is one concrete layout
    /// satisfying the win predicate, the seed of the backward frontier.
    /// That it satisfies the predicate and is reachable from the start is
    /// a caller precondition the solver does not verify.
    Bidirectional { goal_board: Board },
}

/// Search resource bounds.
///
/// `max_states` caps the nodes taken off any frontier; bidirectional
/// search counts both directions against the same ceiling. Crossing it
/// yields [`SolveResult::Aborted`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SearchLimits {
    pub max_states: usize,
}

impl SearchLimits {
    pub fn new(max_states: usize) -> Self {
        Self { max_states }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_states: 1_000_000,
        }
    }
}

/// Cloneable cancellation handle. The searches poll it once per frontier
/// round, so cancellation lands within one layer, not one node.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Solver front end: limits plus a cancellation token.
#[derive(Clone, Debug, Default)]
pub struct Solver {
    pub limits: SearchLimits,
    cancel: CancelToken,
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: SearchLimits) -> Self {
        Self {
            limits,
            cancel: CancelToken::new(),
        }
    }

    /// Handle for cancelling a solve running on another thread.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Run the chosen strategy from an owned snapshot of `start`. The
    /// caller's board is copied up front, so a live board mutated
    /// elsewhere cannot race the search.
    pub fn solve(&self, start: &Board, goal: &Goal, strategy: &Strategy) -> SolveResult {
        let start = start.clone();
        match strategy {
            Strategy::Unidirectional => bfs::search(start, goal, self.limits, &self.cancel),
            Strategy::Bidirectional { goal_board } => {
                bidirectional::search(start, goal, goal_board.clone(), self.limits, &self.cancel)
            }
        }
    }
}

/// Solve with default limits and no external cancellation.
pub fn solve(start: &Board, goal: &Goal, strategy: &Strategy) -> SolveResult {
    Solver::new().solve(start, goal, strategy)
}
