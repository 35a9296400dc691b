//! Game state aggregate - what external persistence serializes.

use serde::{Deserialize, Serialize};

use crate::{Board, Goal, MoveRecord};

/// A live game: the board, its win predicate, and the moves played so far.
/// Interactive layers own one of these; anything handed to the solver is a
/// snapshot copy, never a shared reference.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub goal: Goal,
    pub history: Vec<MoveRecord>,
}

impl GameState {
    pub fn new(board: Board, goal: Goal) -> Self {
        Self {
            board,
            goal,
            history: Vec::new(),
        }
    }

    /// Append one committed move to the history.
    pub fn record(&mut self, mv: MoveRecord) {
        self.history.push(mv);
    }

    pub fn moves_made(&self) -> usize {
        self.history.len()
    }

    pub fn is_solved(&self) -> bool {
        self.goal.is_met(&self.board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Piece;

    #[test]
    fn test_new_state_empty_history() {
        let board = Board::new(4, 5, vec![Piece::new(1, "block", 2, 2, 1, 0)])
            .expect("valid layout");
        let state = GameState::new(board, Goal::new(1, 1, 3));
        assert_eq!(state.moves_made(), 0);
        assert!(!state.is_solved());
    }

    #[test]
    fn test_record_and_solve() {
        let board = Board::new(4, 5, vec![Piece::new(1, "block", 2, 2, 1, 3)])
            .expect("valid layout");
        let mut state = GameState::new(board, Goal::new(1, 1, 3));
        assert!(state.is_solved());
        state.record(MoveRecord::new(1, 1, 2, 1, 3));
        assert_eq!(state.moves_made(), 1);
    }
}
