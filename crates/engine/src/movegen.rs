//! Successor generation - every legal single-step move from a configuration.

use klotski_core::{Board, Direction, MoveRecord};

use crate::legality::{can_move, try_step};

/// All `(board, move)` successors of a configuration.
///
/// Enumeration order is deterministic: pieces ascending by id, directions
/// in [`Direction::ALL`] order. Each successor owns an independent board
/// copy. No visited filtering happens here; the search engines own that.
pub fn successors(board: &Board) -> Vec<(Board, MoveRecord)> {
    let mut out = Vec::new();
    for piece in board.pieces() {
        for dir in Direction::ALL {
            if let Some((nx, ny)) = try_step(board, piece.id, dir) {
                let mut next = board.clone();
                next.move_piece(piece.id, nx, ny);
                out.push((next, MoveRecord::new(piece.id, piece.x, piece.y, nx, ny)));
            }
        }
    }
    out
}

/// Number of legal single-step moves, without materializing boards.
pub fn count_successors(board: &Board) -> usize {
    board
        .pieces()
        .iter()
        .map(|p| {
            Direction::ALL
                .iter()
                .filter(|&&dir| can_move(board, p.id, dir))
                .count()
        })
        .sum()
}
