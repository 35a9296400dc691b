//! Validated application of recorded moves - the consumer-facing path.
//!
//! The interactive layer replays solver output through here one record at
//! a time; a record that does not describe a legal unit step from the
//! piece's current position is an explicit error, never a silent no-op.

use klotski_core::{Board, MoveRecord, PieceId};
use thiserror::Error;

use crate::legality::can_move;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("move names unknown piece {0}")]
    UnknownPiece(PieceId),
    #[error("move for piece {piece} does not start at its current position")]
    WrongOrigin { piece: PieceId },
    #[error("move for piece {piece} is not a single-cell step")]
    NotUnitStep { piece: PieceId },
    #[error("piece {piece} is blocked")]
    Blocked { piece: PieceId },
}

/// Apply one recorded move, returning the resulting board.
pub fn apply_move(board: &Board, mv: &MoveRecord) -> Result<Board, MoveError> {
    let piece = board
        .piece(mv.piece)
        .ok_or(MoveError::UnknownPiece(mv.piece))?;
    if (piece.x, piece.y) != (mv.from_x, mv.from_y) {
        return Err(MoveError::WrongOrigin { piece: mv.piece });
    }
    let dir = mv
        .direction()
        .ok_or(MoveError::NotUnitStep { piece: mv.piece })?;
    if !can_move(board, mv.piece, dir) {
        return Err(MoveError::Blocked { piece: mv.piece });
    }
    let mut next = board.clone();
    next.move_piece(mv.piece, mv.to_x, mv.to_y);
    Ok(next)
}

/// Replay a whole move list from a starting board.
pub fn replay(board: &Board, moves: &[MoveRecord]) -> Result<Board, MoveError> {
    let mut current = board.clone();
    for mv in moves {
        current = apply_move(&current, mv)?;
    }
    Ok(current)
}
