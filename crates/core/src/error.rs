//! Board construction and validation errors.

use crate::PieceId;
use thiserror::Error;

/// Rejected board layouts. Every variant is an invalid-input error; a board
/// that constructs successfully upholds the grid/piece consistency
/// invariants for its whole lifetime.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("board dimensions must be nonzero, got {width}x{height}")]
    EmptyBoard { width: u8, height: u8 },
    #[error("piece id 0 is reserved for empty cells")]
    ReservedId,
    #[error("piece {id} has a zero-sized footprint")]
    EmptyFootprint { id: PieceId },
    #[error("duplicate piece id {id}")]
    DuplicateId { id: PieceId },
    #[error("piece {id} does not fit inside the board")]
    OutOfBounds { id: PieceId },
    #[error("pieces {first} and {second} overlap")]
    Overlap { first: PieceId, second: PieceId },
}
