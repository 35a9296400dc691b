//! Move legality - board edges and occupancy ahead of the leading edge.

use klotski_core::{Board, Direction, PieceId, EMPTY};

/// Can piece `id` slide one cell toward `dir`?
///
/// Only the row or column of cells the piece would newly enter is probed;
/// for a unit step the leading edge never overlaps the mover itself, so
/// cells it already covers cannot conflict.
pub fn can_move(board: &Board, id: PieceId, dir: Direction) -> bool {
    let Some(piece) = board.piece(id) else {
        return false;
    };
    let (x, y, w, h) = (piece.x, piece.y, piece.width, piece.height);
    match dir {
        Direction::Up => y > 0 && (x..x + w).all(|cx| board.cell(cx, y - 1) == EMPTY),
        Direction::Down => {
            y + h < board.height() && (x..x + w).all(|cx| board.cell(cx, y + h) == EMPTY)
        }
        Direction::Left => x > 0 && (y..y + h).all(|cy| board.cell(x - 1, cy) == EMPTY),
        Direction::Right => {
            x + w < board.width() && (y..y + h).all(|cy| board.cell(x + w, cy) == EMPTY)
        }
    }
}

/// Destination top-left of a legal unit step, or `None`.
pub fn try_step(board: &Board, id: PieceId, dir: Direction) -> Option<(u8, u8)> {
    if !can_move(board, id, dir) {
        return None;
    }
    let piece = board.piece(id)?;
    let (dx, dy) = dir.delta();
    Some((
        (piece.x as i16 + dx as i16) as u8,
        (piece.y as i16 + dy as i16) as u8,
    ))
}
