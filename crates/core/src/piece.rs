//! Piece type - rectangular occupant with a fixed footprint and a mutable position.

use serde::{Deserialize, Serialize};

/// Identity of a piece on a board. Strictly positive; `0` is [`EMPTY`].
pub type PieceId = u16;

/// Sentinel id for an unoccupied grid cell.
pub const EMPTY: PieceId = 0;

#[derive(Clone, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    /// Display label. Never read by the solver.
    pub name: String,
    pub width: u8,
    pub height: u8,
    pub x: u8,
    pub y: u8,
}

impl Piece {
    pub fn new(id: PieceId, name: &str, width: u8, height: u8, x: u8, y: u8) -> Self {
        Self {
            id,
            name: name.to_owned(),
            width,
            height,
            x,
            y,
        }
    }

    /// Coordinates covered by the footprint at the current position, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (u8, u8)> {
        let (x0, y0, w, h) = (self.x, self.y, self.width, self.height);
        (0..h).flat_map(move |dy| (0..w).map(move |dx| (x0 + dx, y0 + dy)))
    }

    pub fn covers(&self, x: u8, y: u8) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}
