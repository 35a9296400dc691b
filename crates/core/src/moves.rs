//! Direction and move record types.

use crate::PieceId;
use serde::{Deserialize, Serialize};

/// One of the four axis-aligned unit steps. Multi-cell or diagonal
/// displacements are not representable.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Fixed enumeration order; successor generation depends on it.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit displacement, y growing downward.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// One committed single-cell move of one piece.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    pub piece: PieceId,
    pub from_x: u8,
    pub from_y: u8,
    pub to_x: u8,
    pub to_y: u8,
}

impl MoveRecord {
    pub fn new(piece: PieceId, from_x: u8, from_y: u8, to_x: u8, to_y: u8) -> Self {
        Self {
            piece,
            from_x,
            from_y,
            to_x,
            to_y,
        }
    }

    /// The same displacement with from/to swapped. A backward-search record
    /// role-swapped this way reads as a forward-time move.
    pub fn reversed(self) -> Self {
        Self {
            piece: self.piece,
            from_x: self.to_x,
            from_y: self.to_y,
            to_x: self.from_x,
            to_y: self.from_y,
        }
    }

    /// Direction of the displacement, or `None` if it is not a unit step.
    pub fn direction(&self) -> Option<Direction> {
        let dx = self.to_x as i16 - self.from_x as i16;
        let dy = self.to_y as i16 - self.from_y as i16;
        match (dx, dy) {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }
}
