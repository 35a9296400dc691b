//! Board representation - dense row-major occupancy grid plus piece table.
//! The canonical state key is the grid itself, so ledger lookups are exact.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{BoardError, Piece, PieceId, EMPTY};

const SLOT_NONE: u16 = u16::MAX;

/// Grid of `width` x `height` cells, each holding the id of the piece
/// covering it (or [`EMPTY`]), plus the pieces themselves in ascending id
/// order. A `Board` is a value type: `clone()` yields a fully independent
/// copy, and every mutation goes through [`Board::move_piece`].
#[derive(Clone, Debug)]
pub struct Board {
    width: u8,
    height: u8,
    grid: Vec<PieceId>,
    pieces: Vec<Piece>,
    /// id -> position in `pieces`, `SLOT_NONE` for absent ids.
    slots: Vec<u16>,
}

impl Board {
    /// Sole constructor. Validates every layout invariant: nonzero
    /// dimensions, nonzero footprints, positive unique ids, in-bounds
    /// placement, no overlap.
    pub fn new(width: u8, height: u8, mut pieces: Vec<Piece>) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::EmptyBoard { width, height });
        }

        pieces.sort_by_key(|p| p.id);

        let mut grid = vec![EMPTY; width as usize * height as usize];
        let mut prev_id = EMPTY;
        for piece in &pieces {
            if piece.id == EMPTY {
                return Err(BoardError::ReservedId);
            }
            if piece.width == 0 || piece.height == 0 {
                return Err(BoardError::EmptyFootprint { id: piece.id });
            }
            if piece.id == prev_id {
                return Err(BoardError::DuplicateId { id: piece.id });
            }
            prev_id = piece.id;
            if piece.x as u16 + piece.width as u16 > width as u16
                || piece.y as u16 + piece.height as u16 > height as u16
            {
                return Err(BoardError::OutOfBounds { id: piece.id });
            }
            for (x, y) in piece.cells() {
                let cell = &mut grid[y as usize * width as usize + x as usize];
                if *cell != EMPTY {
                    return Err(BoardError::Overlap {
                        first: *cell,
                        second: piece.id,
                    });
                }
                *cell = piece.id;
            }
        }

        let max_id = pieces.last().map(|p| p.id).unwrap_or(EMPTY);
        let mut slots = vec![SLOT_NONE; max_id as usize + 1];
        for (slot, piece) in pieces.iter().enumerate() {
            slots[piece.id as usize] = slot as u16;
        }

        Ok(Self {
            width,
            height,
            grid,
            pieces,
            slots,
        })
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Id of the piece covering `(x, y)`, or [`EMPTY`].
    #[inline]
    pub fn cell(&self, x: u8, y: u8) -> PieceId {
        debug_assert!(x < self.width && y < self.height, "cell ({x},{y}) out of bounds");
        self.grid[y as usize * self.width as usize + x as usize]
    }

    #[inline]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        let slot = *self.slots.get(id as usize)?;
        if slot == SLOT_NONE {
            None
        } else {
            Some(&self.pieces[slot as usize])
        }
    }

    /// All pieces in ascending id order.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Mutation primitive for a move already known to be legal: clears the
    /// old footprint, updates the position, stamps the new footprint. No
    /// legality checking happens here; callers go through the legality
    /// checker first, and misuse is a programmer error.
    pub fn move_piece(&mut self, id: PieceId, x: u8, y: u8) {
        debug_assert!(self.piece(id).is_some(), "move_piece: no piece {id}");
        let slot = self.slots[id as usize] as usize;
        let (ox, oy, w, h) = {
            let p = &self.pieces[slot];
            (p.x, p.y, p.width, p.height)
        };
        debug_assert!(
            x as u16 + w as u16 <= self.width as u16 && y as u16 + h as u16 <= self.height as u16,
            "move_piece: piece {id} to ({x},{y}) exits the board"
        );

        let width = self.width as usize;
        for dy in 0..h {
            for dx in 0..w {
                self.grid[(oy + dy) as usize * width + (ox + dx) as usize] = EMPTY;
            }
        }
        self.pieces[slot].x = x;
        self.pieces[slot].y = y;
        for dy in 0..h {
            for dx in 0..w {
                let cell = &mut self.grid[(y + dy) as usize * width + (x + dx) as usize];
                debug_assert!(*cell == EMPTY, "move_piece: piece {id} lands on piece {cell}");
                *cell = id;
            }
        }
    }

    /// Canonical key for this configuration. Equal keys identify equal
    /// search states exactly; there is no hashing step to collide.
    pub fn key(&self) -> StateKey {
        let mut cells = Vec::with_capacity(self.grid.len() + 1);
        // width prefix keeps keys of different board shapes distinct
        cells.push(self.width as PieceId);
        cells.extend_from_slice(&self.grid);
        StateKey(cells.into_boxed_slice())
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.grid == other.grid
            && self.pieces == other.pieces
    }
}

impl Eq for Board {}

/// Opaque canonical key of one board configuration: the board width
/// followed by every cell id in row-major order.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct StateKey(Box<[PieceId]>);

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let id = self.cell(x, y);
                if id == EMPTY {
                    write!(f, "  .")?;
                } else {
                    write!(f, "{id:3}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize)]
struct BoardRepr {
    width: u8,
    height: u8,
    pieces: Vec<Piece>,
}

impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        BoardRepr {
            width: self.width,
            height: self.height,
            pieces: self.pieces.clone(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // rebuild through the checked constructor so a board loaded from
        // disk re-establishes every invariant before anything reads it
        let repr = BoardRepr::deserialize(deserializer)?;
        Board::new(repr.width, repr.height, repr.pieces).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_piece_board() -> Board {
        Board::new(
            4,
            5,
            vec![
                Piece::new(1, "block", 2, 2, 1, 0),
                Piece::new(2, "bar", 1, 2, 0, 0),
            ],
        )
        .expect("valid layout")
    }

    #[test]
    fn test_grid_matches_pieces() {
        let b = two_piece_board();
        assert_eq!(b.cell(1, 0), 1);
        assert_eq!(b.cell(2, 1), 1);
        assert_eq!(b.cell(0, 0), 2);
        assert_eq!(b.cell(0, 1), 2);
        assert_eq!(b.cell(3, 0), EMPTY);
        assert_eq!(b.cell(1, 2), EMPTY);
    }

    #[test]
    fn test_piece_lookup() {
        let b = two_piece_board();
        assert_eq!(b.piece(1).map(|p| (p.x, p.y)), Some((1, 0)));
        assert!(b.piece(3).is_none());
        assert!(b.piece(EMPTY).is_none());
    }

    #[test]
    fn test_move_piece_restamps_grid() {
        let mut b = two_piece_board();
        b.move_piece(1, 1, 1);
        assert_eq!(b.cell(1, 0), EMPTY);
        assert_eq!(b.cell(2, 0), EMPTY);
        assert_eq!(b.cell(1, 1), 1);
        assert_eq!(b.cell(2, 2), 1);
        assert_eq!(b.piece(1).map(|p| (p.x, p.y)), Some((1, 1)));
        // the bystander is untouched
        assert_eq!(b.cell(0, 0), 2);
    }

    #[test]
    fn test_clone_is_independent() {
        let a = two_piece_board();
        let mut b = a.clone();
        b.move_piece(1, 1, 1);
        assert_eq!(a.cell(1, 0), 1);
        assert_ne!(a, b);
    }

    #[test]
    fn test_key_pure_and_distinct() {
        let a = two_piece_board();
        let b = two_piece_board();
        assert_eq!(a.key(), b.key());

        let mut c = two_piece_board();
        c.move_piece(1, 1, 1);
        assert_ne!(a.key(), c.key());
    }

    #[test]
    fn test_key_distinguishes_same_footprint_pieces() {
        let a = Board::new(
            3,
            1,
            vec![
                Piece::new(1, "a", 1, 1, 0, 0),
                Piece::new(2, "b", 1, 1, 2, 0),
            ],
        )
        .expect("valid layout");
        let b = Board::new(
            3,
            1,
            vec![
                Piece::new(1, "a", 1, 1, 2, 0),
                Piece::new(2, "b", 1, 1, 0, 0),
            ],
        )
        .expect("valid layout");
        assert_ne!(a.key(), b.key());
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        assert_eq!(
            Board::new(0, 5, vec![]),
            Err(BoardError::EmptyBoard { width: 0, height: 5 })
        );
    }

    #[test]
    fn test_rejects_reserved_id() {
        let r = Board::new(4, 5, vec![Piece::new(0, "bad", 1, 1, 0, 0)]);
        assert_eq!(r, Err(BoardError::ReservedId));
    }

    #[test]
    fn test_rejects_zero_footprint() {
        let r = Board::new(4, 5, vec![Piece::new(1, "flat", 2, 0, 0, 0)]);
        assert_eq!(r, Err(BoardError::EmptyFootprint { id: 1 }));
    }

    #[test]
    fn test_rejects_duplicate_id() {
        let r = Board::new(
            4,
            5,
            vec![
                Piece::new(1, "a", 1, 1, 0, 0),
                Piece::new(1, "b", 1, 1, 2, 0),
            ],
        );
        assert_eq!(r, Err(BoardError::DuplicateId { id: 1 }));
    }

    #[test]
    fn test_rejects_out_of_bounds() {
        let r = Board::new(4, 5, vec![Piece::new(1, "wide", 2, 2, 3, 0)]);
        assert_eq!(r, Err(BoardError::OutOfBounds { id: 1 }));
    }

    #[test]
    fn test_rejects_overlap() {
        let r = Board::new(
            4,
            5,
            vec![
                Piece::new(1, "a", 2, 2, 0, 0),
                Piece::new(2, "b", 2, 2, 1, 1),
            ],
        );
        assert_eq!(r, Err(BoardError::Overlap { first: 1, second: 2 }));
    }

    #[test]
    fn test_deserialize_validates() {
        // hand-built JSON with two overlapping pieces must not produce a board
        let json = r#"{"width":4,"height":5,"pieces":[
            {"id":1,"name":"a","width":2,"height":2,"x":0,"y":0},
            {"id":2,"name":"b","width":2,"height":2,"x":1,"y":1}]}"#;
        let r: Result<Board, _> = serde_json::from_str(json);
        assert!(r.is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let a = two_piece_board();
        let json = serde_json::to_string(&a).expect("serialize");
        let b: Board = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(a, b);
        assert_eq!(a.key(), b.key());
    }
}
