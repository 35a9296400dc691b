//! Built-in level table - each puzzle layout is data, not its own type.

use klotski_core::{Board, Goal, Piece, PieceId};
use serde::Serialize;

/// Piece layout entry: `(id, name, width, height, x, y)`.
type PieceDef = (PieceId, &'static str, u8, u8, u8, u8);

/// One puzzle definition: dimensions, starting layout, target piece and
/// goal cell, plus optionally one solved arrangement usable as the
/// backward seed of a bidirectional search. Serializable so front ends
/// can export the catalog.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Level {
    pub name: &'static str,
    width: u8,
    height: u8,
    pieces: &'static [PieceDef],
    target: PieceId,
    goal_x: u8,
    goal_y: u8,
    /// Overrides of `(id, x, y)` for pieces that sit elsewhere in the
    /// solved arrangement; pieces not listed keep their start position.
    solved: Option<&'static [(PieceId, u8, u8)]>,
}

const CLASSIC_PIECES: &[PieceDef] = &[
    (1, "Cao Cao", 2, 2, 1, 0),
    (2, "Guan Yu", 2, 1, 1, 2),
    (3, "Zhang Fei", 1, 2, 0, 0),
    (4, "Zhao Yun", 1, 2, 3, 0),
    (5, "Ma Chao", 1, 2, 0, 2),
    (6, "Huang Zhong", 1, 2, 3, 2),
    (7, "soldier", 1, 1, 1, 3),
    (8, "soldier", 1, 1, 2, 3),
    (9, "soldier", 1, 1, 0, 4),
    (10, "soldier", 1, 1, 3, 4),
];

const CORRIDOR_PIECES: &[PieceDef] = &[(1, "runner", 2, 2, 1, 0)];

const FLANKED_PIECES: &[PieceDef] = &[
    (1, "runner", 2, 2, 1, 0),
    (2, "guard", 1, 1, 0, 0),
    (3, "guard", 1, 1, 3, 0),
    (4, "guard", 1, 1, 0, 4),
    (5, "guard", 1, 1, 3, 4),
];

impl Level {
    /// Heng Dao Li Ma - the classic 4x5 layout. Cao Cao escapes through
    /// the bottom center. No bundled solved arrangement; a bidirectional
    /// solve needs a caller-supplied one.
    pub fn classic() -> Self {
        Self {
            name: "classic",
            width: 4,
            height: 5,
            pieces: CLASSIC_PIECES,
            target: 1,
            goal_x: 1,
            goal_y: 3,
            solved: None,
        }
    }

    /// A lone 2x2 sliding straight down an empty 4x5 board. Three moves.
    pub fn corridor() -> Self {
        Self {
            name: "corridor",
            width: 4,
            height: 5,
            pieces: CORRIDOR_PIECES,
            target: 1,
            goal_x: 1,
            goal_y: 3,
            solved: Some(&[(1, 1, 3)]),
        }
    }

    /// Corridor with corner guards that never enter the lane. Still three
    /// moves.
    pub fn flanked() -> Self {
        Self {
            name: "flanked",
            width: 4,
            height: 5,
            pieces: FLANKED_PIECES,
            target: 1,
            goal_x: 1,
            goal_y: 3,
            solved: Some(&[(1, 1, 3)]),
        }
    }

    pub fn all() -> Vec<Level> {
        vec![Self::classic(), Self::corridor(), Self::flanked()]
    }

    /// Starting board. Built-in layouts always validate.
    pub fn board(&self) -> Board {
        Board::new(self.width, self.height, self.piece_list(None))
            .expect("built-in level layout is valid")
    }

    pub fn goal(&self) -> Goal {
        Goal::new(self.target, self.goal_x, self.goal_y)
    }

    /// The bundled solved arrangement as a full board, if this level
    /// carries one.
    pub fn solved_board(&self) -> Option<Board> {
        let overrides = self.solved?;
        let board = Board::new(self.width, self.height, self.piece_list(Some(overrides)))
            .expect("built-in solved layout is valid");
        debug_assert!(self.goal().is_met(&board), "solved layout misses the goal");
        Some(board)
    }

    fn piece_list(&self, overrides: Option<&[(PieceId, u8, u8)]>) -> Vec<Piece> {
        self.pieces
            .iter()
            .map(|&(id, name, w, h, x, y)| {
                let (x, y) = overrides
                    .and_then(|o| o.iter().find(|p| p.0 == id))
                    .map(|p| (p.1, p.2))
                    .unwrap_or((x, y));
                Piece::new(id, name, w, h, x, y)
            })
            .collect()
    }
}
