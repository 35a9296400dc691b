//! Search nodes - an owned configuration plus the path that reached it.

use klotski_core::{Board, MoveRecord};
use klotski_engine::successors;

/// One frontier entry. The board is independently owned; no two nodes
/// share mutable state, so branches can never interfere.
#[derive(Clone, Debug)]
pub(crate) struct SearchNode {
    pub board: Board,
    pub path: Vec<MoveRecord>,
}

impl SearchNode {
    pub fn root(board: Board) -> Self {
        Self {
            board,
            path: Vec::new(),
        }
    }

    /// Child nodes, one per legal move, each with the parent's path
    /// extended by the move that produced it.
    pub fn expand(&self) -> Vec<SearchNode> {
        successors(&self.board)
            .into_iter()
            .map(|(board, mv)| {
                let mut path = Vec::with_capacity(self.path.len() + 1);
                path.extend_from_slice(&self.path);
                path.push(mv);
                SearchNode { board, path }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use klotski_core::Piece;

    #[test]
    fn test_expand_extends_path() {
        let board = Board::new(4, 5, vec![Piece::new(1, "block", 2, 2, 1, 0)])
            .expect("valid layout");
        let root = SearchNode::root(board);
        let children = root.expand();
        assert_eq!(children.len(), 3);
        for child in &children {
            assert_eq!(child.path.len(), 1);
            let grandchildren = child.expand();
            for gc in grandchildren {
                assert_eq!(gc.path.len(), 2);
                assert_eq!(gc.path[0], child.path[0]);
            }
        }
        // root path untouched
        assert!(root.path.is_empty());
    }
}
