//! klotski-engine - move legality, successor generation, and levels.

pub mod apply;
pub mod legality;
pub mod levels;
pub mod movegen;
pub mod perft;

pub use apply::{apply_move, replay, MoveError};
pub use legality::{can_move, try_step};
pub use levels::Level;
pub use movegen::{count_successors, successors};
