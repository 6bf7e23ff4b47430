//! Common types re-exported for convenience.

pub use crate::alpha_beta_searcher::{execute, Score, SearchConfig, SearchOutcome, Trace};
pub use crate::board::{Board, Cell, Coord, Direction, Player};
pub use crate::input_handler::Problem;
pub use crate::reversi_move::Move;
