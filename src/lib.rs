pub mod alpha_beta_searcher;
pub mod board;
pub mod evaluate;
pub mod input_handler;
pub mod move_generator;
pub mod prelude;
pub mod report;
pub mod reversi_move;
