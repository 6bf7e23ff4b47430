//! Reversi move generation and state transition.

pub mod generator;
pub mod ray;
pub mod transition;

pub use generator::{generate_moves, has_legal_move};
pub use ray::{scan_ray, RayScan};
pub use transition::apply_move;
