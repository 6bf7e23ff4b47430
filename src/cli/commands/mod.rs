//! CLI command implementations.

pub trait Command {
    fn execute(self);
}

pub mod evaluate;
pub mod legal_moves;
pub mod search;

// Shared utilities for commands
pub(crate) mod util;
