//! Ray scanning shared by legality testing and flipping.

use std::iter;

use crate::board::{Board, Cell, Coord, Direction, Player};

/// Classification of the cells beyond an origin in one direction.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RayScan {
    /// `run` opponent pieces in a row, followed by a piece of the scanning player.
    Capped { run: usize },
    /// The ray leaves the board or reaches an empty cell before being capped, or it
    /// starts with a friendly piece.
    Open,
}

impl RayScan {
    pub fn is_capped(&self) -> bool {
        matches!(self, RayScan::Capped { .. })
    }
}

/// Cells from the neighbor of `origin` outwards in `direction`, up to the board edge.
pub fn ray(origin: Coord, direction: Direction) -> impl Iterator<Item = Coord> {
    iter::successors(origin.offset(direction), move |coord| coord.offset(direction))
}

pub fn scan_ray(board: &Board, origin: Coord, direction: Direction, player: Player) -> RayScan {
    let opponent = player.opposite();
    let mut run = 0;
    for coord in ray(origin, direction) {
        match board.get(coord) {
            Cell::Piece(owner) if owner == opponent => run += 1,
            Cell::Piece(_) if run > 0 => return RayScan::Capped { run },
            _ => return RayScan::Open,
        }
    }
    RayScan::Open
}
