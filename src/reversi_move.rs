use std::fmt;

use smallvec::SmallVec;

use crate::board::{Board, BoardError, Coord, Direction, Player};
use crate::move_generator::apply_move;

/// The active flip directions of a placement, in generation order.
pub type DirectionSet = SmallVec<[Direction; 8]>;

/// A piece placed on an empty cell together with every direction in which it
/// captures a run of opponent pieces.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Placement {
    coord: Coord,
    directions: DirectionSet,
}

impl Placement {
    pub fn new(coord: Coord, directions: DirectionSet) -> Self {
        Self { coord, directions }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Move {
    Place(Placement),
    /// Only generated when the side to move has no legal placement.
    Pass,
}

impl Move {
    pub fn place(coord: Coord, directions: DirectionSet) -> Self {
        Move::Place(Placement::new(coord, directions))
    }

    pub fn coord(&self) -> Option<Coord> {
        match self {
            Move::Place(placement) => Some(placement.coord()),
            Move::Pass => None,
        }
    }

    pub fn apply(&self, board: &Board, player: Player) -> Result<Board, BoardError> {
        apply_move(board, player, self)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Place(placement) => write!(f, "{}", placement.coord()),
            Move::Pass => write!(f, "pass"),
        }
    }
}

#[macro_export]
macro_rules! place_move {
    ($coord:expr, [$($direction:ident),* $(,)?]) => {
        $crate::reversi_move::Move::place(
            $coord.parse::<$crate::board::Coord>().unwrap(),
            smallvec::smallvec![$($crate::board::Direction::$direction),*],
        )
    };
}
