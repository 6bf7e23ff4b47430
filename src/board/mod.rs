pub mod coord;
pub mod direction;
pub mod error;
pub mod player;

mod display;


pub use coord::Coord;
pub use direction::Direction;
pub use error::BoardError;
pub use player::Player;

use crate::reversi_position;

pub const BOARD_SIZE: usize = 8;
pub const EMPTY_SYMBOL: char = '*';

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Cell {
    Empty,
    Piece(Player),
}

impl Cell {
    pub fn symbol(&self) -> char {
        match self {
            Cell::Empty => EMPTY_SYMBOL,
            Cell::Piece(player) => player.symbol(),
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        if symbol == EMPTY_SYMBOL {
            return Some(Cell::Empty);
        }
        Player::from_symbol(symbol).map(Cell::Piece)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

/// A snapshot of the 8×8 grid. Boards are plain values: every move produces a
/// fresh copy, so sibling branches of the search never observe each other.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }
}

impl Board {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn starting_position() -> Self {
        reversi_position! {
            ........
            ........
            ........
            ...OX...
            ...XO...
            ........
            ........
            ........
        }
    }

    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.row()][coord.col()]
    }

    pub fn is_occupied(&self, coord: Coord) -> bool {
        !self.get(coord).is_empty()
    }

    pub fn put(&mut self, coord: Coord, player: Player) -> Result<(), BoardError> {
        if self.is_occupied(coord) {
            return Err(BoardError::SquareOccupied { coord });
        }
        self.set(coord, player.cell());
        Ok(())
    }

    pub(crate) fn set(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.row()][coord.col()] = cell;
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell; BOARD_SIZE]> {
        self.cells.iter()
    }

    /// Occupied cells in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Player)> + '_ {
        Coord::all().filter_map(move |coord| match self.get(coord) {
            Cell::Piece(player) => Some((coord, player)),
            Cell::Empty => None,
        })
    }

    pub fn count(&self, player: Player) -> usize {
        self.pieces().filter(|(_, owner)| *owner == player).count()
    }

    pub fn empty_count(&self) -> usize {
        Coord::all().filter(|coord| !self.is_occupied(*coord)).count()
    }

    /// Coordinates whose contents differ between the two boards.
    pub fn diff(&self, other: &Board) -> Vec<Coord> {
        Coord::all()
            .filter(|coord| self.get(*coord) != other.get(*coord))
            .collect()
    }
}
