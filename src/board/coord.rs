use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use super::direction::Direction;
use super::error::BoardError;
use super::BOARD_SIZE;

static ALGEBRAIC_COORD: Lazy<Regex> =
    Lazy::new(|| Regex::new("^([a-hA-H]{1})([1-8]{1})$").expect("valid coordinate regex"));

/// A cell on the board, addressed by zero-based row and column. Row 0 is the
/// top line of the text encoding and maps to rank `1` in algebraic labels.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE);
        Self { row, col }
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }

    pub fn col(&self) -> usize {
        self.col as usize
    }

    /// Every coordinate in row-major scan order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Coord::new(row, col)))
    }

    /// The neighboring coordinate in `direction`, or `None` past the board edge.
    pub fn offset(&self, direction: Direction) -> Option<Coord> {
        let (delta_row, delta_col) = direction.delta();
        let row = self.row as i8 + delta_row;
        let col = self.col as i8 + delta_col;
        let bound = BOARD_SIZE as i8;
        if row < 0 || row >= bound || col < 0 || col >= bound {
            return None;
        }
        Some(Coord::new(row as u8, col as u8))
    }

    pub fn to_algebraic(&self) -> String {
        let file = (b'a' + self.col) as char;
        format!("{}{}", file, self.row + 1)
    }

    pub fn from_algebraic(algebraic_coord: &str) -> Result<Coord, BoardError> {
        let caps = ALGEBRAIC_COORD
            .captures(algebraic_coord)
            .ok_or_else(|| BoardError::InvalidCoordinate {
                input: algebraic_coord.to_string(),
            })?;
        let file = caps[1].to_ascii_lowercase().as_bytes()[0] - b'a';
        let rank = caps[2].as_bytes()[0] - b'1';
        Ok(Coord::new(rank, file))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

impl FromStr for Coord {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coord::from_algebraic(s)
    }
}
