use thiserror::Error;

use super::coord::Coord;
use super::direction::Direction;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Cannot place a piece on {coord}, the square is already occupied")]
    SquareOccupied { coord: Coord },
    #[error("Cannot flip from {coord} towards {direction}, no opponent run is capped by a friendly piece")]
    DirectionNotFlippable { coord: Coord, direction: Direction },
    #[error("Invalid coordinate: {input:?}")]
    InvalidCoordinate { input: String },
}
