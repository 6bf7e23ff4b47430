use crate::board::{Board, Coord, Direction, Player};
use crate::reversi_move::{DirectionSet, Move};

use super::ray::scan_ray;

/// Generates every legal placement for `player`, scanning cells in row-major
/// order and testing directions in `Direction::ALL` order. An empty list means
/// the player has to pass.
pub fn generate_moves(board: &Board, player: Player) -> Vec<Move> {
    Coord::all()
        .filter(|coord| !board.is_occupied(*coord))
        .filter_map(|coord| {
            let directions = active_directions(board, coord, player);
            if directions.is_empty() {
                None
            } else {
                Some(Move::place(coord, directions))
            }
        })
        .collect()
}

pub fn has_legal_move(board: &Board, player: Player) -> bool {
    Coord::all()
        .filter(|coord| !board.is_occupied(*coord))
        .any(|coord| {
            Direction::ALL
                .iter()
                .any(|direction| scan_ray(board, coord, *direction, player).is_capped())
        })
}

fn active_directions(board: &Board, coord: Coord, player: Player) -> DirectionSet {
    Direction::ALL
        .iter()
        .copied()
        .filter(|direction| scan_ray(board, coord, *direction, player).is_capped())
        .collect()
}
