use crate::board::{Board, Coord, Player};
use crate::move_generator::has_legal_move;

use self::evaluation_tables::POSITION_WEIGHTS;

mod evaluation_tables;

/// Returns the positional score of the board from the perspective of
/// `max_player`: the weights under its pieces minus the weights under the
/// opponent's pieces. Empty cells contribute nothing.
#[inline(always)]
pub fn score(board: &Board, max_player: Player) -> i32 {
    board
        .pieces()
        .map(|(coord, owner)| {
            let weight = weight(coord);
            if owner == max_player {
                weight
            } else {
                -weight
            }
        })
        .sum()
}

#[inline(always)]
pub fn weight(coord: Coord) -> i32 {
    POSITION_WEIGHTS[coord.row()][coord.col()]
}

/// Neither side can place a piece.
pub fn is_game_over(board: &Board) -> bool {
    !has_legal_move(board, Player::Black) && !has_legal_move(board, Player::White)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reversi_position;

    #[test]
    fn test_starting_position_is_balanced() {
        let board = Board::starting_position();
        assert_eq!(0, score(&board, Player::Black));
        assert_eq!(0, score(&board, Player::White));
    }

    #[test]
    fn test_empty_board_scores_zero() {
        assert_eq!(0, score(&Board::new(), Player::Black));
    }

    #[test]
    fn test_score_is_antisymmetric() {
        let board = reversi_position! {
            X......O
            .X......
            ........
            ........
            ........
            ........
            ......O.
            O.......
        };
        // black: 99 - 24, white: 99 - 24 + 99
        assert_eq!(-99, score(&board, Player::Black));
        assert_eq!(99, score(&board, Player::White));
    }

    #[test]
    fn test_after_opening_move() {
        let board = reversi_position! {
            ........
            ........
            ...X....
            ...XX...
            ...XO...
            ........
            ........
            ........
        };
        // d3 is worth 4, the center cells are worth 0
        assert_eq!(4, score(&board, Player::Black));
        assert_eq!(-4, score(&board, Player::White));
    }

    #[test]
    fn test_weights_are_symmetric() {
        for coord in Coord::all() {
            let mirrored = Coord::new(7 - coord.row() as u8, 7 - coord.col() as u8);
            let transposed = Coord::new(coord.col() as u8, coord.row() as u8);
            assert_eq!(weight(coord), weight(mirrored));
            assert_eq!(weight(coord), weight(transposed));
        }
    }

    #[test]
    fn test_game_over() {
        assert!(!is_game_over(&Board::starting_position()));
        assert!(is_game_over(&Board::new()));
    }
}
