use crate::board::{Board, BoardError, Player};
use crate::reversi_move::Move;

use super::ray::{ray, scan_ray, RayScan};

/// Applies `reversi_move` for `player`, returning the resulting board. The input
/// board is left untouched. Each claimed direction is rescanned against the
/// original board; a direction that does not bound an opponent run means the
/// move did not come from the generator for this board and is reported as an
/// error rather than partially applied.
pub fn apply_move(board: &Board, player: Player, reversi_move: &Move) -> Result<Board, BoardError> {
    let placement = match reversi_move {
        Move::Pass => return Ok(*board),
        Move::Place(placement) => placement,
    };

    let origin = placement.coord();
    let mut next = *board;
    next.put(origin, player)?;

    for &direction in placement.directions() {
        let run = match scan_ray(board, origin, direction, player) {
            RayScan::Capped { run } => run,
            RayScan::Open => {
                return Err(BoardError::DirectionNotFlippable {
                    coord: origin,
                    direction,
                })
            }
        };
        for coord in ray(origin, direction).take(run) {
            next.set(coord, player.cell());
        }
    }

    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Coord};
    use crate::move_generator::generate_moves;
    use crate::{place_move, reversi_position};

    #[test]
    fn test_opening_moves_flip_exactly_one() {
        let board = Board::starting_position();
        let moves = generate_moves(&board, Player::Black);
        assert_eq!(4, moves.len());

        for reversi_move in moves.iter() {
            let next = apply_move(&board, Player::Black, reversi_move).unwrap();
            assert_eq!(4, next.count(Player::Black), "after {}", reversi_move);
            assert_eq!(1, next.count(Player::White), "after {}", reversi_move);
            // the placed cell plus one flipped cell
            assert_eq!(2, board.diff(&next).len(), "after {}", reversi_move);
        }
    }

    #[test]
    fn test_apply_d3() {
        let board = Board::starting_position();
        let next = apply_move(&board, Player::Black, &place_move!("d3", [Down])).unwrap();
        let expected = reversi_position! {
            ........
            ........
            ...X....
            ...XX...
            ...XO...
            ........
            ........
            ........
        };
        assert_eq!(expected, next);
        // the original snapshot is unchanged
        assert_eq!(Board::starting_position(), board);
    }

    #[test]
    fn test_flips_every_direction_independently() {
        let board = reversi_position! {
            X.X.X...
            .OOO....
            XO.OX...
            .OOO....
            X.X.X...
            ........
            ........
            ........
        };
        let moves = generate_moves(&board, Player::Black);
        let next = apply_move(&board, Player::Black, &moves[0]).unwrap();
        let expected = reversi_position! {
            X.X.X...
            .XXX....
            XXXXX...
            .XXX....
            X.X.X...
            ........
            ........
            ........
        };
        assert_eq!(expected, next);
    }

    #[test]
    fn test_long_run_stops_at_friendly_piece() {
        let board = reversi_position! {
            .OOOOOX.
            ........
            ........
            ........
            ........
            ........
            ........
            .......O
        };
        let next = apply_move(&board, Player::Black, &place_move!("a1", [Right])).unwrap();
        let flipped: Vec<Coord> = board.diff(&next);
        assert_eq!(6, flipped.len());
        assert_eq!(Cell::Piece(Player::Black), next.get(Coord::new(0, 6)));
        assert_eq!(Cell::Empty, next.get(Coord::new(0, 7)));
        assert_eq!(Cell::Piece(Player::White), next.get(Coord::new(7, 7)));
    }

    #[test]
    fn test_pass_returns_unchanged_copy() {
        let board = Board::starting_position();
        assert_eq!(board, apply_move(&board, Player::White, &Move::Pass).unwrap());
    }

    #[test]
    fn test_rejects_occupied_target() {
        let board = Board::starting_position();
        let result = apply_move(&board, Player::Black, &place_move!("d4", [Down]));
        assert_eq!(
            Err(BoardError::SquareOccupied {
                coord: Coord::new(3, 3)
            }),
            result
        );
    }

    #[test]
    fn test_rejects_direction_without_capped_run() {
        let board = Board::starting_position();
        let result = apply_move(&board, Player::Black, &place_move!("d3", [Down, Left]));
        assert_eq!(
            Err(BoardError::DirectionNotFlippable {
                coord: Coord::new(2, 3),
                direction: crate::board::Direction::Left,
            }),
            result
        );
    }
}
