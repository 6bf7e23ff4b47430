use std::fmt;

use crate::board::{Board, Cell, Coord, Player, BOARD_SIZE};

use super::InputError;

type ProblemResult<T> = Result<T, InputError>;

/// A position to search: the side to move (the maximizing player), the depth
/// limit and the board.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Problem {
    pub mover: Player,
    pub depth_limit: i32,
    pub board: Board,
}

/// Parses the text encoding:
///
/// ```text
/// X
/// 2
/// ********
/// ********
/// ********
/// ***OX***
/// ***XO***
/// ********
/// ********
/// ********
/// ```
///
/// The first character of the first line names the mover by its piece symbol,
/// the second line holds the depth limit and the next 8 lines hold the rows, top
/// to bottom. Characters past the 8th on a row and trailing blank lines are ignored.
pub fn parse_problem(input: &str) -> ProblemResult<Problem> {
    let mut lines = input.lines();

    let mover = parse_mover(lines.next().ok_or(InputError::MissingPlayer)?)?;
    let depth_limit = parse_depth(lines.next().ok_or(InputError::MissingDepth)?)?;

    let mut rows: Vec<&str> = lines.collect();
    while rows.last().map_or(false, |row| row.trim().is_empty()) {
        rows.pop();
    }
    let board = parse_board(&rows)?;

    Ok(Problem {
        mover,
        depth_limit,
        board,
    })
}

fn parse_mover(line: &str) -> ProblemResult<Player> {
    let trimmed = line.trim();
    trimmed
        .chars()
        .next()
        .and_then(Player::from_symbol)
        .ok_or_else(|| InputError::InvalidPlayer {
            found: trimmed.to_string(),
        })
}

fn parse_depth(line: &str) -> ProblemResult<i32> {
    let trimmed = line.trim();
    trimmed.parse().map_err(|_| InputError::InvalidDepth {
        found: trimmed.to_string(),
    })
}

fn parse_board(rows: &[&str]) -> ProblemResult<Board> {
    if rows.len() != BOARD_SIZE {
        return Err(InputError::InvalidRowCount {
            row_count: rows.len(),
        });
    }

    let mut board = Board::new();
    for (row, content) in rows.iter().enumerate() {
        let symbols: Vec<char> = content.chars().take(BOARD_SIZE).collect();
        if symbols.len() < BOARD_SIZE {
            return Err(InputError::RowTooShort {
                row,
                content: content.to_string(),
            });
        }
        for (col, &character) in symbols.iter().enumerate() {
            let cell =
                Cell::from_symbol(character).ok_or(InputError::InvalidCell { row, character })?;
            board.set(Coord::new(row as u8, col as u8), cell);
        }
    }
    Ok(board)
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.mover.symbol())?;
        writeln!(f, "{}", self.depth_limit)?;
        writeln!(f, "{}", self.board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPENING: &str = "X\n2\n********\n********\n********\n***OX***\n***XO***\n********\n********\n********\n";

    #[test]
    fn test_parse_opening() {
        let problem = parse_problem(OPENING).unwrap();
        assert_eq!(Player::Black, problem.mover);
        assert_eq!(2, problem.depth_limit);
        assert_eq!(Board::starting_position(), problem.board);
    }

    #[test]
    fn test_display_round_trip() {
        let problem = parse_problem(OPENING).unwrap();
        assert_eq!(OPENING, problem.to_string());
    }

    #[test]
    fn test_tolerates_crlf_long_rows_and_trailing_blank_lines() {
        let input = "O\r\n 3 \r\n********extra\r\n********\r\n********\r\n***OX***\r\n***XO***\r\n********\r\n********\r\n********\r\n\r\n\n";
        let problem = parse_problem(input).unwrap();
        assert_eq!(Player::White, problem.mover);
        assert_eq!(3, problem.depth_limit);
        assert_eq!(Board::starting_position(), problem.board);
    }

    #[test]
    fn test_mover_is_first_character() {
        let input = OPENING.replacen("X", "X black", 1);
        assert_eq!(Player::Black, parse_problem(&input).unwrap().mover);
    }

    #[test]
    fn test_negative_depth_is_accepted() {
        let input = OPENING.replacen("2", "-1", 1);
        assert_eq!(-1, parse_problem(&input).unwrap().depth_limit);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(parse_problem(""), Err(InputError::MissingPlayer)));
        assert!(matches!(parse_problem("X"), Err(InputError::MissingDepth)));
        assert!(matches!(
            parse_problem("B\n2\n"),
            Err(InputError::InvalidPlayer { .. })
        ));
        assert!(matches!(
            parse_problem("\n2\n"),
            Err(InputError::InvalidPlayer { .. })
        ));
        assert!(matches!(
            parse_problem("X\ntwo\n"),
            Err(InputError::InvalidDepth { .. })
        ));
        assert!(matches!(
            parse_problem("X\n2\n********\n"),
            Err(InputError::InvalidRowCount { row_count: 1 })
        ));
    }

    #[test]
    fn test_row_errors() {
        let short = OPENING.replacen("***OX***", "***OX", 1);
        assert!(matches!(
            parse_problem(&short),
            Err(InputError::RowTooShort { row: 3, .. })
        ));

        let invalid = OPENING.replacen("***OX***", "***OX*.*", 1);
        assert!(matches!(
            parse_problem(&invalid),
            Err(InputError::InvalidCell {
                row: 3,
                character: '.'
            })
        ));
    }
}
