use std::fmt;
use std::str::FromStr;

use super::Cell;

pub const BLACK_SYMBOL: char = 'X';
pub const WHITE_SYMBOL: char = 'O';

#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    Black = 0,
    White = 1,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::Black, Player::White];

    pub fn opposite(&self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Player::Black => BLACK_SYMBOL,
            Player::White => WHITE_SYMBOL,
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            BLACK_SYMBOL => Some(Player::Black),
            WHITE_SYMBOL => Some(Player::White),
            _ => None,
        }
    }

    pub fn cell(&self) -> Cell {
        Cell::Piece(*self)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let player_str = match self {
            Player::Black => "black",
            Player::White => "white",
        };
        write!(f, "{}", player_str)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Player {
    type Err = ParseError;
    fn from_str(player: &str) -> Result<Self, Self::Err> {
        match player {
            "black" | "X" => Ok(Player::Black),
            "white" | "O" => Ok(Player::White),
            _ => Err("invalid player; options are: black (X), white (O)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(Player::White, Player::Black.opposite());
        assert_eq!(Player::Black, Player::White.opposite());
    }

    #[test]
    fn test_parse_names_and_symbols() {
        assert_eq!(Player::Black, Player::from_str("black").unwrap());
        assert_eq!(Player::Black, Player::from_str("X").unwrap());
        assert_eq!(Player::White, Player::from_str("white").unwrap());
        assert_eq!(Player::White, Player::from_str("O").unwrap());
        assert!(Player::from_str("random").is_err());
    }

    #[test]
    fn test_symbol_round_trip() {
        for player in Player::ALL.iter() {
            assert_eq!(Some(*player), Player::from_symbol(player.symbol()));
        }
        assert_eq!(None, Player::from_symbol('*'));
    }
}
