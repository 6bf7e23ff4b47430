use super::Board;
use std::fmt;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row.iter() {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", self)
    }
}

#[macro_export]
macro_rules! reversi_position {
    ($($cell:tt)*) => {{
        let mut board = $crate::board::Board::new();
        // Convert all input tokens to a string and filter out whitespace characters.
        let cells: Vec<_> = stringify!($($cell)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        // Ensure we have exactly 64 cells
        assert_eq!(cells.len(), 64, "Invalid number of cells. Expected 64, got {}", cells.len());
        // The first line is row 0, labelled rank 1.
        for (i, &c) in cells.iter().enumerate() {
            let player = match c {
                '.' | '*' => continue,
                'X' => $crate::board::Player::Black,
                'O' => $crate::board::Player::White,
                _ => panic!("Invalid character in reversi position"),
            };
            let coord = $crate::board::Coord::new((i / 8) as u8, (i % 8) as u8);
            board.put(coord, player).unwrap();
        }
        board
    }};
}
