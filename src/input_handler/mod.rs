//! Reading search problems from their text encoding.

pub mod problem;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub use problem::{parse_problem, Problem};

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Unable to read {path:?}: {error}")]
    IOError { path: PathBuf, error: io::Error },
    #[error("Missing player line")]
    MissingPlayer,
    #[error("Invalid player {found:?}: expected 'X' or 'O'")]
    InvalidPlayer { found: String },
    #[error("Missing depth line")]
    MissingDepth,
    #[error("Invalid depth {found:?}: expected an integer")]
    InvalidDepth { found: String },
    #[error("Wrong number of rows: 8 expected, {row_count:?} given")]
    InvalidRowCount { row_count: usize },
    #[error("Row {row:?} is shorter than 8 cells: {content:?}")]
    RowTooShort { row: usize, content: String },
    #[error("Invalid cell character {character:?} in row {row:?}")]
    InvalidCell { row: usize, character: char },
}

/// Reads and parses the problem file at `path`.
pub fn read_problem(path: &Path) -> Result<Problem, InputError> {
    let contents = fs::read_to_string(path).map_err(|error| InputError::IOError {
        path: path.to_path_buf(),
        error,
    })?;
    parse_problem(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_reported() {
        let path = Path::new("this/file/does/not/exist.txt");
        match read_problem(path) {
            Err(InputError::IOError { path: reported, .. }) => assert_eq!(path, reported),
            other => panic!("expected an io error, got {:?}", other),
        }
    }
}
