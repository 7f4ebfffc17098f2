//! Move input parsing and validation.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::board::{parse_cell_name, Board};

static ROW_COL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-2])\s*[,\s]\s*([0-2])$").expect("ROW_COL_RE regex should be valid")
});
static CELL_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^(?i)([a-c][1-3])$").expect("CELL_NAME_RE regex should be valid"));
static KEYPAD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^([1-9])$").expect("KEYPAD_RE regex should be valid"));

#[derive(Error, Debug)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
    #[error("user exited")]
    UserExit,
}

#[derive(Debug, PartialEq, Eq)]
pub enum MoveInput {
    /// Mark the cell at this index.
    Cell { index: usize },
    UseEngine,
}

impl FromStr for MoveInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();

        if matches!(trimmed.to_lowercase().as_str(), "q" | "quit" | "exit") {
            return Err(InputError::UserExit);
        }

        let invalid = || InputError::InvalidInput {
            input: input.to_string(),
        };

        if let Some(caps) = ROW_COL_RE.captures(trimmed) {
            let row = caps[1].parse().map_err(|_| invalid())?;
            let col = caps[2].parse().map_err(|_| invalid())?;
            let index = Board::index(row, col).ok_or_else(invalid)?;
            return Ok(MoveInput::Cell { index });
        }

        if let Some(caps) = CELL_NAME_RE.captures(trimmed) {
            let index = parse_cell_name(&caps[1]).ok_or_else(invalid)?;
            return Ok(MoveInput::Cell { index });
        }

        if let Some(caps) = KEYPAD_RE.captures(trimmed) {
            let number: usize = caps[1].parse().map_err(|_| invalid())?;
            return Ok(MoveInput::Cell { index: number - 1 });
        }

        Err(invalid())
    }
}

/// Reads one move from stdin. End of input counts as the user exiting.
pub fn parse_move_input() -> Result<MoveInput, InputError> {
    io::stdout().flush().map_err(|e| InputError::IOError {
        error: format!("Failed to flush stdout: {}", e),
    })?;

    let mut input = String::new();
    let bytes_read = io::stdin()
        .lock()
        .read_line(&mut input)
        .map_err(|e| InputError::IOError {
            error: format!("Failed to read input: {}", e),
        })?;

    if bytes_read == 0 {
        return Err(InputError::UserExit);
    }

    input.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(input: &str) -> usize {
        match input.parse::<MoveInput>() {
            Ok(MoveInput::Cell { index }) => index,
            other => panic!("expected a cell for {:?}, got {:?}", input, other),
        }
    }

    #[test]
    fn test_parse_row_col() {
        assert_eq!(0, cell("0 0"));
        assert_eq!(5, cell("1 2"));
        assert_eq!(7, cell("2,1"));
        assert_eq!(8, cell(" 2 , 2 "));
    }

    #[test]
    fn test_parse_cell_name() {
        assert_eq!(0, cell("a1"));
        assert_eq!(4, cell("B2"));
        assert_eq!(6, cell("a3"));
    }

    #[test]
    fn test_parse_keypad() {
        assert_eq!(0, cell("1"));
        assert_eq!(8, cell("9"));
    }

    #[test]
    fn test_parse_invalid() {
        for input in ["", "3 0", "0 3", "d1", "0", "10", "hello", "1 2 3"].iter() {
            assert!(
                matches!(
                    input.parse::<MoveInput>(),
                    Err(InputError::InvalidInput { .. })
                ),
                "{:?} should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_parse_exit() {
        for input in ["q", "quit", "EXIT"].iter() {
            assert!(matches!(
                input.parse::<MoveInput>(),
                Err(InputError::UserExit)
            ));
        }
    }
}
