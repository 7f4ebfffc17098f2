//! Compact text notation for boards and cell names.
//!
//! A board is nine characters in row-major order, optionally split into rows
//! with `/`: `O` and `X` for marks (either case), `.`, `-` or `_` for an
//! empty cell. `OO./.X./...` has O on the first two cells of the top row and
//! X in the center.
//!
//! Cells are named like a spreadsheet: column letter `a`-`c`, row number
//! `1`-`3` counted from the top, so `a1` is index 0 and `c3` is index 8.

use std::str::FromStr;

use super::error::BoardError;
use super::{Board, Cell, Player, BOARD_SIZE, CELL_COUNT};

pub const EMPTY_BOARD_NOTATION: &str = ".../.../...";

const COLUMN_NAMES: [char; BOARD_SIZE] = ['a', 'b', 'c'];

impl Board {
    pub fn from_notation(notation: &str) -> Result<Self, BoardError> {
        let characters: Vec<char> = notation.trim().chars().filter(|&c| c != '/').collect();

        if characters.len() != CELL_COUNT {
            return Err(BoardError::InvalidCellCountError {
                count: characters.len(),
            });
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (cell, character) in cells.iter_mut().zip(characters) {
            *cell = Cell::from_char(character)
                .ok_or(BoardError::InvalidCellCharacterError { character })?;
        }

        let board = Board::from_cells(cells);
        let o_count = board.count(Player::O);
        let x_count = board.count(Player::X);
        if o_count.max(x_count) - o_count.min(x_count) > 1 {
            return Err(BoardError::UnbalancedBoardError { o_count, x_count });
        }

        Ok(board)
    }

    pub fn to_notation(&self) -> String {
        self.cells
            .chunks(BOARD_SIZE)
            .map(|row| row.iter().map(Cell::to_char).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }
}

// used for parsing cli args
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(notation: &str) -> Result<Self, Self::Err> {
        Board::from_notation(notation)
    }
}

/// Names a cell index, e.g. `4` is `b2`.
pub fn cell_name(index: usize) -> String {
    let (row, col) = Board::row_col(index);
    format!("{}{}", COLUMN_NAMES[col], row + 1)
}

/// Parses a cell name like `b2` (case-insensitive) into a cell index.
pub fn parse_cell_name(name: &str) -> Option<usize> {
    let mut chars = name.trim().chars();
    let column = chars.next()?.to_ascii_lowercase();
    let row = chars.next()?.to_digit(10)? as usize;
    if chars.next().is_some() || row == 0 {
        return None;
    }

    let col = COLUMN_NAMES.iter().position(|&name| name == column)?;
    Board::index(row - 1, col)
}
