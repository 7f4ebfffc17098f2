use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BoardError {
    #[error("Cannot put a mark on cell {index}, it is already occupied")]
    CellOccupiedBoardPutError { index: usize },
    #[error("Cell {index} is off the board, valid cells are 0 through 8")]
    CellOutOfRangeError { index: usize },
    #[error("Invalid board, expected 9 cells but found {count}")]
    InvalidCellCountError { count: usize },
    #[error("Invalid board, unexpected character {character:?}")]
    InvalidCellCharacterError { character: char },
    #[error("Invalid board, O has {o_count} marks and X has {x_count}; players must alternate")]
    UnbalancedBoardError { o_count: usize, x_count: usize },
}
