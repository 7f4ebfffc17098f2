pub mod cell;
pub mod error;
pub mod player;

mod display;
mod notation;

pub use cell::Cell;
pub use notation::{cell_name, parse_cell_name, EMPTY_BOARD_NOTATION};
pub use player::Player;

use error::BoardError;

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Represents the state of a tic-tac-toe board as a row-major 3x3 grid. Boards are
/// plain `Copy` values; the search hands every branch its own copy rather than
/// applying and undoing moves on a shared board. Whose turn it is lives with the
/// caller, not the board.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Converts a zero-based row and column into a cell index.
    pub fn index(row: usize, col: usize) -> Option<usize> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(row * BOARD_SIZE + col)
        } else {
            None
        }
    }

    pub fn row_col(index: usize) -> (usize, usize) {
        (index / BOARD_SIZE, index % BOARD_SIZE)
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Panics if `index` is not below `CELL_COUNT`.
    pub fn get(&self, index: usize) -> Cell {
        self.cells[index]
    }

    pub fn is_occupied(&self, index: usize) -> bool {
        !self.cells[index].is_empty()
    }

    pub fn put(&mut self, index: usize, player: Player) -> Result<(), BoardError> {
        if index >= CELL_COUNT {
            return Err(BoardError::CellOutOfRangeError { index });
        }

        if self.is_occupied(index) {
            return Err(BoardError::CellOccupiedBoardPutError { index });
        }

        self.cells[index] = Cell::from(player);
        Ok(())
    }

    /// Returns a copy of this board with `index` marked for `player`, leaving
    /// `self` untouched. The caller guarantees the cell is empty.
    pub fn with_mark(&self, index: usize, player: Player) -> Self {
        debug_assert!(!self.is_occupied(index), "cell {} is occupied", index);
        let mut successor = *self;
        successor.cells[index] = Cell::from(player);
        successor
    }

    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn count(&self, player: Player) -> usize {
        let mark = Cell::from(player);
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    pub fn move_count(&self) -> usize {
        CELL_COUNT - self.empty_cells().count()
    }

    /// Whose turn it is, given who moved first. When both players have made the
    /// same number of moves it is `first`'s turn; otherwise the player behind.
    pub fn next_player(&self, first: Player) -> Player {
        let o_count = self.count(Player::O);
        let x_count = self.count(Player::X);

        if o_count == x_count {
            first
        } else if o_count > x_count {
            Player::X
        } else {
            Player::O
        }
    }

    /// The single cell that is empty here and marked in `successor`.
    pub fn changed_cell(&self, successor: &Board) -> Option<usize> {
        let mut changed =
            (0..CELL_COUNT).filter(|&index| self.cells[index] != successor.cells[index]);
        let index = changed.next()?;

        if changed.next().is_some() || self.is_occupied(index) {
            return None;
        }

        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe_position;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(CELL_COUNT, board.empty_cells().count());
        assert_eq!(0, board.move_count());
        assert!(!board.is_full());
    }

    #[test]
    fn test_index_and_row_col() {
        assert_eq!(Some(0), Board::index(0, 0));
        assert_eq!(Some(5), Board::index(1, 2));
        assert_eq!(Some(8), Board::index(2, 2));
        assert_eq!(None, Board::index(3, 0));
        assert_eq!(None, Board::index(0, 3));
        assert_eq!((1, 2), Board::row_col(5));
    }

    #[test]
    fn test_put() {
        let mut board = Board::new();
        board.put(4, Player::X).unwrap();
        assert_eq!(Cell::X, board.get(4));
        assert_eq!(1, board.count(Player::X));
        assert_eq!(0, board.count(Player::O));
    }

    #[test]
    fn test_put_occupied() {
        let mut board = Board::new();
        board.put(4, Player::X).unwrap();
        assert_eq!(
            Err(BoardError::CellOccupiedBoardPutError { index: 4 }),
            board.put(4, Player::O)
        );
    }

    #[test]
    fn test_put_out_of_range() {
        let mut board = Board::new();
        assert_eq!(
            Err(BoardError::CellOutOfRangeError { index: 9 }),
            board.put(9, Player::O)
        );
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::new();
        let successor = board.with_mark(0, Player::O);
        assert_eq!(Cell::Empty, board.get(0));
        assert_eq!(Cell::O, successor.get(0));
    }

    #[test]
    fn test_empty_cells() {
        let board = tictactoe_position! {
            OX.
            .X.
            O..
        };
        let empty: Vec<usize> = board.empty_cells().collect();
        assert_eq!(vec![2, 3, 5, 7, 8], empty);
        assert_eq!(4, board.move_count());
    }

    #[test]
    fn test_is_full() {
        let board = tictactoe_position! {
            OXO
            OXX
            XOO
        };
        assert!(board.is_full());
    }

    #[test]
    fn test_next_player() {
        let board = Board::new();
        assert_eq!(Player::X, board.next_player(Player::X));
        assert_eq!(Player::O, board.next_player(Player::O));

        let board = tictactoe_position! {
            X..
            ...
            ...
        };
        assert_eq!(Player::O, board.next_player(Player::X));

        let board = tictactoe_position! {
            O..
            ...
            ...
        };
        assert_eq!(Player::X, board.next_player(Player::O));
    }

    #[test]
    fn test_changed_cell() {
        let board = tictactoe_position! {
            O..
            .X.
            ...
        };
        let successor = board.with_mark(8, Player::O);
        assert_eq!(Some(8), board.changed_cell(&successor));
        assert_eq!(None, board.changed_cell(&board));

        let two_moves_later = successor.with_mark(2, Player::X);
        assert_eq!(None, board.changed_cell(&two_moves_later));
    }
}
