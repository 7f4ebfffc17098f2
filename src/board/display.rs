use super::{Board, BOARD_SIZE};
use std::fmt;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            let marks: Vec<String> = (0..BOARD_SIZE)
                .map(|col| {
                    let cell = self.cells[row * BOARD_SIZE + col];
                    match cell.player() {
                        Some(player) => player.to_string(),
                        None => " ".to_string(),
                    }
                })
                .collect();
            writeln!(f, "{}", marks.join("|"))?;
            if row + 1 < BOARD_SIZE {
                writeln!(f, "-+-+-")?;
            }
        }
        Ok(())
    }
}

#[macro_export]
macro_rules! tictactoe_position {
    ($($cell:tt)*) => {{
        let mut board = $crate::board::Board::new();
        // Convert all input tokens to a string and filter out whitespace characters.
        let cells: Vec<_> = stringify!($($cell)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        assert_eq!(
            cells.len(),
            $crate::board::CELL_COUNT,
            "Invalid number of cells. Expected 9, got {}",
            cells.len()
        );
        // Cells are listed row-major, top row first.
        for (index, &c) in cells.iter().enumerate() {
            match $crate::board::Player::from_char(c) {
                Some(player) => board.put(index, player).unwrap(),
                None => assert_eq!(c, '.', "Invalid character in tic-tac-toe position"),
            }
        }
        board
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Player};
    use crate::tictactoe_position;

    #[test]
    fn test_position_macro() {
        let board = tictactoe_position! {
            O.X
            ...
            X.O
        };
        assert_eq!(Cell::O, board.get(0));
        assert_eq!(Cell::X, board.get(2));
        assert_eq!(Cell::X, board.get(6));
        assert_eq!(Cell::O, board.get(8));
        assert_eq!(2, board.count(Player::O));
    }

    #[test]
    fn test_display() {
        let board = tictactoe_position! {
            O.X
            .X.
            ..O
        };
        let expected = "O| |X\n-+-+-\n |X| \n-+-+-\n | |O\n";
        assert_eq!(expected, board.to_string());
    }
}
