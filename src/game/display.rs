use crate::board::{cell_name, Board, Player, BOARD_SIZE};
use std::fmt::Write;
use termion::{clear, cursor};

const COLUMN_HEADER: &str = "    a   b   c\n";
const TOP_BORDER: &str = "  ┌───┬───┬───┐\n";
const ROW_SEPARATOR: &str = "  ├───┼───┼───┤\n";
const BOTTOM_BORDER: &str = "  └───┴───┴───┘\n";

/// Renders game frames into a reusable buffer and prints them in one write.
pub struct GameDisplay {
    buffer: String,
    clear_screen: bool,
}

impl Default for GameDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDisplay {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(512),
            clear_screen: true,
        }
    }

    /// A display that never emits terminal escape codes.
    pub fn plain() -> Self {
        Self {
            buffer: String::with_capacity(512),
            clear_screen: false,
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        if self.clear_screen {
            self.buffer
                .push_str(&format!("{}{}", cursor::Goto(1, 1), clear::All));
        }
    }

    pub fn write_game_state(
        &mut self,
        board: &Board,
        current_turn: Player,
        last_move: Option<usize>,
        stats: Option<&str>,
    ) -> std::fmt::Result {
        self.clear();

        self.buffer.push_str(COLUMN_HEADER);
        self.buffer.push_str(TOP_BORDER);

        for row in 0..BOARD_SIZE {
            write!(self.buffer, "{} │", row + 1)?;
            for col in 0..BOARD_SIZE {
                let mark = match board.get(row * BOARD_SIZE + col).player() {
                    Some(player) => player.to_char(),
                    None => ' ',
                };
                write!(self.buffer, " {} │", mark)?;
            }
            writeln!(self.buffer, " {}", row + 1)?;

            if row + 1 < BOARD_SIZE {
                self.buffer.push_str(ROW_SEPARATOR);
            } else {
                self.buffer.push_str(BOTTOM_BORDER);
            }
        }

        self.buffer.push_str(COLUMN_HEADER);
        self.buffer.push('\n');

        writeln!(self.buffer, "Turn: {}", current_turn)?;

        if let Some(index) = last_move {
            writeln!(self.buffer, "Last move: {}", cell_name(index))?;
        }

        if let Some(stats) = stats {
            write!(self.buffer, "\n{}\n", stats)?;
        }

        Ok(())
    }

    pub fn render_game_state(
        &mut self,
        board: &Board,
        current_turn: Player,
        last_move: Option<usize>,
        stats: Option<&str>,
    ) {
        // writing into a String cannot fail
        let _ = self.write_game_state(board, current_turn, last_move, stats);
        print!("{}", self.buffer);
    }

    pub fn buffer(self) -> String {
        self.buffer
    }
}
