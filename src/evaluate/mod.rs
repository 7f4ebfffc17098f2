//! Terminal-state detection and depth-adjusted scoring.

use log::debug;

use crate::board::{Board, Player, CELL_COUNT};

/// Utility of an immediate win before the depth adjustment. It must stay above the
/// deepest possible search (one ply per cell) so that a win always scores positive
/// and a loss always scores negative.
pub const BASE_SCORE: i32 = 10;

const _: () = assert!(BASE_SCORE > CELL_COUNT as i32);

/// Every line that wins the game: rows, then columns, then the main diagonal
/// and the anti-diagonal.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Win(Player),
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        *self != GameStatus::InProgress
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Win(player) => Some(*player),
            _ => None,
        }
    }
}

fn line_owner(board: &Board, line: &[usize; 3]) -> Option<Player> {
    let owner = board.get(line[0]).player()?;
    if line.iter().all(|&index| board.get(index).player() == Some(owner)) {
        Some(owner)
    } else {
        None
    }
}

pub fn game_status(board: &Board) -> GameStatus {
    if let Some(winner) = LINES.iter().find_map(|line| line_owner(board, line)) {
        return GameStatus::Win(winner);
    }

    if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

pub fn is_terminal(board: &Board) -> bool {
    game_status(board).is_over()
}

/// Scores a finished board for `player`. Wins found at a shallower `depth` score
/// higher, and losses found deeper score closer to zero. Only meaningful for
/// terminal boards; an unfinished board scores 0.
pub fn score(board: &Board, player: Player, depth: u8) -> i32 {
    let depth = i32::from(depth);
    match game_status(board) {
        GameStatus::Draw => 0,
        GameStatus::Win(winner) if winner == player => BASE_SCORE - depth,
        GameStatus::Win(_) => depth - BASE_SCORE,
        GameStatus::InProgress => {
            debug!("scored a board that is still in progress:\n{}", board);
            0
        }
    }
}
