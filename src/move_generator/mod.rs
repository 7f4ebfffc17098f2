//! Successor generation for tic-tac-toe boards.

use smallvec::SmallVec;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use crate::board::{Board, Player, CELL_COUNT};
use crate::evaluate::is_terminal;

/// Every successor of a board fits inline, one per empty cell.
pub type SuccessorList = SmallVec<[Board; CELL_COUNT]>;

/// Generates one successor per empty cell, scanning row-major, each with that cell
/// marked for `mover`. A full board yields no successors.
pub fn generate_successors(board: &Board, mover: Player) -> SuccessorList {
    board
        .empty_cells()
        .map(|index| board.with_mark(index, mover))
        .collect()
}

/// Counts the positions reached after exactly `depth` plies from `board`, with
/// `mover` to play first. Finished games are not expanded further.
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn count_positions(depth: u8, board: &Board, mover: Player) -> usize {
    if depth == 0 {
        return 1;
    }

    if is_terminal(board) {
        return 0;
    }

    generate_successors(board, mover)
        .iter()
        .map(|successor| count_positions(depth - 1, successor, mover.opposite()))
        .sum()
}
