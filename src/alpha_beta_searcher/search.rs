//! Minimax search with alpha-beta pruning.
//!
//! # Core Algorithm
//!
//! Minimax alternates between maximizing plies (the player of interest to move) and
//! minimizing plies (the opponent to move) until every line of play reaches a finished
//! game, which is scored by `evaluate::score`. Both kinds of ply run through one
//! recursive function; whether a ply maximizes is decided by comparing the mover to the
//! player of interest.
//!
//! Alpha-beta pruning keeps a window [alpha, beta] of scores that can still change the
//! decision higher up the tree. Once `beta <= alpha` the remaining siblings are skipped.
//! It chooses the same move with the same utility as the exhaustive search, but visits
//! fewer nodes.
//!
//! # Tie-breaking
//!
//! Successors are explored in generation order (row-major) and the best move is only
//! replaced on a strict improvement, so ties go to the earliest successor.
//!
//! # Parallel Search
//!
//! Root successors can be searched as independent subtrees on the rayon pool. Results
//! are collected in generation order and reduced with the same strict comparison, so
//! the chosen move and utility match the sequential search. Node counts differ because
//! root siblings no longer share an alpha bound.

use std::cmp::{max, min};
use std::fmt;
use std::str::FromStr;

use log::debug;
use rayon::prelude::*;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use crate::board::{Board, Player};
use crate::evaluate::{is_terminal, score};
use crate::move_generator::generate_successors;

/// (best successor, utility, nodes visited)
type PlyResult = (Option<Board>, i32, usize);

/// The result of a single search invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    /// The chosen successor board, or `None` if the searched board was already finished.
    pub best_move: Option<Board>,
    /// Utility of `best_move` for the player who searched.
    pub utility: i32,
    pub nodes_visited: usize,
}

impl From<PlyResult> for SearchOutcome {
    fn from((best_move, utility, nodes_visited): PlyResult) -> Self {
        Self {
            best_move,
            utility,
            nodes_visited,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStrategy {
    /// Visit every node of the game tree.
    Minimax,
    AlphaBeta,
}

impl Default for SearchStrategy {
    fn default() -> Self {
        SearchStrategy::AlphaBeta
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchStrategy::Minimax => write!(f, "minimax"),
            SearchStrategy::AlphaBeta => write!(f, "alpha-beta"),
        }
    }
}

impl FromStr for SearchStrategy {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minimax" => Ok(SearchStrategy::Minimax),
            "alpha-beta" => Ok(SearchStrategy::AlphaBeta),
            _ => Err("invalid strategy; options are: minimax, alpha-beta"),
        }
    }
}

impl SearchStrategy {
    pub fn search(&self, board: Board, player: Player) -> SearchOutcome {
        match self {
            SearchStrategy::Minimax => exhaustive_minimax(board, player),
            SearchStrategy::AlphaBeta => minimax(board, player),
        }
    }

    fn search_subtree(
        &self,
        board: &Board,
        mover: Player,
        player: Player,
        depth: u8,
    ) -> PlyResult {
        match self {
            SearchStrategy::Minimax => exhaustive(board, mover, player, depth, 0),
            SearchStrategy::AlphaBeta => {
                alpha_beta(board, mover, player, depth, i32::MIN, i32::MAX, 0)
            }
        }
    }
}

/// Picks a move for `player` on `board`. Alias for the alpha-beta `minimax`.
pub fn search(board: Board, player: Player) -> SearchOutcome {
    minimax(board, player)
}

/// Runs the alpha-beta search for `player`, who is both the mover and the player of
/// interest at the root. A finished board yields no move, its terminal score, and a
/// node count of zero.
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn minimax(board: Board, player: Player) -> SearchOutcome {
    debug!("alpha-beta search for {}", player);
    let outcome = SearchOutcome::from(alpha_beta(
        &board,
        player,
        player,
        0,
        i32::MIN,
        i32::MAX,
        0,
    ));
    debug!(
        "alpha-beta search for {} finished: utility {}, {} nodes visited",
        player, outcome.utility, outcome.nodes_visited
    );
    outcome
}

/// Minimax without pruning. Chooses the same move as `minimax` while visiting every
/// node of the game tree.
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn exhaustive_minimax(board: Board, player: Player) -> SearchOutcome {
    debug!("exhaustive minimax search for {}", player);
    let outcome = SearchOutcome::from(exhaustive(&board, player, player, 0, 0));
    debug!(
        "exhaustive minimax search for {} finished: utility {}, {} nodes visited",
        player, outcome.utility, outcome.nodes_visited
    );
    outcome
}

/// Searches each root successor on the rayon pool with `strategy`, then reduces the
/// results in generation order.
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn search_root_parallel(
    board: Board,
    player: Player,
    strategy: SearchStrategy,
) -> SearchOutcome {
    if is_terminal(&board) {
        return SearchOutcome {
            best_move: None,
            utility: score(&board, player, 0),
            nodes_visited: 0,
        };
    }

    let successors = generate_successors(&board, player);
    let results: Vec<(i32, usize)> = successors
        .par_iter()
        .map(|successor| {
            let (_, utility, nodes_visited) =
                strategy.search_subtree(successor, player.opposite(), player, 1);
            (utility, nodes_visited)
        })
        .collect();

    let mut best_move = None;
    let mut best_utility = i32::MIN;
    let mut nodes_visited = successors.len();

    for (successor, (utility, subtree_nodes)) in successors.iter().zip(results) {
        nodes_visited += subtree_nodes;
        if utility > best_utility {
            best_utility = utility;
            best_move = Some(*successor);
        }
    }

    debug!(
        "parallel {} search for {} finished: utility {}, {} nodes visited",
        strategy, player, best_utility, nodes_visited
    );

    SearchOutcome {
        best_move,
        utility: best_utility,
        nodes_visited,
    }
}

/// One ply of the alpha-beta search. The ply maximizes when `mover` is the player of
/// interest and minimizes otherwise.
fn alpha_beta(
    board: &Board,
    mover: Player,
    player: Player,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    mut nodes_visited: usize,
) -> PlyResult {
    if is_terminal(board) {
        return (None, score(board, player, depth), nodes_visited);
    }

    let depth = depth + 1;
    let maximizing = mover == player;
    let mut best_move = None;
    let mut best_utility = if maximizing { i32::MIN } else { i32::MAX };

    for successor in generate_successors(board, mover) {
        nodes_visited += 1;
        let (_, utility, visited) = alpha_beta(
            &successor,
            mover.opposite(),
            player,
            depth,
            alpha,
            beta,
            nodes_visited,
        );
        nodes_visited = visited;

        if maximizing {
            if utility > best_utility {
                best_utility = utility;
                best_move = Some(successor);
            }
            alpha = max(alpha, utility);
        } else {
            if utility < best_utility {
                best_utility = utility;
                best_move = Some(successor);
            }
            beta = min(beta, utility);
        }

        if beta <= alpha {
            break;
        }
    }

    debug_assert!(
        best_move.is_some(),
        "unfinished board has no successors:\n{}",
        board
    );

    (best_move, best_utility, nodes_visited)
}

fn exhaustive(
    board: &Board,
    mover: Player,
    player: Player,
    depth: u8,
    mut nodes_visited: usize,
) -> PlyResult {
    if is_terminal(board) {
        return (None, score(board, player, depth), nodes_visited);
    }

    let depth = depth + 1;
    let maximizing = mover == player;
    let mut best_move = None;
    let mut best_utility = if maximizing { i32::MIN } else { i32::MAX };

    for successor in generate_successors(board, mover) {
        nodes_visited += 1;
        let (_, utility, visited) =
            exhaustive(&successor, mover.opposite(), player, depth, nodes_visited);
        nodes_visited = visited;

        let improves = if maximizing {
            utility > best_utility
        } else {
            utility < best_utility
        };
        if improves {
            best_utility = utility;
            best_move = Some(successor);
        }
    }

    (best_move, best_utility, nodes_visited)
}
