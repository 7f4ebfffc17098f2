use std::time::Instant;

use rustc_hash::FxHashSet;

use crate::alpha_beta_searcher::SearchStrategy;
use crate::board::{Board, Player};
use crate::evaluate::{self, GameStatus};
use crate::move_generator::{count_positions, generate_successors};

/// Distinct boards reachable from the empty board in legal play.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PositionCounts {
    pub total: usize,
    pub terminal: usize,
    pub o_wins: usize,
    pub x_wins: usize,
    pub draws: usize,
}

impl PositionCounts {
    fn record(&mut self, status: GameStatus) {
        self.total += 1;
        match status {
            GameStatus::InProgress => return,
            GameStatus::Win(Player::O) => self.o_wins += 1,
            GameStatus::Win(Player::X) => self.x_wins += 1,
            GameStatus::Draw => self.draws += 1,
        }
        self.terminal += 1;
    }
}

/// Walks every game starting from the empty board with `first` to move, counting
/// each distinct board once. Finished boards are not expanded.
pub fn count_reachable_positions(first: Player) -> PositionCounts {
    let mut seen = FxHashSet::default();
    let mut counts = PositionCounts::default();
    let mut stack = vec![(Board::new(), first)];

    while let Some((board, mover)) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }

        let status = evaluate::game_status(&board);
        counts.record(status);
        if status.is_over() {
            continue;
        }

        stack.extend(
            generate_successors(&board, mover)
                .into_iter()
                .map(|successor| (successor, mover.opposite())),
        );
    }

    counts
}

pub fn run_count_positions(depth: u8, strategy: SearchStrategy) {
    let first = Player::O;
    let board = Board::new();

    let mut total_positions = 0;
    let starting_time = Instant::now();

    for depth in 1..=depth {
        let ply_start = Instant::now();
        let count = count_positions(depth, &board, first);
        let duration = ply_start.elapsed();
        total_positions += count;

        println!(
            "depth: {}, positions: {}, positions per second: {:.0}",
            depth,
            count,
            count as f64 / duration.as_secs_f64()
        );
    }

    println!(
        "total positions: {}, total duration: {:?}",
        total_positions,
        starting_time.elapsed()
    );

    let counts = count_reachable_positions(first);
    println!(
        "distinct positions: {}, terminal: {} ({} wins for O, {} wins for X, {} draws)",
        counts.total, counts.terminal, counts.o_wins, counts.x_wins, counts.draws
    );

    let search_start = Instant::now();
    let outcome = strategy.search(board, first);
    println!(
        "{} search from the empty board: utility {}, nodes visited: {}, took {:?}",
        strategy,
        outcome.utility,
        outcome.nodes_visited,
        search_start.elapsed()
    );
}
