//! Game-tree search over tic-tac-toe boards.

mod search;


use std::time::{Duration, Instant};

use crate::board::{Board, Player};

pub use search::{
    exhaustive_minimax, minimax, search, search_root_parallel, SearchOutcome, SearchStrategy,
};

/// Search configuration parameters.
struct SearchConfig {
    strategy: SearchStrategy,
    parallel: bool,
}

/// Statistics from the most recent search.
#[derive(Default)]
struct SearchStats {
    position_count: usize,
    last_score: Option<i32>,
    last_duration: Option<Duration>,
}

impl SearchStats {
    fn reset(&mut self) {
        self.position_count = 0;
        self.last_score = None;
        self.last_duration = None;
    }

    fn record_result(&mut self, outcome: &SearchOutcome, duration: Duration) {
        self.position_count = outcome.nodes_visited;
        self.last_score = Some(outcome.utility);
        self.last_duration = Some(duration);
    }
}

/// Runs searches with a fixed configuration and remembers the stats of the
/// last one for display.
pub struct SearchContext {
    config: SearchConfig,
    stats: SearchStats,
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchContext {
    pub fn new() -> Self {
        Self::with_strategy(SearchStrategy::default(), false)
    }

    pub fn with_parallel(parallel: bool) -> Self {
        Self::with_strategy(SearchStrategy::default(), parallel)
    }

    pub fn with_strategy(strategy: SearchStrategy, parallel: bool) -> Self {
        Self {
            config: SearchConfig { strategy, parallel },
            stats: SearchStats::default(),
        }
    }

    pub fn set_parallel(&mut self, parallel: bool) {
        self.config.parallel = parallel;
    }

    pub fn is_parallel(&self) -> bool {
        self.config.parallel
    }

    pub fn strategy(&self) -> SearchStrategy {
        self.config.strategy
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    pub fn search(&mut self, board: &Board, player: Player) -> SearchOutcome {
        self.reset_stats();

        let start = Instant::now();
        let outcome = if self.config.parallel {
            search_root_parallel(*board, player, self.config.strategy)
        } else {
            self.config.strategy.search(*board, player)
        };

        self.stats.record_result(&outcome, start.elapsed());
        outcome
    }

    pub fn searched_position_count(&self) -> usize {
        self.stats.position_count
    }

    pub fn last_score(&self) -> Option<i32> {
        self.stats.last_score
    }

    pub fn last_search_duration(&self) -> Option<Duration> {
        self.stats.last_duration
    }
}
