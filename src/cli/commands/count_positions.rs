//! Count positions command - count reachable positions and search effort.

use structopt::StructOpt;
use tictactoe::alpha_beta_searcher::SearchStrategy;
use tictactoe::game::position_counter::run_count_positions;

use super::Command;

#[derive(StructOpt)]
pub struct CountPositionsArgs {
    #[structopt(short, long, default_value = "9")]
    pub depth: u8,
    #[structopt(short, long, default_value = "alpha-beta")]
    pub strategy: SearchStrategy,
}

impl Command for CountPositionsArgs {
    fn execute(self) {
        run_count_positions(self.depth, self.strategy);
    }
}
