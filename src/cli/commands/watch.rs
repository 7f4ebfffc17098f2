//! Watch command - watch the computer play against itself.

use std::time::Duration;

use structopt::StructOpt;
use tictactoe::alpha_beta_searcher::SearchStrategy;
use tictactoe::board::{Board, Player, EMPTY_BOARD_NOTATION};
use tictactoe::game::input_source::EngineInput;
use tictactoe::game::renderer::StatsRenderer;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(long = "board", default_value = EMPTY_BOARD_NOTATION)]
    pub starting_position: Board,
    #[structopt(short, long, default_value = "o")]
    pub first: Player,
    #[structopt(short, long, default_value = "alpha-beta")]
    pub strategy: SearchStrategy,
    #[structopt(long)]
    pub parallel: bool,
    #[structopt(
        long = "delay",
        default_value = "500",
        help = "Delay between moves in milliseconds"
    )]
    pub delay_ms: u64,
}

impl Command for WatchArgs {
    fn execute(self) {
        let config = create_config(
            self.starting_position,
            self.first,
            self.strategy,
            self.parallel,
        );
        run_game_loop(
            EngineInput,
            StatsRenderer {
                delay_between_moves: Some(Duration::from_millis(self.delay_ms)),
            },
            config,
        );
    }
}
