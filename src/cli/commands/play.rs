//! Play command - play a game against the computer.

use structopt::StructOpt;
use tictactoe::alpha_beta_searcher::SearchStrategy;
use tictactoe::board::{Board, Player, EMPTY_BOARD_NOTATION};
use tictactoe::game::input_source::ConditionalInput;
use tictactoe::game::renderer::ConditionalStatsRenderer;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short, long, default_value = "o")]
    pub player: Player,
    #[structopt(short, long, default_value = "random")]
    pub first: Player,
    #[structopt(long = "board", default_value = EMPTY_BOARD_NOTATION)]
    pub starting_position: Board,
    #[structopt(short, long, default_value = "alpha-beta")]
    pub strategy: SearchStrategy,
    #[structopt(long, help = "Search the computer's candidate moves on multiple threads")]
    pub parallel: bool,
}

impl Command for PlayArgs {
    fn execute(self) {
        let config = create_config(
            self.starting_position,
            self.first,
            self.strategy,
            self.parallel,
        );
        run_game_loop(
            ConditionalInput {
                human_player: self.player,
            },
            ConditionalStatsRenderer {
                human_player: self.player,
            },
            config,
        );
    }
}
