//! Calculate best move command - determine the best move from a position.

use std::process;

use structopt::StructOpt;
use tictactoe::alpha_beta_searcher::{SearchContext, SearchStrategy};
use tictactoe::board::{cell_name, Board, Player};
use tictactoe::evaluate::game_status;

use super::Command;

#[derive(StructOpt)]
pub struct CalculateBestMoveArgs {
    #[structopt(long = "board")]
    pub starting_position: Board,
    #[structopt(short, long)]
    pub player: Player,
    #[structopt(short, long, default_value = "alpha-beta")]
    pub strategy: SearchStrategy,
    #[structopt(long)]
    pub parallel: bool,
}

impl Command for CalculateBestMoveArgs {
    fn execute(self) {
        let status = game_status(&self.starting_position);
        if status.is_over() {
            eprintln!("The game is already over: {:?}", status);
            process::exit(1);
        }

        let mut search_context = SearchContext::with_strategy(self.strategy, self.parallel);
        let outcome = search_context.search(&self.starting_position, self.player);

        let index = match outcome
            .best_move
            .and_then(|best_move| self.starting_position.changed_cell(&best_move))
        {
            Some(index) => index,
            None => {
                eprintln!("There are no valid moves in the given position.");
                process::exit(1);
            }
        };

        println!("{}", cell_name(index));
        println!(
            "utility: {}, nodes visited: {}",
            outcome.utility, outcome.nodes_visited
        );
    }
}
