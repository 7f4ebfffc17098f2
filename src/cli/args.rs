//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    calculate_best_move::CalculateBestMoveArgs, count_positions::CountPositionsArgs,
    play::PlayArgs, watch::WatchArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "tictactoe",
    about = "A tic-tac-toe engine that never loses, built on minimax with alpha-beta pruning"
)]
pub enum TicTacToe {
    #[structopt(
        name = "play",
        about = "Play a game against the computer. You play O unless you pick a side with `--player` (o, x or random). Who moves first is chosen at random unless you specify with `--first`. The initial position can be given with `--board` (default: empty board)."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "watch",
        about = "Watch the computer play against itself, pausing `--delay` milliseconds between moves (default: 500). The initial position can be given with `--board` (default: empty board)."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "calculate-best-move",
        about = "Determine the best move for `--player` (required) in the position given with `--board` (required). Prints the cell, its utility and the number of nodes visited."
    )]
    CalculateBestMove(CalculateBestMoveArgs),
    #[structopt(
        name = "count-positions",
        about = "Count the positions reachable at each depth up to `--depth` (default: 9) from the empty board, then report how many nodes a full search visits. Select the search with `--strategy` (minimax or alpha-beta, default: alpha-beta)."
    )]
    CountPositions(CountPositionsArgs),
}

impl crate::cli::commands::Command for TicTacToe {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            Watch(cmd),
            CalculateBestMove(cmd),
            CountPositions(cmd),
        }
    }
}
