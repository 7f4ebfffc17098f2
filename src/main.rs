mod cli;

use cli::commands::Command;
use cli::TicTacToe;
use structopt::StructOpt;

fn main() {
    env_logger::init();

    #[cfg(feature = "instrumentation")]
    if let Err(error) = tictactoe::instrumentation::init_tracing() {
        eprintln!("failed to install tracing subscriber: {}", error);
    }

    TicTacToe::from_args().execute();

    #[cfg(feature = "instrumentation")]
    tictactoe::instrumentation::print_timing_statistics();
}
