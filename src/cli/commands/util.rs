//! Shared utilities for CLI commands.

use tictactoe::alpha_beta_searcher::SearchStrategy;
use tictactoe::board::{Board, Player};
use tictactoe::game::engine::EngineConfig;
use tictactoe::game::input_source::InputSource;
use tictactoe::game::r#loop::GameLoop;
use tictactoe::game::renderer::GameRenderer;

pub(crate) fn run_game_loop<I, R>(input_source: I, renderer: R, config: EngineConfig)
where
    I: InputSource,
    R: GameRenderer,
{
    let mut game = GameLoop::new(input_source, renderer, config);
    game.run();
}

pub(crate) fn create_config(
    starting_position: Board,
    first_player: Player,
    strategy: SearchStrategy,
    parallel: bool,
) -> EngineConfig {
    EngineConfig {
        starting_position,
        first_player,
        strategy,
        parallel,
    }
}
