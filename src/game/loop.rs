use log::{debug, warn};

use crate::evaluate::GameStatus;
use crate::game::display::GameDisplay;
use crate::game::engine::{Engine, EngineConfig};
use crate::game::input_source::InputSource;
use crate::game::renderer::GameRenderer;
use crate::input_handler::InputError;

pub struct GameLoop<I: InputSource, R: GameRenderer> {
    engine: Engine,
    ui: GameDisplay,
    input_source: I,
    renderer: R,
}

impl<I: InputSource, R: GameRenderer> GameLoop<I, R> {
    pub fn new(input_source: I, renderer: R, config: EngineConfig) -> Self {
        Self::with_display(input_source, renderer, config, GameDisplay::new())
    }

    pub fn with_display(
        input_source: I,
        renderer: R,
        config: EngineConfig,
        ui: GameDisplay,
    ) -> Self {
        Self {
            engine: Engine::with_config(config),
            ui,
            input_source,
            renderer,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Plays until the game ends or the player quits. Returns the final status,
    /// or `None` if the player quit first.
    pub fn run(&mut self) -> Option<GameStatus> {
        loop {
            let current_turn = self.engine.turn();

            if let Some(status) = self.engine.check_game_over() {
                self.renderer.render(&mut self.ui, &self.engine, current_turn);
                match status {
                    GameStatus::Win(winner) => println!("Player '{}' wins!", winner),
                    GameStatus::Draw => println!("It's a draw!"),
                    GameStatus::InProgress => {}
                }
                return Some(status);
            }

            self.renderer.render(&mut self.ui, &self.engine, current_turn);

            match self.input_source.get_move(current_turn) {
                Ok(Some(input)) => match self.engine.make_move_from_input(input) {
                    Ok(index) => {
                        debug!("{} took cell {}", current_turn, index);
                        if let Some(delay) = self.renderer.frame_delay() {
                            std::thread::sleep(delay);
                        }
                    }
                    Err(error) => println!("error: {}", error),
                },
                Ok(None) => println!("Invalid input. Try again."),
                Err(InputError::UserExit) => {
                    debug!("player quit");
                    return None;
                }
                Err(error) => {
                    warn!("failed to read move: {}", error);
                    return None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Player;
    use crate::game::input_source::EngineInput;
    use crate::game::renderer::StatsRenderer;
    use crate::input_handler::MoveInput;
    use std::cell::RefCell;

    /// Replays a fixed list of human moves, then quits.
    struct ScriptedInput {
        human_player: Player,
        moves: RefCell<Vec<Option<MoveInput>>>,
    }

    impl InputSource for ScriptedInput {
        fn get_move(&self, current_turn: Player) -> Result<Option<MoveInput>, InputError> {
            if current_turn != self.human_player {
                return Ok(Some(MoveInput::UseEngine));
            }
            let mut moves = self.moves.borrow_mut();
            if moves.is_empty() {
                return Err(InputError::UserExit);
            }
            Ok(moves.remove(0))
        }
    }

    fn quiet_renderer() -> StatsRenderer {
        StatsRenderer {
            delay_between_moves: None,
        }
    }

    #[test]
    fn test_engine_vs_engine_loop_ends_in_draw() {
        let config = EngineConfig {
            first_player: Player::X,
            ..EngineConfig::default()
        };
        let mut game =
            GameLoop::with_display(EngineInput, quiet_renderer(), config, GameDisplay::plain());

        assert_eq!(Some(GameStatus::Draw), game.run());
        assert_eq!(9, game.engine().move_history().len());
    }

    #[test]
    fn test_bad_human_moves_reprompt_until_quit() {
        let input = ScriptedInput {
            human_player: Player::O,
            moves: RefCell::new(vec![
                Some(MoveInput::Cell { index: 4 }),
                None,
                // taken by O's first move
                Some(MoveInput::Cell { index: 4 }),
            ]),
        };
        let config = EngineConfig {
            first_player: Player::O,
            ..EngineConfig::default()
        };
        let mut game = GameLoop::with_display(input, quiet_renderer(), config, GameDisplay::plain());

        assert_eq!(None, game.run());
        // O's center, then the engine's reply; the rejected moves change nothing
        assert_eq!(2, game.engine().move_history().len());
        assert_eq!(Player::O, game.engine().turn());
    }

    #[test]
    fn test_human_cannot_beat_engine() {
        // O plays the top row greedily; the engine must block it and never lose.
        let input = ScriptedInput {
            human_player: Player::O,
            moves: RefCell::new(
                (0..9)
                    .map(|index| Some(MoveInput::Cell { index }))
                    .collect(),
            ),
        };
        let config = EngineConfig {
            first_player: Player::O,
            ..EngineConfig::default()
        };
        let mut game = GameLoop::with_display(input, quiet_renderer(), config, GameDisplay::plain());

        let status = game.run();
        assert_ne!(Some(GameStatus::Win(Player::O)), status);
    }
}
