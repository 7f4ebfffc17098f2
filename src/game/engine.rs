use std::time::Duration;

use log::{debug, info};
use thiserror::Error;

use crate::alpha_beta_searcher::{SearchContext, SearchStrategy};
use crate::board::error::BoardError;
use crate::board::{cell_name, Board, Player};
use crate::evaluate::{self, GameStatus};
use crate::input_handler::MoveInput;

/// Core engine state and configuration
#[derive(Clone)]
pub struct EngineConfig {
    pub starting_position: Board,
    /// Who moves first when the starting position has as many O marks as X marks.
    pub first_player: Player,
    pub strategy: SearchStrategy,
    pub parallel: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            starting_position: Board::default(),
            first_player: Player::O,
            strategy: SearchStrategy::default(),
            parallel: false,
        }
    }
}

/// Game state and runtime info
#[derive(Clone)]
pub struct GameState {
    board: Board,
    turn: Player,
    move_history: Vec<usize>,
}

impl GameState {
    fn new(starting_position: Board, first_player: Player) -> Self {
        Self {
            board: starting_position,
            turn: starting_position.next_player(first_player),
            move_history: Vec::new(),
        }
    }
}

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid move: {error}")]
    BoardError { error: BoardError },
    #[error("The game is already over")]
    GameOver,
    #[error("Search error: no available moves")]
    NoAvailableMoves,
}

/// Owns the authoritative board and applies moves from either the human or the search.
pub struct Engine {
    state: GameState,
    search_context: SearchContext,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            state: GameState::new(config.starting_position, config.first_player),
            search_context: SearchContext::with_strategy(config.strategy, config.parallel),
        }
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn turn(&self) -> Player {
        self.state.turn
    }

    pub fn status(&self) -> GameStatus {
        evaluate::game_status(&self.state.board)
    }

    pub fn check_game_over(&self) -> Option<GameStatus> {
        Some(self.status()).filter(GameStatus::is_over)
    }

    pub fn get_valid_moves(&self) -> Vec<usize> {
        if self.check_game_over().is_some() {
            return Vec::new();
        }
        self.state.board.empty_cells().collect()
    }

    pub fn last_move(&self) -> Option<usize> {
        self.state.move_history.last().copied()
    }

    pub fn move_history(&self) -> &[usize] {
        &self.state.move_history
    }

    /// Marks `index` for the player to move.
    pub fn make_move(&mut self, index: usize) -> Result<usize, EngineError> {
        if self.check_game_over().is_some() {
            return Err(EngineError::GameOver);
        }

        let mover = self.state.turn;
        self.state
            .board
            .put(index, mover)
            .map_err(|error| EngineError::BoardError { error })?;

        info!("{} plays {}", mover, cell_name(index));
        self.finish_turn(index);
        Ok(index)
    }

    /// Searches for the best cell for the player to move without playing it.
    pub fn get_best_move(&mut self) -> Result<usize, EngineError> {
        let best_move = self.search()?;
        self.state
            .board
            .changed_cell(&best_move)
            .ok_or(EngineError::NoAvailableMoves)
    }

    /// Searches and adopts the chosen successor as the new board.
    pub fn make_best_move(&mut self) -> Result<usize, EngineError> {
        let best_move = self.search()?;
        let index = self
            .state
            .board
            .changed_cell(&best_move)
            .ok_or(EngineError::NoAvailableMoves)?;

        info!(
            "{} plays {} (utility {:?}, {} nodes visited)",
            self.state.turn,
            cell_name(index),
            self.search_context.last_score(),
            self.search_context.searched_position_count()
        );
        self.state.board = best_move;
        self.finish_turn(index);
        Ok(index)
    }

    pub fn make_move_from_input(&mut self, input: MoveInput) -> Result<usize, EngineError> {
        match input {
            MoveInput::Cell { index } => self.make_move(index),
            MoveInput::UseEngine => self.make_best_move(),
        }
    }

    pub fn get_search_stats(&self) -> SearchStats {
        SearchStats {
            positions_searched: self.search_context.searched_position_count(),
            last_score: self.search_context.last_score(),
            last_search_duration: self.search_context.last_search_duration(),
        }
    }

    // Private helper methods

    fn search(&mut self) -> Result<Board, EngineError> {
        if self.check_game_over().is_some() {
            return Err(EngineError::GameOver);
        }

        let outcome = self
            .search_context
            .search(&self.state.board, self.state.turn);
        debug!("search outcome: {:?}", outcome);

        outcome.best_move.ok_or(EngineError::NoAvailableMoves)
    }

    fn finish_turn(&mut self, index: usize) {
        self.state.move_history.push(index);
        self.state.turn = self.state.turn.opposite();
    }
}

/// Search performance statistics
#[derive(Debug, Clone)]
pub struct SearchStats {
    pub positions_searched: usize,
    pub last_score: Option<i32>,
    pub last_search_duration: Option<Duration>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;
    use crate::evaluate::BASE_SCORE;
    use crate::tictactoe_position;

    #[test]
    fn test_turn_follows_first_player() {
        let engine = Engine::with_config(EngineConfig {
            first_player: Player::X,
            ..EngineConfig::default()
        });
        assert_eq!(Player::X, engine.turn());
        assert_eq!(None, engine.check_game_over());
        assert_eq!(9, engine.get_valid_moves().len());
    }

    #[test]
    fn test_turn_derived_from_starting_position() {
        let starting_position = tictactoe_position! {
            X..
            ...
            ...
        };
        let engine = Engine::with_config(EngineConfig {
            starting_position,
            first_player: Player::X,
            ..EngineConfig::default()
        });
        assert_eq!(Player::O, engine.turn());
    }

    #[test]
    fn test_make_move_alternates_turns() {
        let mut engine = Engine::new();
        assert_eq!(4, engine.make_move(4).unwrap());
        assert_eq!(Cell::O, engine.board().get(4));
        assert_eq!(Player::X, engine.turn());
        assert_eq!(Some(4), engine.last_move());

        engine.make_move(0).unwrap();
        assert_eq!(Cell::X, engine.board().get(0));
        assert_eq!(vec![4, 0], engine.move_history().to_vec());
    }

    #[test]
    fn test_make_move_on_occupied_cell() {
        let mut engine = Engine::new();
        engine.make_move(4).unwrap();

        let result = engine.make_move(4);
        assert!(matches!(
            result,
            Err(EngineError::BoardError {
                error: BoardError::CellOccupiedBoardPutError { index: 4 }
            })
        ));
        // the failed move does not pass the turn
        assert_eq!(Player::X, engine.turn());
    }

    #[test]
    fn test_make_move_off_the_board() {
        let mut engine = Engine::new();
        assert!(matches!(
            engine.make_move(9),
            Err(EngineError::BoardError {
                error: BoardError::CellOutOfRangeError { index: 9 }
            })
        ));
    }

    #[test]
    fn test_best_move_takes_win() {
        let starting_position = tictactoe_position! {
            XX.
            OO.
            ...
        };
        let mut engine = Engine::with_config(EngineConfig {
            starting_position,
            first_player: Player::X,
            ..EngineConfig::default()
        });
        assert_eq!(Player::X, engine.turn());

        assert_eq!(2, engine.get_best_move().unwrap());
        // searching alone does not play the move
        assert_eq!(Cell::Empty, engine.board().get(2));

        assert_eq!(2, engine.make_best_move().unwrap());
        assert_eq!(Some(GameStatus::Win(Player::X)), engine.check_game_over());

        let stats = engine.get_search_stats();
        assert_eq!(Some(BASE_SCORE - 1), stats.last_score);
        assert!(stats.positions_searched > 0);
        assert!(stats.last_search_duration.is_some());
    }

    #[test]
    fn test_moves_rejected_after_game_over() {
        let starting_position = tictactoe_position! {
            XXX
            OO.
            ...
        };
        let mut engine = Engine::with_config(EngineConfig {
            starting_position,
            ..EngineConfig::default()
        });

        assert!(matches!(engine.make_move(5), Err(EngineError::GameOver)));
        assert!(matches!(engine.make_best_move(), Err(EngineError::GameOver)));
        assert!(engine.get_valid_moves().is_empty());
    }

    #[test]
    fn test_make_move_from_input() {
        let mut engine = Engine::new();
        engine
            .make_move_from_input(MoveInput::Cell { index: 0 })
            .unwrap();
        let index = engine.make_move_from_input(MoveInput::UseEngine).unwrap();
        assert_eq!(Cell::X, engine.board().get(index));
        assert_eq!(Player::O, engine.turn());
    }

    #[test]
    fn test_engine_vs_engine_draws() {
        for parallel in [false, true].iter() {
            let mut engine = Engine::with_config(EngineConfig {
                parallel: *parallel,
                ..EngineConfig::default()
            });
            while engine.check_game_over().is_none() {
                engine.make_best_move().unwrap();
            }
            assert_eq!(GameStatus::Draw, engine.status());
            assert_eq!(9, engine.move_history().len());
        }
    }
}
