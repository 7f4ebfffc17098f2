use crate::board::Player;
use crate::game::display::GameDisplay;
use crate::game::engine::Engine;
use std::time::Duration;

pub const MOVE_PROMPT: &str =
    "Enter your move as `row col` (0-2), a cell like `b2`, or 1-9 (q to quit):";

pub trait GameRenderer {
    fn render(&self, ui: &mut GameDisplay, engine: &Engine, current_turn: Player);
    fn frame_delay(&self) -> Option<Duration>;
}

pub fn format_stats(engine: &Engine) -> String {
    let stats = engine.get_search_stats();
    format!(
        "* Score: {}\n* Positions searched: {}\n* Move took: {}",
        stats.last_score.map_or("-".to_string(), |s| s.to_string()),
        stats.positions_searched,
        stats
            .last_search_duration
            .map_or("-".to_string(), |d| format!("{:?}", d))
    )
}

pub struct StatsRenderer {
    pub delay_between_moves: Option<Duration>,
}

impl GameRenderer for StatsRenderer {
    fn render(&self, ui: &mut GameDisplay, engine: &Engine, current_turn: Player) {
        let stats_display = format_stats(engine);
        ui.render_game_state(
            engine.board(),
            current_turn,
            engine.last_move(),
            Some(&stats_display),
        );
    }

    fn frame_delay(&self) -> Option<Duration> {
        self.delay_between_moves
    }
}

pub struct ConditionalStatsRenderer {
    pub human_player: Player,
}

impl GameRenderer for ConditionalStatsRenderer {
    fn render(&self, ui: &mut GameDisplay, engine: &Engine, current_turn: Player) {
        let stats_display = format_stats(engine);
        ui.render_game_state(
            engine.board(),
            current_turn,
            engine.last_move(),
            Some(&stats_display),
        );
        if current_turn == self.human_player && engine.check_game_over().is_none() {
            println!("{}", MOVE_PROMPT);
        }
    }

    fn frame_delay(&self) -> Option<Duration> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_before_any_search() {
        let engine = Engine::new();
        assert_eq!(
            "* Score: -\n* Positions searched: 0\n* Move took: -",
            format_stats(&engine)
        );
    }

    #[test]
    fn test_stats_after_search() {
        let mut engine = Engine::new();
        engine.make_best_move().unwrap();
        let stats = format_stats(&engine);
        assert!(stats.starts_with("* Score: 0\n"));
        assert!(!stats.contains("Move took: -"));
    }
}
