//! Headless computer-vs-computer play.
//!
//! Both marks are chosen by the engine's random opponent and fed back
//! through the same move command a person would use.

use crate::config::GameConfig;
use crate::games::tictactoe::{
    Board, GameEngine, GameMode, HistoryEntry, Player, PlayerNames, Scoreboard,
};
use anyhow::{Result, bail};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Results of a batch of games.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationSummary {
    /// Games played.
    pub games: u32,
    /// Final scores.
    pub scores: Scoreboard,
    /// One record per game.
    pub history: Vec<HistoryEntry>,
    /// Board as the last game left it.
    pub final_board: Board,
}

/// Plays `games` complete games and returns the session totals.
#[instrument(skip(config))]
pub fn simulate(config: &GameConfig, games: u32) -> Result<SimulationSummary> {
    let mut engine = GameEngine::new(config);
    // Both sides are driven from here.
    engine.set_mode(GameMode::HumanVsHuman);

    for game in 1..=games {
        if game > 1 {
            engine.restart();
        }
        while engine.is_active() {
            let Some(position) = engine.select_computer_move() else {
                bail!("No move available in an active game");
            };
            let report = engine.apply_move(position.to_index());
            if !report.applied() {
                bail!("Engine refused move {position} in game {game}");
            }
        }
        debug!(game, record = ?engine.history().last(), "Game finished");
    }

    let summary = SimulationSummary {
        games,
        scores: *engine.scores(),
        history: engine.history().to_vec(),
        final_board: engine.board().clone(),
    };
    info!(
        wins_x = summary.scores.wins_x(),
        wins_o = summary.scores.wins_o(),
        draws = summary.scores.draws(),
        "Simulation complete"
    );
    Ok(summary)
}

/// Renders a summary as plain text.
pub fn render_text(summary: &SimulationSummary, config: &GameConfig) -> String {
    let names = PlayerNames::new(config.player_x().clone(), config.player_o().clone());
    let mut out = format!(
        "{}: {}\n{}: {}\nDraws: {}\n\nHistory:\n",
        names.name(Player::X),
        summary.scores.wins_x(),
        names.name(Player::O),
        summary.scores.wins_o(),
        summary.scores.draws(),
    );
    for entry in &summary.history {
        out.push_str(&format!("{:>3}. {}\n", entry.game, entry));
    }
    if !summary.history.is_empty() {
        out.push_str(&format!("\nFinal board:\n{}\n", summary.final_board.display()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigOverrides;

    #[test]
    fn every_game_is_counted_once() {
        let config = GameConfig::default()
            .with_overrides(ConfigOverrides {
                seed: Some(3),
                ..Default::default()
            })
            .expect("valid overrides");
        let summary = simulate(&config, 25).expect("simulation runs");
        assert_eq!(summary.scores.games(), 25);
        assert_eq!(summary.history.len(), 25);
        assert_eq!(summary.history.last().map(|e| e.game), Some(25));
    }

    #[test]
    fn text_lists_history() {
        let config = GameConfig::default();
        let summary = simulate(&config, 2).expect("simulation runs");
        let text = render_text(&summary, &config);
        assert!(text.contains("Draws:"));
        assert!(text.contains("  1. "));
        assert!(text.contains("  2. "));
        assert!(text.contains("Final board:\n"));
        assert!(text.contains("-+-+-"));
    }

    #[test]
    fn final_board_matches_last_record() {
        let config = GameConfig::default()
            .with_overrides(ConfigOverrides {
                seed: Some(8),
                ..Default::default()
            })
            .expect("valid overrides");
        let summary = simulate(&config, 3).expect("simulation runs");
        assert!(summary.final_board.occupied() >= 5);
        let text = render_text(&summary, &config);
        assert!(text.ends_with(&format!("{}\n", summary.final_board.display())));
    }

    #[test]
    fn zero_games_has_no_board() {
        let config = GameConfig::default();
        let summary = simulate(&config, 0).expect("simulation runs");
        assert!(!render_text(&summary, &config).contains("Final board"));
    }
}
