//! Application state and logic.

use super::input::Action;
use std::time::Duration;
use timed_tictactoe::{ComputerTurn, GameConfig, GameEngine, GameMode, MoveReport, Position};
use tracing::debug;

/// What the event loop must do after the app handled an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Effects {
    /// Restart the one-second clock phase (a move or restart refilled the timer).
    pub reset_clock: bool,
    /// Schedule this computer move after the configured delay.
    pub computer_turn: Option<ComputerTurn>,
}

impl Effects {
    fn from_report(report: &MoveReport) -> Self {
        Self {
            reset_clock: report.applied(),
            computer_turn: report.computer_turn,
        }
    }
}

/// Main application state.
pub struct App {
    engine: GameEngine,
    cursor: Position,
    computer_delay: Duration,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(config: &GameConfig) -> Self {
        let engine = GameEngine::new(config);
        let status_message = turn_prompt(&engine);
        Self {
            engine,
            cursor: Position::Center,
            computer_delay: Duration::from_millis(*config.computer_delay_ms()),
            status_message,
            should_quit: false,
        }
    }

    /// The engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Pause before scheduled computer moves.
    pub fn computer_delay(&self) -> Duration {
        self.computer_delay
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True after the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a user action.
    pub fn handle_action(&mut self, action: Action) -> Effects {
        debug!(?action, "Handling action");
        match action {
            Action::Cursor(step) => {
                self.cursor = self.cursor.step(step);
                Effects::default()
            }
            Action::Place => self.place(self.cursor.to_index()),
            Action::PlaceAt(index) => {
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                self.place(index)
            }
            Action::Restart => self.restart(),
            Action::ToggleMode => {
                let turn = self.engine.set_mode(self.engine.mode().toggled());
                self.status_message =
                    format!("Switched to {}. {}", self.engine.mode(), turn_prompt(&self.engine));
                Effects {
                    reset_clock: false,
                    computer_turn: turn,
                }
            }
            Action::ToggleDifficulty => {
                if self.engine.mode() == GameMode::HumanVsComputer {
                    self.engine.set_difficulty(self.engine.difficulty().toggled());
                    self.status_message =
                        format!("Computer difficulty: {}", self.engine.difficulty());
                } else {
                    debug!("Difficulty toggle ignored without a computer opponent");
                }
                Effects::default()
            }
            Action::Quit => {
                self.should_quit = true;
                Effects::default()
            }
        }
    }

    /// Handles a one-second clock tick.
    pub fn tick(&mut self) {
        let report = self.engine.tick();
        if report.expired {
            self.refresh_status();
        }
    }

    /// Plays a computer move whose delay has elapsed.
    pub fn computer_turn(&mut self, ticket: ComputerTurn) -> Effects {
        match self.engine.play_computer_turn(ticket) {
            Some(report) => {
                self.refresh_status();
                Effects::from_report(&report)
            }
            None => Effects::default(),
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) -> Effects {
        self.engine.restart();
        self.status_message = format!("Game restarted. {}", turn_prompt(&self.engine));
        Effects {
            reset_clock: true,
            computer_turn: None,
        }
    }

    fn place(&mut self, index: usize) -> Effects {
        let report = self.engine.apply_move(index);
        if report.applied() {
            self.refresh_status();
        }
        Effects::from_report(&report)
    }

    fn refresh_status(&mut self) {
        self.status_message = match self.engine.message() {
            Some(message) => format!("{} Press 'r' to restart or 'q' to quit.", message),
            None => turn_prompt(&self.engine),
        };
    }
}

fn turn_prompt(engine: &GameEngine) -> String {
    if !engine.is_active() {
        return engine.message().unwrap_or_default().to_string();
    }
    let name = engine.names().name(engine.current_player());
    if engine.computer_to_move() {
        format!("{} is thinking...", name)
    } else {
        format!("{}'s turn", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use timed_tictactoe::{ConfigOverrides, Difficulty, Player, Step};

    fn computer_config() -> GameConfig {
        GameConfig::default()
            .with_overrides(ConfigOverrides {
                mode: Some(GameMode::HumanVsComputer),
                seed: Some(11),
                ..Default::default()
            })
            .expect("valid overrides")
    }

    #[test]
    fn human_move_schedules_computer() {
        let mut app = App::new(&computer_config());
        let effects = app.handle_action(Action::PlaceAt(4));
        assert!(effects.reset_clock);
        let ticket = effects.computer_turn.expect("computer should be scheduled");
        assert_eq!(app.status_message(), "Player O is thinking...");

        let effects = app.computer_turn(ticket);
        assert!(effects.reset_clock);
        assert_eq!(app.engine().current_player(), Player::X);
        assert_eq!(app.engine().board().occupied(), 2);
    }

    #[test]
    fn restart_drops_scheduled_computer_move() {
        let mut app = App::new(&computer_config());
        let ticket = app
            .handle_action(Action::PlaceAt(0))
            .computer_turn
            .expect("computer should be scheduled");
        app.handle_action(Action::Restart);
        assert_eq!(app.computer_turn(ticket), Effects::default());
        assert_eq!(app.engine().board().occupied(), 0);
    }

    #[test]
    fn cursor_place_uses_cursor_cell() {
        let mut app = App::new(&GameConfig::default());
        app.handle_action(Action::Cursor(Step::Up));
        app.handle_action(Action::Place);
        assert_eq!(app.engine().board().occupied(), 1);
        assert!(!app.engine().board().is_empty(Position::TopCenter));
        assert_eq!(app.status_message(), "Player O's turn");
    }

    #[test]
    fn difficulty_toggles_only_against_computer() {
        let mut app = App::new(&GameConfig::default());
        let before = app.status_message().to_string();
        app.handle_action(Action::ToggleDifficulty);
        assert_eq!(app.engine().difficulty(), Difficulty::Easy);
        assert_eq!(app.status_message(), before);

        let mut app = App::new(&computer_config());
        app.handle_action(Action::ToggleDifficulty);
        assert_eq!(app.engine().difficulty(), Difficulty::Hard);
        assert_eq!(app.status_message(), "Computer difficulty: Hard");
    }

    #[test]
    fn quit_sets_flag() {
        let mut app = App::new(&GameConfig::default());
        app.handle_action(Action::Quit);
        assert!(app.should_quit());
    }
}
