//! Timed Tic-Tac-Toe library - rules engine with turn timer and scoreboard
//!
//! The engine owns one session: the board, whose turn it is, a per-turn
//! countdown driven by external once-per-second ticks, session scores and
//! history, and a random computer opponent. Front ends (the bundled terminal
//! UI, the headless simulator, tests) drive it through the same commands.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`] state machine (in progress, won, draw, timed out)
//! - **Rules**: win and draw detection over the eight fixed lines
//! - **Config**: [`GameConfig`] from TOML with command-line overrides
//!
//! # Example
//!
//! ```
//! use timed_tictactoe::{GameEngine, Player};
//!
//! let mut engine = GameEngine::default();
//! for index in [0, 1, 4, 2, 8] {
//!     engine.apply_move(index);
//! }
//! assert!(engine.check_win());
//! assert!(!engine.is_active());
//! assert_eq!(engine.scores().wins(Player::X), 1);
//! assert_eq!(engine.history()[0].text, "Player X wins");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod sim;

// Crate-level exports - Configuration
pub use config::{ConfigError, ConfigOverrides, DEFAULT_CONFIG_FILE, GameConfig};

// Crate-level exports - Headless play
pub use sim::{SimulationSummary, render_text, simulate};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, COMPUTER, ComputerTurn, DEFAULT_TURN_SECONDS, Difficulty, GameEngine, GameMode,
    GameStatus, History, HistoryEntry, Move, MoveError, MoveReport, Outcome, Player,
    PlayerNames, Position, RandomOpponent, RestartReport, Scoreboard, Square, Step, TickReport,
    TurnTimer, format_clock, rules,
};
