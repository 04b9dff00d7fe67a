//! Tic-tac-toe rules engine.

mod action;
mod engine;
mod opponent;
mod outcome;
mod position;
pub mod rules;
mod scoreboard;
mod timer;
mod types;

pub use action::{Move, MoveError};
pub use engine::{COMPUTER, ComputerTurn, GameEngine, MoveReport, RestartReport, TickReport};
pub use opponent::{Difficulty, GameMode, RandomOpponent};
pub use outcome::{Outcome, PlayerNames};
pub use position::{Position, Step};
pub use scoreboard::{History, HistoryEntry, Scoreboard};
pub use timer::{DEFAULT_TURN_SECONDS, TurnTimer, format_clock};
pub use types::{Board, GameStatus, Player, Square};
