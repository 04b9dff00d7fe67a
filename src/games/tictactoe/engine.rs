//! The game engine: one owned instance holding the board, turn, timer,
//! scores and history for a session.
//!
//! The engine is driven entirely by calls from a front end, one at a time:
//! moves, once-per-second ticks, restarts and configuration changes. It
//! never sleeps or reads a clock. When the computer should move, the engine
//! hands out a [`ComputerTurn`] ticket; the front end waits however long it
//! likes and then passes the ticket back to [`GameEngine::play_computer_turn`].
//! A restart, a timeout or a mode change in the meantime invalidates it.

use super::action::{Move, MoveError};
use super::opponent::{Difficulty, GameMode, RandomOpponent};
use super::rules::{is_draw, is_full, winning_line};
use super::scoreboard::{History, HistoryEntry, Scoreboard};
use super::timer::TurnTimer;
use super::{Board, GameStatus, Outcome, Player, PlayerNames, Position, Square};
use crate::config::GameConfig;
use tracing::{debug, info, instrument, warn};

/// Mark the computer plays in human-vs-computer mode.
pub const COMPUTER: Player = Player::O;

/// Permission for one deferred computer move.
///
/// Only the most recently issued ticket is honoured, and only while the
/// game it was issued for is still running with the computer to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComputerTurn {
    generation: u64,
    moves_made: usize,
}

/// Result of a move request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    /// The move that was applied, `None` if the request was ignored.
    pub played: Option<Move>,
    /// Board after the request.
    pub board: Board,
    /// Whether the game still accepts moves.
    pub active: bool,
    /// Terminal outcome reached by this move.
    pub outcome: Option<Outcome>,
    /// Terminal announcement for display.
    pub message: Option<String>,
    /// Outcome added to the scoreboard by this move.
    pub score_delta: Option<Outcome>,
    /// Record appended to the history by this move.
    pub history_entry: Option<HistoryEntry>,
    /// Set when the computer should move next.
    pub computer_turn: Option<ComputerTurn>,
}

impl MoveReport {
    /// True if the move changed the board.
    pub fn applied(&self) -> bool {
        self.played.is_some()
    }
}

/// Result of a timer tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// Seconds left for the player to move.
    pub seconds_remaining: u32,
    /// True only on the tick that ran the clock out and ended the game.
    pub expired: bool,
}

/// Result of a restart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestartReport {
    /// The cleared board.
    pub board: Board,
    /// Always true after a restart.
    pub active: bool,
}

/// Tic-tac-toe session engine.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    status: GameStatus,
    timer: TurnTimer,
    mode: GameMode,
    difficulty: Difficulty,
    names: PlayerNames,
    scores: Scoreboard,
    history: History,
    message: Option<String>,
    opponent: RandomOpponent,
    generation: u64,
    pending: Option<ComputerTurn>,
}

impl GameEngine {
    /// Creates an engine with the first game ready and X to move.
    #[instrument(skip(config), fields(mode = %config.mode(), difficulty = %config.difficulty()))]
    pub fn new(config: &GameConfig) -> Self {
        debug!(turn_seconds = *config.turn_seconds(), "Creating game engine");
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            timer: TurnTimer::new(*config.turn_seconds()),
            mode: *config.mode(),
            difficulty: *config.difficulty(),
            names: PlayerNames::new(config.player_x().clone(), config.player_o().clone()),
            scores: Scoreboard::default(),
            history: History::default(),
            message: None,
            opponent: RandomOpponent::new(*config.seed()),
            generation: 0,
            pending: None,
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Commands
    // ─────────────────────────────────────────────────────────────

    /// Places the current player's mark at `index` (0-8).
    ///
    /// Requests that cannot be applied are ignored: the report comes back
    /// with `played: None` and nothing changes.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, index: usize) -> MoveReport {
        match self.try_apply_move(index) {
            Ok(report) => report,
            Err(e) => {
                debug!(error = %e, "Move ignored");
                self.unchanged()
            }
        }
    }

    /// Like [`apply_move`](Self::apply_move), but says why a move was refused.
    ///
    /// In human-vs-computer mode a request made while the computer is to
    /// move is refused with [`MoveError::WrongPlayer`]; the computer's mark
    /// is placed only through [`play_computer_turn`](Self::play_computer_turn).
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn try_apply_move(&mut self, index: usize) -> Result<MoveReport, MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.validate(position)?;
        if self.computer_to_move() {
            return Err(MoveError::WrongPlayer(self.current_player));
        }
        Ok(self.place(position))
    }

    /// Counts the turn timer down one second.
    ///
    /// When the count reaches zero the player to move loses on time. Ticks
    /// after the game has ended change nothing.
    #[instrument(level = "trace", skip(self))]
    pub fn tick(&mut self) -> TickReport {
        if !self.is_active() {
            return TickReport {
                seconds_remaining: self.timer.remaining(),
                expired: false,
            };
        }
        let expired = self.timer.tick() && self.on_timer_expired();
        TickReport {
            seconds_remaining: self.timer.remaining(),
            expired,
        }
    }

    /// Ends the game as a loss on time for the player to move.
    ///
    /// Returns `false` without touching anything if the game is already over,
    /// so an expiry racing a game-ending move is counted once.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn on_timer_expired(&mut self) -> bool {
        if !self.is_active() {
            debug!("Timer expiry after game end ignored");
            return false;
        }
        let loser = self.current_player;
        self.finish(Outcome::TimedOut(loser), GameStatus::TimedOut { loser });
        true
    }

    /// Clears the board for a new game. Scores and history are kept.
    ///
    /// Any outstanding computer ticket is cancelled and the timer refilled.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> RestartReport {
        self.board = Board::new();
        self.current_player = Player::X;
        self.status = GameStatus::InProgress;
        self.message = None;
        self.timer.reset();
        self.generation += 1;
        self.pending = None;
        info!(game = self.history.len() + 1, "Game restarted");
        RestartReport {
            board: self.board.clone(),
            active: true,
        }
    }

    /// Picks a random empty square for the computer without playing it.
    ///
    /// Returns `None` on a full board, which callers should never ask for.
    #[instrument(skip(self))]
    pub fn select_computer_move(&mut self) -> Option<Position> {
        self.opponent.select_move(&self.board, self.difficulty)
    }

    /// Plays the computer's deferred move.
    ///
    /// Returns `None` if the ticket is stale: the game was restarted or
    /// ended, the mode changed, or it is no longer the computer's turn.
    #[instrument(skip(self))]
    pub fn play_computer_turn(&mut self, ticket: ComputerTurn) -> Option<MoveReport> {
        if self.pending != Some(ticket)
            || ticket.moves_made != self.board.occupied()
            || !self.computer_to_move()
        {
            debug!(?ticket, pending = ?self.pending, "Stale computer turn ignored");
            return None;
        }
        self.pending = None;
        let position = self.select_computer_move()?;
        match self.validate(position) {
            Ok(()) => Some(self.place(position)),
            Err(e) => {
                warn!(error = %e, "Computer produced an unplayable move");
                None
            }
        }
    }

    /// Switches between human-vs-human and human-vs-computer immediately.
    ///
    /// Switching to the computer while O is to move returns a ticket for
    /// the computer's move; switching away cancels any outstanding ticket.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: GameMode) -> Option<ComputerTurn> {
        self.mode = mode;
        self.pending = None;
        info!(%mode, "Mode changed");
        self.issue_computer_turn()
    }

    /// Changes the computer's difficulty.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        info!(%difficulty, "Difficulty changed");
    }

    /// Sets or clears a display name. Blank names fall back to the default.
    #[instrument(skip(self))]
    pub fn set_player_name(&mut self, player: Player, name: Option<String>) {
        self.names.set(player, name);
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Session scores.
    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    /// Session history, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        self.history.entries()
    }

    /// The player to move (or who was to move when the game ended).
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Whether moves are accepted.
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Where the current game stands.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Seconds left for the player to move.
    pub fn seconds_remaining(&self) -> u32 {
        self.timer.remaining()
    }

    /// Seconds allowed per turn.
    pub fn turn_seconds(&self) -> u32 {
        self.timer.budget()
    }

    /// Current mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Current difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Display names.
    pub fn names(&self) -> &PlayerNames {
        &self.names
    }

    /// Announcement for the finished game, cleared on restart.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The line to highlight after a win.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        match self.status {
            GameStatus::Won { line, .. } => Some(line),
            _ => None,
        }
    }

    /// True if any line holds three identical marks.
    pub fn check_win(&self) -> bool {
        winning_line(&self.board).is_some()
    }

    /// True if the board is full and no line is complete.
    pub fn check_draw(&self) -> bool {
        is_draw(&self.board)
    }

    /// True when the game is running in human-vs-computer mode with O to move.
    pub fn computer_to_move(&self) -> bool {
        self.mode == GameMode::HumanVsComputer && self.current_player == COMPUTER && self.is_active()
    }

    // ─────────────────────────────────────────────────────────────
    //  Transitions
    // ─────────────────────────────────────────────────────────────

    fn validate(&self, position: Position) -> Result<(), MoveError> {
        if !self.is_active() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(position) {
            return Err(MoveError::SquareOccupied(position));
        }
        Ok(())
    }

    /// Applies a validated move and evaluates win, then draw.
    fn place(&mut self, position: Position) -> MoveReport {
        let played = Move::new(self.current_player, position);
        debug!(%played, "Placing mark");
        self.board.set(position, Square::Occupied(played.player));
        self.timer.reset();

        let ending = match winning_line(&self.board) {
            Some((winner, line)) => Some((Outcome::Won(winner), GameStatus::Won { winner, line })),
            None if is_full(&self.board) => Some((Outcome::Draw, GameStatus::Draw)),
            None => None,
        };

        let (outcome, history_entry, computer_turn) = match ending {
            Some((outcome, status)) => {
                let entry = self.finish(outcome, status);
                (Some(outcome), Some(entry), None)
            }
            None => {
                self.current_player = self.current_player.opponent();
                (None, None, self.issue_computer_turn())
            }
        };

        MoveReport {
            played: Some(played),
            board: self.board.clone(),
            active: self.is_active(),
            outcome,
            message: self.message.clone(),
            score_delta: outcome,
            history_entry,
            computer_turn,
        }
    }

    /// Moves to a terminal state and books the outcome exactly once.
    fn finish(&mut self, outcome: Outcome, status: GameStatus) -> HistoryEntry {
        self.status = status;
        self.pending = None;
        self.scores.record(outcome);
        self.message = Some(outcome.announcement(&self.names));
        let entry = self
            .history
            .push(outcome, outcome.record(&self.names))
            .clone();
        info!(?outcome, record = %entry, "Game over");
        entry
    }

    fn issue_computer_turn(&mut self) -> Option<ComputerTurn> {
        if !self.computer_to_move() {
            return None;
        }
        let ticket = ComputerTurn {
            generation: self.generation,
            moves_made: self.board.occupied(),
        };
        self.pending = Some(ticket);
        debug!(?ticket, "Computer turn scheduled");
        Some(ticket)
    }

    fn unchanged(&self) -> MoveReport {
        MoveReport {
            played: None,
            board: self.board.clone(),
            active: self.is_active(),
            outcome: None,
            message: self.message.clone(),
            score_delta: None,
            history_entry: None,
            computer_turn: None,
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
