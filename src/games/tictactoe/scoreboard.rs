//! Session score counters and the game-by-game history log.

use super::{Outcome, Player};
use serde::{Deserialize, Serialize};

/// Wins per mark and draws, accumulated across games in a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    wins_x: u32,
    wins_o: u32,
    draws: u32,
}

impl Scoreboard {
    /// Wins credited to X.
    pub fn wins_x(&self) -> u32 {
        self.wins_x
    }

    /// Wins credited to O.
    pub fn wins_o(&self) -> u32 {
        self.wins_o
    }

    /// Wins credited to a player.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.wins_x,
            Player::O => self.wins_o,
        }
    }

    /// Drawn games.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Games counted so far.
    pub fn games(&self) -> u32 {
        self.wins_x + self.wins_o + self.draws
    }

    /// Adds exactly one to the counter the outcome credits.
    pub(super) fn record(&mut self, outcome: Outcome) {
        match outcome.winner() {
            Some(Player::X) => self.wins_x += 1,
            Some(Player::O) => self.wins_o += 1,
            None => self.draws += 1,
        }
    }
}

/// One finished game in the session log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// 1-based game number within the session.
    pub game: u32,
    /// How the game ended.
    pub outcome: Outcome,
    /// Record text, formatted with the names in effect when the game ended.
    pub text: String,
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Append-only log of finished games.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Appends a record and returns it.
    pub(super) fn push(&mut self, outcome: Outcome, text: String) -> &HistoryEntry {
        let game = self.entries.len() as u32 + 1;
        self.entries.push(HistoryEntry {
            game,
            outcome,
            text,
        });
        &self.entries[self.entries.len() - 1]
    }

    /// All records, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True before the first game ends.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent record.
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }
}
