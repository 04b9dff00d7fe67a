//! Terminal outcomes and the display names they are reported with.

use super::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player completed a line.
    Won(Player),
    /// Board filled with no line.
    Draw,
    /// Player ran out of time; the opponent is credited with the win.
    TimedOut(Player),
}

impl Outcome {
    /// The player credited with a win, if any.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(*player),
            Outcome::TimedOut(loser) => Some(loser.opponent()),
            Outcome::Draw => None,
        }
    }

    /// Short record kept in the session history ("Ann wins", "Draw", "Bob timed out").
    #[instrument(skip(names))]
    pub fn record(&self, names: &PlayerNames) -> String {
        match self {
            Outcome::Won(player) => format!("{} wins", names.name(*player)),
            Outcome::Draw => "Draw".to_string(),
            Outcome::TimedOut(player) => format!("{} timed out", names.name(*player)),
        }
    }

    /// Message announced when the game ends.
    #[instrument(skip(names))]
    pub fn announcement(&self, names: &PlayerNames) -> String {
        match self {
            Outcome::Won(player) => format!("{} wins!", names.name(*player)),
            Outcome::Draw => "It's a draw!".to_string(),
            Outcome::TimedOut(player) => {
                let name = names.name(*player);
                format!("{name} took too long! {name} loses.")
            }
        }
    }
}

/// Optional display names for the two marks.
///
/// Unset or blank names fall back to "Player X" / "Player O".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerNames {
    x: Option<String>,
    o: Option<String>,
}

impl PlayerNames {
    /// Creates names for X and O.
    pub fn new(x: Option<String>, o: Option<String>) -> Self {
        let mut names = Self::default();
        names.set(Player::X, x);
        names.set(Player::O, o);
        names
    }

    /// Replaces one player's name. Blank names are stored as unset.
    pub fn set(&mut self, player: Player, name: Option<String>) {
        let name = name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        match player {
            Player::X => self.x = name,
            Player::O => self.o = name,
        }
    }

    /// Display name for a player.
    pub fn name(&self, player: Player) -> String {
        let custom = match player {
            Player::X => self.x.as_deref(),
            Player::O => self.o.as_deref(),
        };
        custom
            .map(str::to_string)
            .unwrap_or_else(|| format!("Player {player}"))
    }
}
