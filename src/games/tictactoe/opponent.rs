//! Game mode settings and the computer opponent.

use super::{Board, Position};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Who plays O.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// Two people share the board.
    #[default]
    #[strum(to_string = "Player vs Player")]
    HumanVsHuman,
    /// X is a person, O is the computer.
    #[strum(to_string = "Player vs Computer")]
    HumanVsComputer,
}

impl GameMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            GameMode::HumanVsHuman => GameMode::HumanVsComputer,
            GameMode::HumanVsComputer => GameMode::HumanVsHuman,
        }
    }
}

/// Computer opponent difficulty.
///
/// Both settings currently pick uniformly at random.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    /// Uniform random.
    #[default]
    Easy,
    /// Uniform random as well.
    Hard,
}

impl Difficulty {
    /// The other difficulty.
    pub fn toggled(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}

/// Computer player that picks among open squares at random.
#[derive(Debug, Clone)]
pub struct RandomOpponent {
    rng: StdRng,
}

impl RandomOpponent {
    /// Creates an opponent.
    ///
    /// `Some(seed)` gives a reproducible sequence of choices; `None` seeds from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Picks one empty square, or `None` if the board is full.
    #[instrument(skip(self, board))]
    pub fn select_move(&mut self, board: &Board, difficulty: Difficulty) -> Option<Position> {
        let open = Position::valid_moves(board);
        // TODO: give Hard a minimax look-ahead.
        let choice = match difficulty {
            Difficulty::Easy | Difficulty::Hard => open.choose(&mut self.rng).copied(),
        };
        match choice {
            Some(pos) => debug!(position = %pos, open = open.len(), "Computer chose position"),
            None => warn!("Computer asked to move on a full board"),
        }
        choice
    }
}
