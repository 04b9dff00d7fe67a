//! Per-turn countdown.
//!
//! The timer holds no clock of its own. Something outside calls
//! [`TurnTimer::tick`] once per second; the timer counts down and latches
//! `expired` when it reaches zero, after which ticks are ignored until
//! [`TurnTimer::reset`].

use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Default seconds allowed per turn.
pub const DEFAULT_TURN_SECONDS: u32 = 30;

/// Countdown for the player to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnTimer {
    budget: u32,
    remaining: u32,
    expired: bool,
}

impl TurnTimer {
    /// Creates a full timer with the given budget. A zero budget is raised to one second.
    pub fn new(budget: u32) -> Self {
        let budget = budget.max(1);
        Self {
            budget,
            remaining: budget,
            expired: false,
        }
    }

    /// Seconds per turn.
    pub fn budget(&self) -> u32 {
        self.budget
    }

    /// Seconds left for the current turn.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Refills the countdown and clears the expired latch.
    pub fn reset(&mut self) {
        self.remaining = self.budget;
        self.expired = false;
    }

    /// Counts down one second.
    ///
    /// Returns `true` only on the tick that reaches zero.
    #[instrument(level = "trace", skip(self), fields(remaining = self.remaining))]
    pub fn tick(&mut self) -> bool {
        if self.expired {
            return false;
        }
        self.remaining = self.remaining.saturating_sub(1);
        trace!(remaining = self.remaining, "Timer tick");
        if self.remaining == 0 {
            self.expired = true;
            return true;
        }
        false
    }
}

impl Default for TurnTimer {
    fn default() -> Self {
        Self::new(DEFAULT_TURN_SECONDS)
    }
}

/// Formats seconds as zero-padded `MM:SS`.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
