//! Command-line interface for timed_tictactoe.

use clap::{Args, Parser, Subcommand};
use timed_tictactoe::{ConfigOverrides, DEFAULT_CONFIG_FILE, Difficulty, GameMode};

/// Timed Tic-Tac-Toe - two players or one against the computer, with a turn clock
#[derive(Parser, Debug)]
#[command(name = "timed_tictactoe")]
#[command(about = "Tic-tac-toe with a turn timer, scoreboard and computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional; defaults apply when missing)
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Settings overriding the config file
        #[command(flatten)]
        settings: SettingsArgs,
    },

    /// Play computer against computer without a UI and print the results
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value = "10")]
        games: u32,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,

        /// Settings overriding the config file
        #[command(flatten)]
        settings: SettingsArgs,
    },
}

/// Game settings shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    /// Seconds allowed per turn
    #[arg(long)]
    pub turn_seconds: Option<u32>,

    /// Delay before the computer moves, in milliseconds
    #[arg(long)]
    pub computer_delay_ms: Option<u64>,

    /// Who plays O
    #[arg(long, value_enum)]
    pub mode: Option<GameMode>,

    /// Computer difficulty
    #[arg(long, value_enum)]
    pub difficulty: Option<Difficulty>,

    /// Display name for X
    #[arg(long)]
    pub player_x: Option<String>,

    /// Display name for O
    #[arg(long)]
    pub player_o: Option<String>,

    /// Seed for the computer's choices
    #[arg(long)]
    pub seed: Option<u64>,
}

impl From<SettingsArgs> for ConfigOverrides {
    fn from(args: SettingsArgs) -> Self {
        Self {
            turn_seconds: args.turn_seconds,
            computer_delay_ms: args.computer_delay_ms,
            mode: args.mode,
            difficulty: args.difficulty,
            player_x: args.player_x,
            player_o: args.player_o,
            seed: args.seed,
        }
    }
}
