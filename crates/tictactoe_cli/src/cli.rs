//! Command-line interface for the tic-tac-toe game.

use crate::config::FirstPlayer;
use clap::{Args, Parser, Subcommand};

/// Play tic-tac-toe against a perfect minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a perfect minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional)
    #[arg(short, long, default_value = "tictactoe.toml", global = true)]
    pub config: std::path::PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options shared by the interactive modes.
#[derive(Args, Debug, Clone, Default)]
pub struct PlayArgs {
    /// Who moves first (overrides the config file)
    #[arg(long, value_enum)]
    pub first: Option<FirstPlayer>,

    /// Seed for the first-player coin flip
    #[arg(long)]
    pub seed: Option<u64>,

    /// Search root moves in parallel
    #[arg(long)]
    pub parallel: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the console, one line per move
    Play(PlayArgs),

    /// Play in a full-screen terminal UI
    Tui {
        /// Shared game options
        #[command(flatten)]
        args: PlayArgs,

        /// File receiving log output while the UI owns the terminal
        #[arg(long, default_value = "tictactoe_tui.log")]
        log_file: std::path::PathBuf,
    },

    /// Score every move for X on a given board
    Analyze {
        /// Board as 9 cells, e.g. "XX.|OO.|..."
        #[arg(long)]
        board: String,

        /// Search root moves in parallel
        #[arg(long)]
        parallel: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play(PlayArgs::default())
    }
}
