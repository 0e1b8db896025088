//! Terminal front end for the minimax tic-tac-toe engine.
//!
//! # Architecture
//!
//! - **Cli / Config**: clap arguments layered over an optional TOML file
//! - **Players**: a console human and the minimax engine behind one trait
//! - **Orchestrator**: the line-based turn loop
//! - **Tui**: a ratatui board driven by the same engine

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod error;
mod input;
mod logging;
mod orchestrator;
mod players;
mod tui;

pub use cli::{Cli, Command, PlayArgs};
pub use config::{ConfigError, FirstPlayer, GameConfig};
pub use error::InputError;
pub use input::{move_cursor, parse_move};
pub use logging::{init_file_tracing, init_stderr_tracing};
pub use orchestrator::{Orchestrator, result_message};
pub use players::{HumanPlayer, MinimaxPlayer, Player};
pub use tui::{App, AppAction, run_tui};
