//! Tic-tac-toe against a minimax opponent.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use tictactoe_cli::{
    Cli, Command, GameConfig, HumanPlayer, MinimaxPlayer, Orchestrator, PlayArgs,
    init_file_tracing, init_stderr_tracing, result_message, run_tui,
};
use tictactoe_core::{Board, Minimax};
use tracing::{info, instrument};

/// Filter applied when neither `RUST_LOG` nor the config sets one.
const DEFAULT_LOG_FILTER: &str = "warn";

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load_or_default(&cli.config)?;
    let filter = config
        .log_filter()
        .clone()
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    match cli.command.unwrap_or_default() {
        Command::Play(args) => {
            init_stderr_tracing(&filter);
            run_console(config, args)
        }
        Command::Tui { args, log_file } => {
            init_file_tracing(&log_file, &filter)?;
            let config = config.with_overrides(args.first, args.seed);
            run_tui(config.first_side())
        }
        Command::Analyze { board, parallel } => {
            init_stderr_tracing(&filter);
            run_analyze(&board, parallel)
        }
    }
}

/// Play one game on stdin/stdout.
#[instrument(skip_all)]
fn run_console(config: GameConfig, args: PlayArgs) -> Result<()> {
    let config = config.with_overrides(args.first, args.seed);
    let first = config.first_side();
    info!(%first, parallel = args.parallel, "Starting console game");

    let human = HumanPlayer::new("Human", io::stdin().lock(), io::stdout());
    let ai = MinimaxPlayer::new("AI").parallel(args.parallel);
    let mut orchestrator = Orchestrator::new(Box::new(human), Box::new(ai), first, io::stdout());
    orchestrator.run()?;
    Ok(())
}

/// Print the score of every move for the engine on `board`.
#[instrument]
fn run_analyze(board: &str, parallel: bool) -> Result<()> {
    let mut board: Board = board
        .parse()
        .with_context(|| format!("Invalid board '{}'", board))?;
    let engine = Minimax::new();

    let mut out = io::stdout().lock();
    writeln!(out, "{}\n", board)?;

    if board.is_terminal() {
        writeln!(out, "{}", result_message(board.outcome()))?;
        return Ok(());
    }

    for score in engine.move_scores(&mut board) {
        writeln!(out, "move {}: {:+}", score.position, score.score)?;
    }

    let best = if parallel {
        engine.best_move_parallel(&board)
    } else {
        engine.search(&mut board).best_move
    };
    match best {
        Some(position) => writeln!(out, "\nbest move for {}: {}", engine.ai_mark(), position)?,
        None => writeln!(out, "\nno move available")?,
    }
    Ok(())
}
