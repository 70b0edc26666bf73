//! Strictly Tic-Tac-Toe - Unified CLI
//!
//! Interactive play plus solver utilities.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use strictly_tictactoe::{
    Board, ComputerPlayer, ConsolePlayer, GameMode, HumanPlayer, Orchestrator, PlayConfig, Player,
    Solver, print_events, spawn_stdin_reader,
};
use tokio::sync::mpsc;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            mode,
            computer_mark,
            delay_ms,
            no_pruning,
        } => {
            let config = load_play_config(&config, mode, computer_mark, delay_ms, no_pruning)?;
            run_play(config).await
        }
        Command::Selfplay { json } => run_selfplay(json).await,
        Command::BestMove { board, mark, json } => run_best_move(&board, mark, json),
        Command::Analyze { board, mark } => run_analyze(&board, mark),
    }
}

/// Play an interactive game on stdin/stdout
#[instrument(skip(config))]
async fn run_play(config: PlayConfig) -> Result<()> {
    info!(mode = config.mode().name(), "Starting interactive game");
    println!("{}", config.mode().name());

    let input = spawn_stdin_reader();
    let solver = Solver::with_pruning(*config.pruning());

    let (player_x, player_o): (Box<dyn ConsolePlayer>, Box<dyn ConsolePlayer>) =
        match config.mode() {
            GameMode::Pvp => {
                let x: Box<dyn ConsolePlayer> =
                    Box::new(HumanPlayer::new("Player X", input.clone()));
                let o: Box<dyn ConsolePlayer> = Box::new(HumanPlayer::new("Player O", input));
                (x, o)
            }
            GameMode::Computer => {
                let human: Box<dyn ConsolePlayer> = Box::new(HumanPlayer::new("You", input));
                let computer: Box<dyn ConsolePlayer> = Box::new(ComputerPlayer::new(
                    "Computer",
                    solver,
                    config.computer_delay(),
                ));
                match config.computer_mark() {
                    Player::X => (computer, human),
                    Player::O => (human, computer),
                }
            }
        };

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let printer = tokio::spawn(print_events(event_rx));

    let mut orchestrator = Orchestrator::new(player_x, player_o, event_tx);
    let result = orchestrator.run().await;
    drop(orchestrator);
    printer.await?;

    let game = result?;
    info!(moves = game.history().len(), "Session finished");
    Ok(())
}

/// Solver against itself from an empty board
#[instrument]
async fn run_selfplay(json: bool) -> Result<()> {
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let printer = (!json).then(|| tokio::spawn(print_events(event_rx)));

    let mut orchestrator = Orchestrator::new(
        Box::new(ComputerPlayer::new("Solver X", Solver::new(), Default::default())),
        Box::new(ComputerPlayer::new("Solver O", Solver::new(), Default::default())),
        event_tx,
    );
    let game = orchestrator.run().await?;
    drop(orchestrator);
    if let Some(printer) = printer {
        printer.await?;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&game)?);
    } else {
        let moves: Vec<String> = game
            .history()
            .iter()
            .map(|m| m.position.to_index().to_string())
            .collect();
        println!("Moves: {}", moves.join(" "));
    }
    Ok(())
}

/// Print the solver's choice for one board
#[instrument]
fn run_best_move(board: &str, mark: Player, json: bool) -> Result<()> {
    let board = Board::parse(board)?;
    let position = Solver::new().best_move(&board, mark);

    if json {
        let value = serde_json::json!({
            "board": board.to_compact(),
            "mark": mark,
            "index": position.map(|p| p.to_index()),
            "position": position,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        match position {
            Some(pos) => println!("{} ({})", pos.to_index(), pos),
            None => println!("none (board is full)"),
        }
    }
    Ok(())
}

/// Print every legal move with its minimax score
#[instrument]
fn run_analyze(board: &str, mark: Player) -> Result<()> {
    let board = Board::parse(board)?;
    println!("{}\n", board.display());

    let scores = Solver::new().evaluate(&board, mark);
    if scores.is_empty() {
        println!("No legal moves");
    }
    for (pos, score) in scores {
        println!("{:>2}  {:<14} {:>4}", pos.to_index(), pos.label(), score);
    }

    if let Some(best) = Solver::new().best_move(&board, mark) {
        println!("\nBest for {}: {} ({})", mark, best.to_index(), best);
    }
    Ok(())
}

#[instrument(skip(path))]
fn load_play_config(
    path: &Path,
    mode: Option<GameMode>,
    computer_mark: Option<Player>,
    delay_ms: Option<u64>,
    no_pruning: bool,
) -> Result<PlayConfig> {
    let mut config = PlayConfig::load_or_default(path)
        .with_context(|| format!("Failed to load {}", path.display()))?;

    if let Some(mode) = mode {
        config = config.with_mode(mode);
    }
    if let Some(mark) = computer_mark {
        config = config.with_computer_mark(mark);
    }
    if let Some(delay_ms) = delay_ms {
        config = config.with_computer_delay_ms(delay_ms);
    }
    if no_pruning {
        config = config.with_pruning(false);
    }

    Ok(config)
}

fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
