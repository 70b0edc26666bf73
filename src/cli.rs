//! Command-line interface for strictly_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_tictactoe::{GameMode, Player};

/// Strictly Tic-Tac-Toe - play against a minimax opponent that never loses
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Tic-tac-toe with an unbeaten minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Path to play configuration
        #[arg(short, long, default_value = "tictactoe.toml")]
        config: PathBuf,

        /// Game mode (overrides config)
        #[arg(short, long, value_enum)]
        mode: Option<GameMode>,

        /// Mark played by the computer (overrides config)
        #[arg(long, value_parser = parse_mark)]
        computer_mark: Option<Player>,

        /// Milliseconds the computer waits before moving (overrides config)
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Search the full game tree without alpha-beta pruning
        #[arg(long)]
        no_pruning: bool,
    },

    /// Let the solver play both sides from an empty board
    Selfplay {
        /// Print the final game as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the solver's move for a board
    BestMove {
        /// Nine cells: X, O, or . _ - for empty (row-major)
        board: String,

        /// Mark to move
        #[arg(short, long, default_value = "X", value_parser = parse_mark)]
        mark: Player,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the minimax score of every legal move
    Analyze {
        /// Nine cells: X, O, or . _ - for empty (row-major)
        board: String,

        /// Mark to move
        #[arg(short, long, default_value = "X", value_parser = parse_mark)]
        mark: Player,
    },
}

fn parse_mark(s: &str) -> Result<Player, String> {
    match s.trim() {
        "X" | "x" => Ok(Player::X),
        "O" | "o" => Ok(Player::O),
        other => Err(format!("expected X or O, got '{}'", other)),
    }
}
