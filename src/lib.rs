//! Strictly Tic-Tac-Toe - a tic-tac-toe engine with an unbeaten opponent
//!
//! # Architecture
//!
//! - **Game state**: board, player to move and status, changed only by
//!   [`GameState::reset`] and [`GameState::place`]
//! - **Solver**: full-depth minimax returning the optimal square for a mark
//! - **Console**: terminal front end driving the game through the same
//!   public interface any UI would use
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameState, GameStatus, Player, best_move};
//!
//! let mut game = GameState::new();
//! game.place(4);
//!
//! let reply = best_move(game.board(), game.current_player()).unwrap();
//! let snapshot = game.place(reply.to_index());
//!
//! assert_eq!(snapshot.current_player, Player::X);
//! assert_eq!(snapshot.status, GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, PlayConfig};

// Crate-level exports - Console front end
pub use console::{
    ComputerPlayer, GameEvent, GameMode, HumanPlayer, InputLines, Orchestrator, Player as ConsolePlayer,
    PlayerAction, parse_action, print_events, render_board, render_event, spawn_line_reader,
    spawn_stdin_reader,
};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    AlternatingTurnInvariant, Board, BoardParseError, GameState, GameStatus, Invariant,
    InvariantSet, InvariantViolation, Mark, MonotonicBoardInvariant, Move, MoveError, Player,
    Position, Solver, Square, StatusConsistentInvariant, StatusSnapshot, TicTacToeInvariants,
    WIN_LINES, WIN_SCORE, Win, WinLine, best_move, check_winner, is_draw, is_full, minimax,
};
