//! Tic-tac-toe: game state, rules and the minimax opponent.

mod action;
mod game;
mod invariants;
mod position;
mod rules;
mod solver;
mod types;

pub use action::{Move, MoveError};
pub use game::GameState;
pub use invariants::{
    AlternatingTurnInvariant, Invariant, InvariantSet, InvariantViolation,
    MonotonicBoardInvariant, StatusConsistentInvariant, TicTacToeInvariants,
};
pub use position::Position;
pub use rules::{Win, WinLine, WIN_LINES, check_winner, is_draw, is_full};
pub use solver::{Solver, WIN_SCORE, best_move, minimax};
pub use types::{Board, BoardParseError, GameStatus, Player, Square, StatusSnapshot};

/// Alias for clarity where a player is referred to by the symbol it places.
pub type Mark = Player;
