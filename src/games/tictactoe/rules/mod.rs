//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are separated from board
//! storage so the game engine and the solver share one definition.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Win, WinLine, WIN_LINES, check_winner};
