//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::{HumanPlayer, InputLines, parse_action, spawn_line_reader, spawn_stdin_reader};

use crate::games::tictactoe::GameState;
use anyhow::Result;

/// What a player wants to do on their turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerAction {
    /// Place a mark at a board index (0-8).
    Place(usize),
    /// Start a fresh game.
    Restart,
    /// Leave the game.
    Quit,
    /// Input that could not be understood.
    Unrecognized(String),
}

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets this player's next action.
    async fn get_move(&mut self, game: &GameState) -> Result<PlayerAction>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Whether this player answers from the keyboard.
    fn is_human(&self) -> bool {
        false
    }
}
