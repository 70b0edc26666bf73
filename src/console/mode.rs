//! Game mode selection.

use serde::{Deserialize, Serialize};

/// Game mode - who is the opponent?
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Two humans sharing the keyboard.
    Pvp,
    /// Human against the minimax solver.
    #[default]
    Computer,
}

impl GameMode {
    /// Returns display name.
    pub fn name(&self) -> &str {
        match self {
            GameMode::Pvp => "Human vs Human",
            GameMode::Computer => "Human vs Computer",
        }
    }
}
