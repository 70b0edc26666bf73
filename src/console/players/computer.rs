//! Computer player backed by the minimax solver.

use super::{Player, PlayerAction};
use crate::games::tictactoe::{GameState, Solver};
use anyhow::Result;
use std::time::Duration;
use tracing::{debug, instrument};

/// Plays the solver's move after a short pause.
pub struct ComputerPlayer {
    name: String,
    solver: Solver,
    delay: Duration,
}

impl ComputerPlayer {
    /// Creates a computer player.
    pub fn new(name: impl Into<String>, solver: Solver, delay: Duration) -> Self {
        Self {
            name: name.into(),
            solver,
            delay,
        }
    }
}

#[async_trait::async_trait]
impl Player for ComputerPlayer {
    #[instrument(skip_all, fields(player = %self.name))]
    async fn get_move(&mut self, game: &GameState) -> Result<PlayerAction> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let position = self
            .solver
            .best_move(game.board(), game.current_player())
            .ok_or_else(|| anyhow::anyhow!("No valid moves available"))?;

        debug!(position = %position, "Computer chose position");
        Ok(PlayerAction::Place(position.to_index()))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
