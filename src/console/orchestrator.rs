//! Game orchestration between players.

use super::players::{Player, PlayerAction};
use crate::games::tictactoe::{GameState, Mark, Position, StatusSnapshot};
use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Messages sent from orchestrator to UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Game state updated.
    StateChanged(StatusSnapshot),
    /// The computer is choosing a move.
    ComputerThinking {
        /// Name of the computer player.
        player: String,
    },
    /// Move was made.
    MoveMade {
        /// Name of the player who moved.
        player: String,
        /// Mark placed.
        mark: Mark,
        /// Where it was placed.
        position: Position,
    },
    /// A placement was refused; the same player moves again.
    MoveRejected {
        /// Why the placement was refused.
        reason: String,
    },
    /// Input was not a cell or a command.
    InputRejected(String),
    /// The board was cleared.
    Restarted,
    /// Game ended.
    GameOver {
        /// Name of the winner, `None` for a draw.
        winner: Option<String>,
    },
}

/// Orchestrates gameplay between two players.
///
/// The orchestrator owns the [`GameState`]; players only see it through a
/// shared reference when asked for their move.
pub struct Orchestrator {
    game: GameState,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            game: GameState::new(),
            player_x,
            player_o,
            event_tx,
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Runs the game loop until a player quits, or until the game ends
    /// when nobody at the table is human.
    ///
    /// Returns the final game state.
    #[instrument(skip(self), fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub async fn run(&mut self) -> Result<GameState> {
        info!("Starting game orchestration");
        self.emit(GameEvent::StateChanged(self.game.snapshot()));

        loop {
            // After the game ends, only a human can restart or quit.
            let seat = if self.game.status().is_over() {
                match self.human_seat() {
                    Some(seat) => seat,
                    None => return Ok(self.game.clone()),
                }
            } else {
                self.game.current_player()
            };

            let player = match seat {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };
            let player_name = player.name().to_string();

            if !player.is_human() {
                self.event_tx
                    .send(GameEvent::ComputerThinking {
                        player: player_name.clone(),
                    })
                    .ok();
            }

            debug!(player = %player_name, "Waiting for move");
            let action = player.get_move(&self.game).await?;

            match action {
                PlayerAction::Place(index) => self.apply(index, seat, player_name),
                PlayerAction::Restart => self.restart(),
                PlayerAction::Quit => {
                    info!(player = %player_name, "Player quit");
                    return Ok(self.game.clone());
                }
                PlayerAction::Unrecognized(input) => {
                    self.emit(GameEvent::InputRejected(input));
                }
            }
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        self.game.reset();
        self.emit(GameEvent::Restarted);
        self.emit(GameEvent::StateChanged(self.game.snapshot()));
    }

    fn apply(&mut self, index: usize, mark: Mark, player_name: String) {
        let snapshot = match self.game.try_place(index) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                debug!(error = %e, "Move rejected");
                self.emit(GameEvent::MoveRejected {
                    reason: e.to_string(),
                });
                return;
            }
        };

        if let Some(position) = Position::from_index(index) {
            self.emit(GameEvent::MoveMade {
                player: player_name,
                mark,
                position,
            });
        }
        self.emit(GameEvent::StateChanged(snapshot));

        if snapshot.status.is_over() {
            let winner = snapshot.status.winner().map(|mark| self.name_of(mark).to_string());
            info!(winner = ?winner, "Game over");
            self.emit(GameEvent::GameOver { winner });
        }
    }

    fn human_seat(&self) -> Option<Mark> {
        if self.player_x.is_human() {
            Some(Mark::X)
        } else if self.player_o.is_human() {
            Some(Mark::O)
        } else {
            None
        }
    }

    fn name_of(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => self.player_x.name(),
            Mark::O => self.player_o.name(),
        }
    }

    fn emit(&self, event: GameEvent) {
        if self.event_tx.send(event).is_err() {
            debug!("Event receiver dropped");
        }
    }
}
