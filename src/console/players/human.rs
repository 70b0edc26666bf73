//! Human player that reads commands from standard input.

use super::{Player, PlayerAction};
use crate::games::tictactoe::{GameState, Position};
use anyhow::Result;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::{Mutex, mpsc};
use tracing::{debug, instrument};

/// Lines of player input, shared by every human seat at the keyboard.
pub type InputLines = Arc<Mutex<mpsc::UnboundedReceiver<String>>>;

/// Spawns a task forwarding lines from `reader` into a shared channel.
///
/// The channel closes when the reader hits end of input.
pub fn spawn_line_reader<R>(reader: R) -> InputLines
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        let mut lines = reader.lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to read input");
                    break;
                }
            }
        }
        debug!("Input reader finished");
    });
    Arc::new(Mutex::new(rx))
}

/// Spawns a thread forwarding lines typed on stdin.
///
/// Blocking reads live on a plain thread so a pending read never holds up
/// runtime shutdown.
pub fn spawn_stdin_reader() -> InputLines {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in std::io::stdin().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to read stdin");
                    break;
                }
            }
        }
    });
    Arc::new(Mutex::new(rx))
}

/// Human player using line input.
pub struct HumanPlayer {
    name: String,
    input: InputLines,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: InputLines) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }
}

/// Interprets one line of input.
///
/// Cells are 1-9 or a position label; `r`/`restart` and `q`/`quit`
/// are commands. Blank lines are unrecognized.
#[instrument]
pub fn parse_action(line: &str) -> PlayerAction {
    let trimmed = line.trim();
    match trimmed.to_lowercase().as_str() {
        "r" | "restart" => PlayerAction::Restart,
        "q" | "quit" | "exit" => PlayerAction::Quit,
        _ => match Position::from_label_or_number(trimmed) {
            Some(pos) => PlayerAction::Place(pos.to_index()),
            None => PlayerAction::Unrecognized(trimmed.to_string()),
        },
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    async fn get_move(&mut self, _game: &GameState) -> Result<PlayerAction> {
        let mut input = self.input.lock().await;
        match input.recv().await {
            Some(line) => Ok(parse_action(&line)),
            None => {
                debug!(player = %self.name, "Input closed");
                Ok(PlayerAction::Quit)
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_human(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_action() {
        assert_eq!(parse_action("5"), PlayerAction::Place(4));
        assert_eq!(parse_action("top-right"), PlayerAction::Place(2));
        assert_eq!(parse_action(" R "), PlayerAction::Restart);
        assert_eq!(parse_action("quit"), PlayerAction::Quit);
        assert_eq!(parse_action("42"), PlayerAction::Unrecognized("42".to_string()));
        assert_eq!(parse_action(""), PlayerAction::Unrecognized(String::new()));
    }

    #[tokio::test]
    async fn test_reads_lines_then_quits_at_end_of_input() {
        let input = spawn_line_reader(&b"1\nnope\n"[..]);
        let mut human = HumanPlayer::new("Alice", input);
        let game = GameState::new();

        assert_eq!(human.get_move(&game).await.unwrap(), PlayerAction::Place(0));
        assert_eq!(
            human.get_move(&game).await.unwrap(),
            PlayerAction::Unrecognized("nope".to_string())
        );
        assert_eq!(human.get_move(&game).await.unwrap(), PlayerAction::Quit);
    }
}
