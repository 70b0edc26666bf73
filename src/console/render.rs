//! Text rendering of boards and game events.

use super::orchestrator::GameEvent;
use crate::games::tictactoe::{GameStatus, Position, Square, StatusSnapshot};
use tokio::sync::mpsc;

const PROMPT: &str = "Enter a cell (1-9), r to restart, q to quit";

/// Draws the board as a 3x3 grid.
///
/// Empty squares show their cell number; squares on a winning line are
/// wrapped in brackets.
pub fn render_board(snapshot: &StatusSnapshot) -> String {
    let line = match snapshot.status {
        GameStatus::Won { line, .. } => Some(line),
        _ => None,
    };

    let rows: Vec<String> = (0..3)
        .map(|row| {
            (0..3)
                .map(|col| {
                    let index = row * 3 + col;
                    let pos = Position::ALL[index];
                    let symbol = match snapshot.board.get(pos) {
                        Square::Empty => (index + 1).to_string(),
                        Square::Occupied(player) => player.to_string(),
                    };
                    if line.is_some_and(|l| l.contains(pos)) {
                        format!("[{}]", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();

    rows.join("\n---+---+---\n")
}

/// Text printed for one event, or `None` if the event is silent.
pub fn render_event(event: &GameEvent) -> Option<String> {
    match event {
        GameEvent::StateChanged(snapshot) => {
            let mut out = format!("\n{}\n\n{}", render_board(snapshot), snapshot.message());
            if !snapshot.status.is_over() {
                out.push_str(&format!("\n{}", PROMPT));
            }
            Some(out)
        }
        GameEvent::ComputerThinking { player } => Some(format!("{} is thinking...", player)),
        GameEvent::MoveMade {
            player,
            mark,
            position,
        } => Some(format!("{} ({}) took {}", player, mark, position)),
        GameEvent::MoveRejected { reason } => Some(reason.clone()),
        GameEvent::InputRejected(input) => Some(format!("Unrecognized input '{}'. {}", input, PROMPT)),
        GameEvent::Restarted => Some("New game".to_string()),
        GameEvent::GameOver { .. } => Some("r to play again, q to quit".to_string()),
    }
}

/// Prints events to stdout until the orchestrator drops its sender.
pub async fn print_events(mut event_rx: mpsc::UnboundedReceiver<GameEvent>) {
    while let Some(event) = event_rx.recv().await {
        if let Some(text) = render_event(&event) {
            println!("{}", text);
        }
    }
}
