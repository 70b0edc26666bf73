//! Status consistency invariant: the recorded status matches the board.

use super::super::{GameState, GameStatus, rules};
use super::Invariant;

/// Invariant: Status is derived from the board.
///
/// `Won` carries exactly the line [`rules::check_winner`] reports, `Draw`
/// means a full board without a line, and `InProgress` means neither.
pub struct StatusConsistentInvariant;

impl Invariant<GameState> for StatusConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let board = game.board();
        match (game.status(), rules::check_winner(board)) {
            (GameStatus::Won { player, line }, Some(win)) => {
                *player == win.player && *line == win.line
            }
            (GameStatus::Won { .. }, None) => false,
            (GameStatus::Draw, win) => win.is_none() && rules::is_full(board),
            (GameStatus::InProgress, win) => win.is_none() && !rules::is_full(board),
        }
    }

    fn description() -> &'static str {
        "Game status matches the board"
    }
}
