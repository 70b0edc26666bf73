//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Move history must show X, O, X, O, ... starting with X. While the game
/// is running the player to move follows from the history length; once it
/// has ended the player to move stays on the last mover.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        let Some(first) = history.first() else {
            return game.current_player() == Player::X;
        };

        if first.player != Player::X {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        let expected = if game.status().is_over() {
            history[history.len() - 1].player
        } else if history.len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };

        game.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut game = GameState::new();
        for index in [0, 4, 2, 6, 8] {
            game.place(index);
            assert!(AlternatingTurnInvariant::holds(&game));
        }
        assert_eq!(game.current_player(), Player::O);
    }

    #[test]
    fn test_finished_game_holds() {
        let mut game = GameState::new();
        for index in [0, 3, 1, 4, 2] {
            game.place(index);
        }
        assert!(game.status().is_over());
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_player_to_move_violates() {
        let mut game = GameState::new();
        game.place(0);
        game.set_current_player(Player::X);
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
