//! Game state and move application for tic-tac-toe.

use super::action::{Move, MoveError};
#[cfg(debug_assertions)]
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::rules::{self, Win};
use super::types::{Board, GameStatus, Player, Square, StatusSnapshot};
use super::Position;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Complete state of one game: board, player to move, status and history.
///
/// The only way to change a `GameState` is [`GameState::reset`] or a
/// placement, so every instance satisfies
/// [`TicTacToeInvariants`](super::TicTacToeInvariants).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
    history: Vec<Move>,
}

impl GameState {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Clears the board and starts over with X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
        info!("Game reset");
    }

    /// Places the current player's mark at `index` (0-8).
    ///
    /// Out-of-range indices, occupied squares and moves after the game has
    /// ended are ignored: the board is left untouched and the unchanged
    /// snapshot is returned. Use [`GameState::try_place`] to learn why a
    /// placement was rejected.
    #[instrument(skip(self))]
    pub fn place(&mut self, index: usize) -> StatusSnapshot {
        match self.try_place(index) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                debug!(error = %e, "Placement ignored");
                self.snapshot()
            }
        }
    }

    /// Places the current player's mark at `index`, reporting rejections.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game has already been won or drawn
    /// - [`MoveError::OutOfBounds`] if `index > 8`
    /// - [`MoveError::SquareOccupied`] if the square is taken
    /// - [`MoveError::InvariantViolation`] if a postcondition fails (debug builds)
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn try_place(&mut self, index: usize) -> Result<StatusSnapshot, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }

        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;

        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.current_player;
        self.board.set(pos, Square::Occupied(player));
        self.history.push(Move::new(player, pos));
        debug!(position = %pos, "Mark placed");

        if let Some(Win { player, line }) = self.check_win() {
            info!(winner = %player, line = ?line.positions(), "Game won");
            self.status = GameStatus::Won { player, line };
        } else if rules::is_full(&self.board) {
            info!("Game drawn");
            self.status = GameStatus::Draw;
        } else {
            self.current_player = player.opponent();
        }

        #[cfg(debug_assertions)]
        TicTacToeInvariants::check_all(&*self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        Ok(self.snapshot())
    }

    /// First completed line in scan order, with its owner.
    pub fn check_win(&self) -> Option<Win> {
        rules::check_winner(&self.board)
    }

    /// True when the board is full and nobody has three in a row.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(&self.board)
    }

    /// Empty positions in ascending order; none once the game is over.
    pub fn legal_moves(&self) -> Vec<Position> {
        if self.status.is_over() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Copies out the board, player to move and status.
    pub fn snapshot(&self) -> StatusSnapshot {
        StatusSnapshot {
            board: self.board,
            current_player: self.current_player,
            status: self.status,
        }
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_current_player(&mut self, player: Player) {
        self.current_player = player;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::WIN_LINES;

    fn play(game: &mut GameState, moves: &[usize]) -> StatusSnapshot {
        let mut snapshot = game.snapshot();
        for &index in moves {
            snapshot = game.try_place(index).expect("legal move");
        }
        snapshot
    }

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(game.status(), &GameStatus::InProgress);
        assert_eq!(game.legal_moves().len(), 9);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_place_alternates_players() {
        let mut game = GameState::new();
        let snapshot = game.place(4);
        assert_eq!(snapshot.board.get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(snapshot.current_player, Player::O);

        let snapshot = game.place(0);
        assert_eq!(snapshot.board.get(Position::TopLeft), Square::Occupied(Player::O));
        assert_eq!(snapshot.current_player, Player::X);
    }

    #[test]
    fn test_try_place_reports_rejections() {
        let mut game = GameState::new();
        game.place(4);
        assert_eq!(game.try_place(4), Err(MoveError::SquareOccupied(Position::Center)));
        assert_eq!(game.try_place(9), Err(MoveError::OutOfBounds(9)));
        assert_eq!(game.current_player(), Player::O);
    }

    #[test]
    fn test_win_ends_game_and_keeps_winner_to_move() {
        let mut game = GameState::new();
        // X: 0, 1, 2   O: 3, 4
        let snapshot = play(&mut game, &[0, 3, 1, 4, 2]);
        assert_eq!(
            snapshot.status,
            GameStatus::Won { player: Player::X, line: WIN_LINES[0] }
        );
        assert_eq!(snapshot.current_player, Player::X);
        assert_eq!(game.try_place(8), Err(MoveError::GameOver));
        assert!(game.legal_moves().is_empty());
        assert_eq!(snapshot.message(), "Player X wins!");
    }

    #[test]
    fn test_draw_on_full_board() {
        let mut game = GameState::new();
        // X O X / X O O / O X X
        let snapshot = play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(snapshot.status, GameStatus::Draw);
        assert!(game.is_draw());
        assert!(game.check_win().is_none());
        assert_eq!(snapshot.message(), "It's a draw!");
    }

    #[test]
    fn test_win_on_last_square_is_not_draw() {
        let mut game = GameState::new();
        // X fills the main diagonal with the ninth mark.
        let snapshot = play(&mut game, &[0, 1, 4, 2, 5, 3, 6, 7, 8]);
        assert_eq!(snapshot.status.winner(), Some(Player::X));
        assert!(!game.is_draw());
    }

    #[test]
    fn test_reset_after_finished_game() {
        let mut game = GameState::new();
        play(&mut game, &[0, 3, 1, 4, 2]);
        game.reset();
        assert_eq!(game, GameState::new());
        assert_eq!(game.place(0).current_player, Player::O);
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let mut game = GameState::new();
        game.place(4);
        game.board_mut().set(Position::TopLeft, Square::Occupied(Player::O));
        let result = game.try_place(8);
        if cfg!(debug_assertions) {
            assert!(matches!(result, Err(MoveError::InvariantViolation(_))));
        }
    }
}
