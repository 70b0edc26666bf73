//! Core domain types for tic-tac-toe.

use super::position::Position;
use super::rules::WinLine;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from raw squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn filled(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Parses a board from nine characters.
    ///
    /// `X`/`O` (either case) are marks, `.`, `_`, `-` and space are empty.
    /// Whitespace between rows and `|` separators are ignored, so both
    /// `"XX.O....."` and `"XX.|O..|..."` are accepted.
    #[instrument]
    pub fn parse(text: &str) -> Result<Self, BoardParseError> {
        let mut squares = [Square::Empty; 9];
        let mut count = 0;

        for c in text.trim().chars() {
            let square = match c {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '_' | '-' => Square::Empty,
                '|' | '/' | '\n' | '\r' | '\t' => continue,
                ' ' if text.trim().chars().count() != 9 => continue,
                ' ' => Square::Empty,
                other => {
                    return Err(BoardParseError::new(format!(
                        "Unexpected character '{}'",
                        other
                    )));
                }
            };
            if count == 9 {
                return Err(BoardParseError::new("More than 9 cells".to_string()));
            }
            squares[count] = square;
            count += 1;
        }

        if count != 9 {
            return Err(BoardParseError::new(format!(
                "Expected 9 cells, found {}",
                count
            )));
        }

        Ok(Self { squares })
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based cell number so a player can
    /// read off which key to press.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }

    /// Compact nine-character form (`X`, `O`, `.`), the inverse of [`Board::parse`].
    pub fn to_compact(&self) -> String {
        self.squares
            .iter()
            .map(|s| match s {
                Square::Empty => '.',
                Square::Occupied(Player::X) => 'X',
                Square::Occupied(Player::O) => 'O',
            })
            .collect()
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, Display, Error)]
#[display("Board parse error: {} at {}:{}", message, file, line)]
pub struct BoardParseError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardParseError {
    /// Creates a new parse error with caller location tracking.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win along `line`.
    Won {
        /// The winning player.
        player: Player,
        /// The completed line.
        line: WinLine,
    },
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won { player, .. } => Some(*player),
            _ => None,
        }
    }
}

/// Point-in-time view of a game, returned from every placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    /// The board.
    pub board: Board,
    /// Player to move (or the last mover once the game is over).
    pub current_player: Player,
    /// Game status.
    pub status: GameStatus,
}

impl StatusSnapshot {
    /// Status line text shown under the board.
    pub fn message(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("Player {}'s turn", self.current_player),
            GameStatus::Won { player, .. } => format!("Player {} wins!", player),
            GameStatus::Draw => "It's a draw!".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compact() {
        let board = Board::parse("XX.O.....").unwrap();
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
        assert_eq!(board.get(Position::MiddleLeft), Square::Occupied(Player::O));
        assert!(board.is_empty(Position::TopRight));
        assert_eq!(board.filled(), 3);
    }

    #[test]
    fn test_parse_with_separators() {
        let board = Board::parse("XO_|_X_|__O").unwrap();
        assert_eq!(board.to_compact(), "XO..X...O");
    }

    #[test]
    fn test_parse_spaces_as_empty_cells() {
        let board = Board::parse("X   O   X").unwrap();
        assert_eq!(board.to_compact(), "X...O...X");
    }

    #[test]
    fn test_parse_rejects_short_input() {
        let err = Board::parse("XO").unwrap_err();
        assert!(err.message.contains("found 2"));
    }

    #[test]
    fn test_parse_rejects_bad_character() {
        assert!(Board::parse("XXZ......").is_err());
    }

    #[test]
    fn test_display_numbers_empty_cells() {
        let board = Board::parse("X...O....").unwrap();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_status_messages() {
        let snapshot = StatusSnapshot {
            board: Board::new(),
            current_player: Player::O,
            status: GameStatus::InProgress,
        };
        assert_eq!(snapshot.message(), "Player O's turn");

        let draw = StatusSnapshot {
            status: GameStatus::Draw,
            ..snapshot
        };
        assert_eq!(draw.message(), "It's a draw!");
    }
}
