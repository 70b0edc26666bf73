//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};

/// Three positions forming a row, column or diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine([Position; 3]);

impl WinLine {
    /// Creates a line from three positions.
    pub const fn new(positions: [Position; 3]) -> Self {
        Self(positions)
    }

    /// The three positions of this line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Returns true if `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// Every way to get three in a row: rows, then columns, then diagonals.
///
/// Scan order decides which line is reported when several are complete.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    WinLine::new([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    WinLine::new([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    WinLine::new([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    WinLine::new([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    WinLine::new([Position::TopCenter, Position::Center, Position::BottomCenter]),
    WinLine::new([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    WinLine::new([Position::TopLeft, Position::Center, Position::BottomRight]),
    WinLine::new([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// A completed line and the player who owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Win {
    /// The player with three in a row.
    pub player: Player,
    /// The first completed line in scan order.
    pub line: WinLine,
}

/// Checks if there is a winner on the board.
///
/// Returns the first line in [`WIN_LINES`] order whose three squares
/// hold the same mark, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Win> {
    WIN_LINES.iter().find_map(|line| {
        let [a, b, c] = line.positions();
        match board.get(a) {
            Square::Occupied(player)
                if board.get(b) == Square::Occupied(player)
                    && board.get(c) == Square::Occupied(player) =>
            {
                Some(Win { player, line: *line })
            }
            _ => None,
        }
    })
}
