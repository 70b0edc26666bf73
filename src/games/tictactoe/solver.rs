//! Perfect-play move search for tic-tac-toe.
//!
//! Full-depth minimax over the game tree. A line completed by the searching
//! mark scores `10 - depth`, a line completed by its opponent `depth - 10`,
//! and a full board without a line `0`, so among equal outcomes the search
//! prefers quicker wins and slower losses.
//!
//! The board is passed explicitly through every recursive call and mutated
//! in place; each candidate placement is undone before the next is tried.

use super::rules::{check_winner, is_full};
use super::types::{Board, Player, Square};
use super::Position;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score of a line completed with no plies searched.
pub const WIN_SCORE: i32 = 10;

/// Minimax move search.
///
/// With pruning enabled the search uses alpha-beta cutoffs. Cutoffs only
/// discard candidates that cannot beat the best score found so far, so the
/// chosen move is identical to the exhaustive search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solver {
    pruning: bool,
}

impl Solver {
    /// Creates a solver with alpha-beta pruning enabled.
    pub fn new() -> Self {
        Self { pruning: true }
    }

    /// Creates a solver that visits every node of the game tree.
    pub fn exhaustive() -> Self {
        Self { pruning: false }
    }

    /// Creates a solver with pruning switched on or off.
    pub fn with_pruning(pruning: bool) -> Self {
        Self { pruning }
    }

    /// Whether alpha-beta pruning is enabled.
    pub fn pruning(&self) -> bool {
        self.pruning
    }

    /// Returns the optimal square for `mark`, or `None` on a full board.
    ///
    /// Every empty square is tried in ascending index order and the first
    /// one with the strictly greatest score wins.
    #[instrument(skip(self, board), fields(board = %board.to_compact(), pruning = self.pruning))]
    pub fn best_move(&self, board: &Board, mark: Player) -> Option<Position> {
        let mut scratch = *board;
        let mut best: Option<(Position, i32)> = None;

        for pos in Position::ALL {
            if !scratch.is_empty(pos) {
                continue;
            }

            scratch.set(pos, Square::Occupied(mark));
            let score = if self.pruning {
                let alpha = best.map_or(i32::MIN, |(_, score)| score);
                alpha_beta(&mut scratch, 0, mark.opponent(), mark, alpha, i32::MAX)
            } else {
                minimax(&mut scratch, 0, mark.opponent(), mark)
            };
            scratch.set(pos, Square::Empty);

            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((pos, score));
            }
        }

        match best {
            Some((pos, score)) => debug!(position = %pos, score, "Best move found"),
            None => debug!("No empty squares"),
        }
        best.map(|(pos, _)| pos)
    }

    /// Exact minimax score of every legal move for `mark`, in index order.
    #[instrument(skip(self, board), fields(board = %board.to_compact()))]
    pub fn evaluate(&self, board: &Board, mark: Player) -> Vec<(Position, i32)> {
        let mut scratch = *board;
        Position::valid_moves(board)
            .into_iter()
            .map(|pos| {
                scratch.set(pos, Square::Occupied(mark));
                let score = if self.pruning {
                    alpha_beta(&mut scratch, 0, mark.opponent(), mark, i32::MIN, i32::MAX)
                } else {
                    minimax(&mut scratch, 0, mark.opponent(), mark)
                };
                scratch.set(pos, Square::Empty);
                (pos, score)
            })
            .collect()
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

/// Optimal square for `mark` using the default (pruned) solver.
pub fn best_move(board: &Board, mark: Player) -> Option<Position> {
    Solver::new().best_move(board, mark)
}

fn terminal_score(board: &Board, depth: i32, maximizer: Player) -> Option<i32> {
    if let Some(win) = check_winner(board) {
        return Some(if win.player == maximizer {
            WIN_SCORE - depth
        } else {
            depth - WIN_SCORE
        });
    }
    is_full(board).then_some(0)
}

/// Scores `board` for `maximizer` with `to_move` about to play.
///
/// `depth` is the number of plies already placed by the search. The board
/// is restored before returning.
pub fn minimax(board: &mut Board, depth: i32, to_move: Player, maximizer: Player) -> i32 {
    if let Some(score) = terminal_score(board, depth, maximizer) {
        return score;
    }

    let maximizing = to_move == maximizer;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        board.set(pos, Square::Occupied(to_move));
        let score = minimax(board, depth + 1, to_move.opponent(), maximizer);
        board.set(pos, Square::Empty);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

fn alpha_beta(
    board: &mut Board,
    depth: i32,
    to_move: Player,
    maximizer: Player,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if let Some(score) = terminal_score(board, depth, maximizer) {
        return score;
    }

    let maximizing = to_move == maximizer;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        board.set(pos, Square::Occupied(to_move));
        let score = alpha_beta(board, depth + 1, to_move.opponent(), maximizer, alpha, beta);
        board.set(pos, Square::Empty);

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(best);
        } else {
            best = best.min(score);
            beta = beta.min(best);
        }
        if alpha >= beta {
            break;
        }
    }

    best
}
