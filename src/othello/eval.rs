//! Example evaluation functions
//!
//! Two classic heuristics usable as-is with the search engine: raw disc
//! difference and a positional weight mask. Both are plain functions with
//! the evaluator signature, so they plug straight into
//! [`minimax_move`](crate::search::minimax_move).

use crate::game::GameState;
use crate::othello::board::{BOARD_SIZE, Board, Coord, Disc};

/// Positional weights indexed `[y][x]`. Corners dominate, the squares
/// touching a corner are liabilities while the corner is still empty, and
/// the four centre squares carry a small bonus.
pub const MASK_WEIGHTS: [[i32; BOARD_SIZE]; BOARD_SIZE] = [
    [100, -30, 6, 2, 2, 6, -30, 100],
    [-30, -50, 1, 1, 1, 1, -50, -30],
    [6, 1, 1, 1, 1, 1, 1, 6],
    [2, 1, 1, 3, 3, 1, 1, 2],
    [2, 1, 1, 3, 3, 1, 1, 2],
    [6, 1, 1, 1, 1, 1, 1, 6],
    [-30, -50, 1, 1, 1, 1, -50, -30],
    [100, -30, 6, 2, 2, 6, -30, 100],
];

/// Utility of a finished game for `perspective`: 1 for a win, -1 for a
/// loss, 0 for a draw.
pub fn terminal_value(board: &Board, perspective: Disc) -> f64 {
    match board.winner() {
        Some(winner) if winner == perspective => 1.0,
        Some(_) => -1.0,
        None => 0.0,
    }
}

/// Disc-difference heuristic: own discs minus opponent discs.
///
/// Finished games are scored with [`terminal_value`] instead, so a proven
/// result always reads as exactly 1, 0 or -1.
pub fn evaluate_count(board: &Board, perspective: Disc) -> f64 {
    if board.is_terminal() {
        return terminal_value(board, perspective);
    }
    let mine = board.count(perspective) as f64;
    let theirs = board.count(perspective.opponent()) as f64;
    mine - theirs
}

/// Positional heuristic: each own disc adds its [`MASK_WEIGHTS`] entry,
/// each opponent disc subtracts it.
///
/// Finished games are scored with [`terminal_value`] instead.
pub fn evaluate_mask(board: &Board, perspective: Disc) -> f64 {
    if board.is_terminal() {
        return terminal_value(board, perspective);
    }
    let mut total = 0;
    for y in 0..BOARD_SIZE {
        for x in 0..BOARD_SIZE {
            match board.get(Coord { x, y }) {
                Some(disc) if disc == perspective => total += MASK_WEIGHTS[y][x],
                Some(_) => total -= MASK_WEIGHTS[y][x],
                None => {}
            }
        }
    }
    f64::from(total)
}
