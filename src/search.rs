//! Depth-bounded minimax with alpha-beta pruning
//!
//! The engine walks the game tree with two mutually recursive halves, a
//! maximizing one for the searching player and a minimizing one for the
//! opponent, and prunes branches that cannot influence the root decision.
//! It is deliberately minimal: no transposition table, no move ordering,
//! no iterative deepening. Strength comes from the evaluator and the depth
//! bound the caller picks.
//!
//! All scores are taken from the perspective of the player to move at the
//! root. That player is fixed once at entry and threaded through the
//! recursion, so the evaluator is always asked the same question no matter
//! whose turn it is at the leaf.

use crate::eval::Evaluator;
use crate::game::GameState;

/// Depth bound that disables the cutoff, searching to the terminal frontier.
///
/// Only meaningful for games whose trees are finite and small; Othello on
/// a full board will not return in reasonable time without a real bound.
pub const UNBOUNDED_DEPTH: i32 = -1;

/// Result of a root search: the chosen move and the score backed up to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOutcome<M> {
    /// The best move found, or `None` when the root is already a leaf
    /// (terminal, or cut off by a depth bound of zero).
    pub best_move: Option<M>,
    /// Minimax value of the root for the player to move there.
    pub value: f64,
}

/// Picks the best move for the player to move in `state`.
///
/// Searches `max_depth` plies deep ([`UNBOUNDED_DEPTH`] for no bound) and
/// scores cut-off positions with `evaluator`. Among equal-valued moves the
/// first one enumerated by [`GameState::legal_moves`] wins, so move choice
/// is as deterministic as the game's move ordering.
///
/// Returns `None` only when the root itself is a leaf.
pub fn minimax_move<S, E>(state: &S, max_depth: i32, evaluator: &E) -> Option<S::Move>
where
    S: GameState,
    E: Evaluator<S>,
{
    minimax_search(state, max_depth, evaluator).best_move
}

/// Like [`minimax_move`], but also reports the backed-up root value.
///
/// The value is exact for the searched horizon: with an unbounded depth it
/// is the game-theoretic value under `evaluator`'s terminal scores.
pub fn minimax_search<S, E>(state: &S, max_depth: i32, evaluator: &E) -> SearchOutcome<S::Move>
where
    S: GameState,
    E: Evaluator<S>,
{
    let perspective = state.player_to_move();
    let (value, best_move) = max_value(
        state,
        f64::NEG_INFINITY,
        f64::INFINITY,
        evaluator,
        max_depth,
        0,
        perspective,
    );
    SearchOutcome { best_move, value }
}

/// Whether `state` is a leaf of this search: game over, or depth bound hit.
fn cutoff<S: GameState>(state: &S, max_depth: i32, depth: i32) -> bool {
    state.is_terminal() || (max_depth != UNBOUNDED_DEPTH && depth >= max_depth)
}

/// Maximizing half of the search: the searching player's turn.
///
/// Returns the node value and the move that achieves it. `alpha` rises as
/// better options are found; once it reaches `beta` the opponent would
/// never let play come here, so the remaining moves are skipped.
fn max_value<S, E>(
    state: &S,
    mut alpha: f64,
    beta: f64,
    evaluator: &E,
    max_depth: i32,
    depth: i32,
    perspective: S::Player,
) -> (f64, Option<S::Move>)
where
    S: GameState,
    E: Evaluator<S>,
{
    if cutoff(state, max_depth, depth) {
        return (evaluator.evaluate(state, perspective), None);
    }
    let mut value = f64::NEG_INFINITY;
    let mut best = None;
    for mv in state.legal_moves() {
        let successor = state.apply_move(&mv);
        let (score, _) = min_value(
            &successor,
            alpha,
            beta,
            evaluator,
            max_depth,
            depth + 1,
            perspective,
        );
        if score > value {
            value = score;
            best = Some(mv);
        }
        alpha = alpha.max(value);
        if alpha >= beta {
            break;
        }
    }
    (value, best)
}

/// Minimizing half of the search: the opponent's turn.
///
/// Mirror image of [`max_value`]: `beta` falls as the opponent finds
/// stronger replies, and the node is abandoned once `beta` drops to
/// `alpha`.
fn min_value<S, E>(
    state: &S,
    alpha: f64,
    mut beta: f64,
    evaluator: &E,
    max_depth: i32,
    depth: i32,
    perspective: S::Player,
) -> (f64, Option<S::Move>)
where
    S: GameState,
    E: Evaluator<S>,
{
    if cutoff(state, max_depth, depth) {
        return (evaluator.evaluate(state, perspective), None);
    }
    let mut value = f64::INFINITY;
    let mut best = None;
    for mv in state.legal_moves() {
        let successor = state.apply_move(&mv);
        let (score, _) = max_value(
            &successor,
            alpha,
            beta,
            evaluator,
            max_depth,
            depth + 1,
            perspective,
        );
        if score < value {
            value = score;
            best = Some(mv);
        }
        beta = beta.min(value);
        if beta <= alpha {
            break;
        }
    }
    (value, best)
}
