//! Evaluation port - pluggable leaf scoring for the search engine
//!
//! Search quality under a depth bound lives or dies by the heuristic that
//! scores cut-off positions. This module defines the scoring contract and a
//! blanket implementation that lets plain functions and closures serve as
//! evaluators without any wrapper type.

use crate::game::GameState;

/// Scores a state from one player's perspective.
///
/// Higher is better for `perspective`. The engine calls this only at leaf
/// nodes: terminal states and states cut off by the depth bound. Because
/// the game is zero-sum, a single evaluator serves both sides; the engine
/// always evaluates from the perspective of the player who started the
/// search and lets the max/min alternation do the rest.
///
/// Terminal states conventionally score +1, 0 or -1 for a win, draw or
/// loss; heuristic scores for cut-off positions may use any scale the
/// caller finds useful, and the engine imposes no bounds. Scores must be
/// finite: the search compares them without guarding against NaN.
///
/// Any `Fn(&S, S::Player) -> f64` is an evaluator, so free functions such
/// as [`crate::othello::eval::evaluate_count`] and ad hoc closures plug in
/// directly.
pub trait Evaluator<S: GameState> {
    /// Score for `state` as seen by `perspective`.
    fn evaluate(&self, state: &S, perspective: S::Player) -> f64;
}

impl<S, F> Evaluator<S> for F
where
    S: GameState,
    F: Fn(&S, S::Player) -> f64,
{
    fn evaluate(&self, state: &S, perspective: S::Player) -> f64 {
        self(state, perspective)
    }
}
