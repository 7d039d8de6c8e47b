//! Move-selecting agents built on top of the search engine
//!
//! An [`Agent`] turns a game state into a move. The two implementations
//! here are the search-backed player and a seeded random baseline to
//! measure it against.

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::error::{Error, Result};
use crate::eval::Evaluator;
use crate::game::GameState;
use crate::search::minimax_move;

/// Search depth used when the caller does not pick one.
///
/// Five plies keeps full-board Othello searches comfortably interactive
/// with either bundled evaluator.
pub const DEFAULT_DEPTH: i32 = 5;

/// A player: anything that can pick a move in a game state.
pub trait Agent<S: GameState>: Send {
    /// Select a move for the player to move in `state`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoLegalMoves`] when the game is already over.
    /// Implementations may report their own misconfigurations, such as a
    /// depth bound too shallow to produce a move.
    fn select_move(&mut self, state: &S) -> Result<S::Move>;

    /// Human-readable name for transcripts and match reports.
    fn name(&self) -> &str;

    /// Seed the agent's internal random number generator.
    ///
    /// Match runners call this when supplied with a deterministic seed to
    /// make results reproducible. Deterministic agents can ignore it.
    ///
    /// # Default Implementation
    ///
    /// Does nothing and returns `Ok(())`.
    fn set_rng_seed(&mut self, _seed: u64) -> Result<()> {
        Ok(())
    }
}

/// Agent that plays the move preferred by a depth-bounded minimax search.
pub struct MinimaxAgent<E> {
    name: String,
    evaluator: E,
    max_depth: i32,
}

impl<E> MinimaxAgent<E> {
    /// Create a minimax agent searching `max_depth` plies deep
    /// ([`crate::search::UNBOUNDED_DEPTH`] for no bound).
    pub fn new(name: String, evaluator: E, max_depth: i32) -> Self {
        Self {
            name,
            evaluator,
            max_depth,
        }
    }
}

impl<S, E> Agent<S> for MinimaxAgent<E>
where
    S: GameState,
    E: Evaluator<S> + Send,
{
    /// # Errors
    ///
    /// Returns [`Error::NoLegalMoves`] on a finished game and
    /// [`Error::DepthTooShallow`] when the depth bound cuts the search off
    /// at the root itself (a depth of zero), so a still-playable position
    /// is never misreported as having no moves.
    fn select_move(&mut self, state: &S) -> Result<S::Move> {
        if state.is_terminal() {
            return Err(Error::NoLegalMoves);
        }
        minimax_move(state, self.max_depth, &self.evaluator).ok_or(Error::DepthTooShallow {
            depth: self.max_depth,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Random policy agent (baseline)
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    /// Create a new random agent
    pub fn new(name: String) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a new random agent with a deterministic seed
    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<S: GameState> Agent<S> for RandomAgent {
    fn select_move(&mut self, state: &S) -> Result<S::Move> {
        let mut moves = state.legal_moves();
        if moves.is_empty() {
            return Err(Error::NoLegalMoves);
        }
        let index = self.rng.random_range(0..moves.len());
        Ok(moves.swap_remove(index))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::othello::{Board, Coord, evaluate_count};

    #[test]
    fn minimax_agent_solves_a_forced_win() {
        let board = Board::from_string(concat!(
            "WB.....W",
            ".......W",
            ".......W",
            ".......W",
            ".......W",
            ".......W",
            ".......B",
            "........",
            "_W",
        ))
        .unwrap();
        let mut agent = MinimaxAgent::new(
            "solver".to_string(),
            evaluate_count,
            crate::search::UNBOUNDED_DEPTH,
        );

        // Both captures win; the first one enumerated is kept.
        let mv = agent.select_move(&board).unwrap();
        assert_eq!(mv, Coord::new(2, 0));
    }

    #[test]
    fn minimax_agent_refuses_a_finished_game() {
        let board = Board::from_string(concat!(
            "B.......",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            ".......W",
            "_B",
        ))
        .unwrap();
        let mut agent = MinimaxAgent::new("solver".to_string(), evaluate_count, DEFAULT_DEPTH);

        assert!(matches!(
            agent.select_move(&board),
            Err(Error::NoLegalMoves)
        ));
    }

    #[test]
    fn depth_zero_agent_reports_its_depth_not_missing_moves() {
        let mut agent = MinimaxAgent::new("zero".to_string(), evaluate_count, 0);

        // The opening has four legal moves; only the depth bound is at fault.
        assert!(matches!(
            agent.select_move(&Board::new()),
            Err(Error::DepthTooShallow { depth: 0 })
        ));
    }

    #[test]
    fn random_agent_stays_within_the_legal_moves() {
        let board = Board::new();
        let mut agent = RandomAgent::with_seed("random".to_string(), 7);

        for _ in 0..20 {
            let mv = agent.select_move(&board).unwrap();
            assert!(board.legal_moves().contains(&mv));
        }
    }

    #[test]
    fn seeded_random_agents_repeat_their_games() {
        let mut first = RandomAgent::with_seed("a".to_string(), 12345);
        let mut second = RandomAgent::with_seed("b".to_string(), 12345);

        let mut board = Board::new();
        for _ in 0..10 {
            if board.is_terminal() {
                break;
            }
            let mv_first = first.select_move(&board).unwrap();
            let mv_second = second.select_move(&board).unwrap();
            assert_eq!(mv_first, mv_second);
            board = board.apply_move(&mv_first);
        }
    }
}
