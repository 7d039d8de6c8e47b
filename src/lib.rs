//! Adversarial search toolkit for two-player zero-sum games
//!
//! This crate provides:
//! - A depth-bounded minimax engine with alpha-beta pruning, generic over any
//!   game that implements the [`GameState`] capability trait
//! - A pluggable evaluation contract satisfied by plain closures or by types
//!   implementing [`Evaluator`]
//! - A complete Othello implementation with the classic material-count and
//!   positional-mask evaluation functions
//! - Agents and a match harness for pitting strategies against each other

pub mod agents;
pub mod arena;
pub mod cli;
pub mod error;
pub mod eval;
pub mod game;
pub mod othello;
pub mod search;

pub use agents::{Agent, DEFAULT_DEPTH, MinimaxAgent, RandomAgent};
pub use error::{Error, Result};
pub use eval::Evaluator;
pub use game::GameState;
pub use search::{SearchOutcome, UNBOUNDED_DEPTH, minimax_move, minimax_search};
