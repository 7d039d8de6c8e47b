//! Command implementations for the advsearch CLI

pub mod best_move;
pub mod play;
