//! Othello (Reversi) game implementation

pub mod board;
pub mod eval;

pub use board::{BOARD_SIZE, Board, Coord, Disc};
pub use eval::{MASK_WEIGHTS, evaluate_count, evaluate_mask, terminal_value};
