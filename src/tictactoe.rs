//! Tic-Tac-Toe board model

pub mod board;
pub mod lines;
pub mod symmetry;

pub use board::{BOARD_SIZE, Board, Cell, Seat};
pub use lines::{Line, LineAnalyzer, WINNING_LINES, lines_at};
pub use symmetry::{KnownKeys, SYMMETRIES, Symmetry, canonical_key, find_key};
