//! Exhaustive game-tree solver backing the optimal tier

pub mod rank;
pub mod table;

pub use rank::Rank;
pub use table::{SolverStats, SolverTable};
