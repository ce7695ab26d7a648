//! Tier 3: solver-table optimal play

use std::sync::Arc;

use rand::{SeedableRng, random, rngs::StdRng, seq::IndexedRandom};

use crate::{
    Result,
    ports::{Strategy, TurnView},
    solver::{Rank, SolverTable},
    tictactoe::{Board, Seat},
};

/// Chooses uniformly among the moves with the best solver rank
pub struct OptimalStrategy {
    table: Arc<SolverTable>,
    rng: StdRng,
}

impl OptimalStrategy {
    pub fn new(table: Arc<SolverTable>) -> Self {
        Self::with_seed(table, random())
    }

    /// Create an optimal strategy with a deterministic tie-break seed
    pub fn with_seed(table: Arc<SolverTable>, seed: u64) -> Self {
        Self {
            table,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Rank every free cell for the mover.
    ///
    /// The table was built with X opening, so when seat B opened the current
    /// game the marks are swapped before lookup.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MissingRank`] if a resulting position is not in
    /// the table, which only happens for boards not reachable by legal play.
    pub fn rank_moves(&self, view: &TurnView<'_>) -> Result<Vec<(usize, Rank)>> {
        let (mut board, mark) = match view.starter {
            Seat::A => (*view.board, view.mover_mark()),
            Seat::B => (view.board.swap_marks(), view.mover_mark().swapped()),
        };

        let mut ranked = Vec::new();
        for cell in board.free_cells() {
            board.place(cell, mark);
            let rank = self.lookup(&board)?;
            board.clear_cell(cell);
            ranked.push((cell, rank));
        }
        Ok(ranked)
    }

    fn lookup(&self, board: &Board) -> Result<Rank> {
        self.table
            .rank_of(board)
            .ok_or_else(|| crate::Error::MissingRank {
                key: board.encode(),
            })
    }
}

impl Strategy for OptimalStrategy {
    fn choose_cell(&mut self, view: &TurnView<'_>) -> Result<usize> {
        let ranked = self.rank_moves(view)?;
        let Some(best) = ranked.iter().map(|&(_, rank)| rank).max() else {
            return Err(crate::Error::NoFreeCells);
        };

        let best_cells: Vec<usize> = ranked
            .iter()
            .filter(|&&(_, rank)| rank == best)
            .map(|&(cell, _)| cell)
            .collect();
        best_cells
            .choose(&mut self.rng)
            .copied()
            .ok_or(crate::Error::NoFreeCells)
    }

    fn name(&self) -> &str {
        "optimal"
    }
}
