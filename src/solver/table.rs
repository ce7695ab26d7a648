//! Solver table construction and lookup
//!
//! The table is built once by a negamax search from the empty board with X
//! moving first. Every position reachable by legal play is stored under the
//! key of the first member of its symmetry class that the search visited, and
//! ranked for the player who just moved into it.

use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use serde::Serialize;
use tracing::{debug, info};

use super::Rank;
use crate::tictactoe::{Board, Cell, KnownKeys, canonical_key, find_key};

/// Counters collected while building the table
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct SolverStats {
    /// Canonical positions stored
    pub entries: usize,
    /// Interior positions whose children were searched
    pub positions_expanded: usize,
    /// Positions answered from the table instead of searched
    pub table_hits: usize,
    /// Rank of the empty board
    pub root_rank: Option<Rank>,
    /// Wall time spent building
    pub build_time: Duration,
}

/// Immutable map from canonical board key to rank
#[derive(Debug, Clone)]
pub struct SolverTable {
    ranks: HashMap<String, Rank>,
    stats: SolverStats,
}

impl SolverTable {
    /// Build the full table by exhaustive search
    pub fn build() -> Self {
        let started = Instant::now();
        let mut builder = TableBuilder::default();
        let mut board = Board::new();

        let root_rank = -builder.expand_position(&mut board, Cell::X);
        builder.ranks.insert(board.encode(), root_rank);

        let stats = SolverStats {
            entries: builder.ranks.len(),
            positions_expanded: builder.positions_expanded,
            table_hits: builder.table_hits,
            root_rank: Some(root_rank),
            build_time: started.elapsed(),
        };
        info!(
            entries = stats.entries,
            expanded = stats.positions_expanded,
            hits = stats.table_hits,
            root = %root_rank,
            elapsed_ms = stats.build_time.as_millis() as u64,
            "solver table built"
        );

        SolverTable {
            ranks: builder.ranks,
            stats,
        }
    }

    /// Rank stored under an exact key
    pub fn get(&self, key: &str) -> Option<Rank> {
        self.ranks.get(key).copied()
    }

    /// Canonical key of `board`, if its class is in the table
    pub fn key_for(&self, board: &Board) -> Option<String> {
        find_key(board, self)
    }

    /// Rank of `board` through its canonical key.
    ///
    /// The board must be expressed with X as the side that opened the game.
    pub fn rank_of(&self, board: &Board) -> Option<Rank> {
        self.key_for(board).and_then(|key| self.get(&key))
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    pub fn stats(&self) -> &SolverStats {
        &self.stats
    }

    /// Iterate over `(key, rank)` entries in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Rank)> {
        self.ranks.iter().map(|(key, &rank)| (key.as_str(), rank))
    }
}

impl KnownKeys for SolverTable {
    fn contains_key(&self, key: &str) -> bool {
        self.ranks.contains_key(key)
    }
}

#[derive(Default)]
struct TableBuilder {
    ranks: HashMap<String, Rank>,
    positions_expanded: usize,
    table_hits: usize,
}

impl TableBuilder {
    /// Best child rank for `side` over every free cell; a full board is a draw
    fn expand_position(&mut self, board: &mut Board, side: Cell) -> Rank {
        self.positions_expanded += 1;
        let mut best: Option<Rank> = None;
        for cell in board.free_cells() {
            board.place(cell, side);
            let rank = self.evaluate_position(board, cell);
            board.clear_cell(cell);
            best = best.max(Some(rank));
        }
        best.unwrap_or(Rank::Draw)
    }

    /// Rank of `board` for whoever just marked `last_cell`
    fn evaluate_position(&mut self, board: &mut Board, last_cell: usize) -> Rank {
        let key = canonical_key(board, &self.ranks);
        if let Some(&rank) = self.ranks.get(&key) {
            self.table_hits += 1;
            return rank;
        }

        let rank = if board.line_completed_at(last_cell).is_some() {
            Rank::Win
        } else if board.is_full() {
            Rank::Draw
        } else {
            let side = board.get(last_cell).swapped();
            -self.expand_position(board, side)
        };

        debug!(key = %key, rank = %rank, "ranked position");
        self.ranks.insert(key, rank);
        rank
    }
}
