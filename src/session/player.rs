//! Seat occupants

use std::{fmt, sync::Arc};

use crate::{ports::Strategy, solver::SolverTable, strategy::PlayerKind, tictactoe::Seat};

/// One seat's occupant, its strategy instance and its accumulated wins
pub struct Player {
    seat: Seat,
    kind: PlayerKind,
    score: u32,
    strategy: Option<Box<dyn Strategy>>,
}

impl Player {
    pub fn new(seat: Seat, kind: PlayerKind, table: &Arc<SolverTable>, seed: u64) -> Self {
        Self {
            seat,
            kind,
            score: 0,
            strategy: kind.build(table, seed),
        }
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_human(&self) -> bool {
        !self.kind.is_automated()
    }

    /// Replace the occupant; building a fresh strategy for automated kinds
    pub fn reseat(&mut self, kind: PlayerKind, table: &Arc<SolverTable>, seed: u64) {
        self.kind = kind;
        self.strategy = kind.build(table, seed);
    }

    pub(crate) fn record_win(&mut self) -> u32 {
        self.score += 1;
        self.score
    }

    pub(crate) fn reset_score(&mut self) {
        self.score = 0;
    }

    pub(crate) fn strategy_mut(&mut self) -> Option<&mut (dyn Strategy + 'static)> {
        self.strategy.as_deref_mut()
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("seat", &self.seat)
            .field("kind", &self.kind)
            .field("score", &self.score)
            .finish()
    }
}
