//! One-shot scheduling of deferred automated moves

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::tictactoe::Seat;

/// Identity of one scheduled move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ticket(u64);

/// A move waiting for its delay to elapse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingMove {
    pub ticket: Ticket,
    pub seat: Seat,
    pub due: Instant,
}

/// Holds at most one pending move; scheduling replaces it, cancelling drops it.
#[derive(Debug)]
pub struct MoveScheduler {
    delay: Duration,
    next_ticket: u64,
    pending: Option<PendingMove>,
}

impl MoveScheduler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            next_ticket: 0,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule a move for `seat`, invalidating any earlier ticket
    pub fn schedule(&mut self, seat: Seat, now: Instant) -> PendingMove {
        self.next_ticket += 1;
        let pending = PendingMove {
            ticket: Ticket(self.next_ticket),
            seat,
            due: now + self.delay,
        };
        self.pending = Some(pending);
        pending
    }

    /// Drop the pending move, returning it if there was one
    pub fn cancel(&mut self) -> Option<PendingMove> {
        self.pending.take()
    }

    pub fn pending(&self) -> Option<&PendingMove> {
        self.pending.as_ref()
    }

    /// Take the pending move if `ticket` still identifies it
    pub fn claim(&mut self, ticket: Ticket) -> Option<PendingMove> {
        match self.pending {
            Some(pending) if pending.ticket == ticket => self.pending.take(),
            _ => None,
        }
    }

    /// Ticket of the pending move if it is due at `now`
    pub fn due_ticket(&self, now: Instant) -> Option<Ticket> {
        self.pending
            .filter(|pending| pending.due <= now)
            .map(|pending| pending.ticket)
    }
}
