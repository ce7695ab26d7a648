//! Match states and game outcomes

use serde::{Deserialize, Serialize};

use crate::tictactoe::{Line, Seat};

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    WonBy { seat: Seat, line: Line },
    Draw,
}

impl Outcome {
    pub fn winner(&self) -> Option<Seat> {
        match self {
            Outcome::WonBy { seat, .. } => Some(*seat),
            Outcome::Draw => None,
        }
    }
}

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchState {
    /// Seats may be reconfigured; waiting for a start request
    AwaitingConfiguration,
    /// A game is running and `Seat` is to move
    InProgress(Seat),
    /// The last game has finished
    Decided(Outcome),
}

impl MatchState {
    /// Seat to move, if a game is running
    pub fn active_seat(&self) -> Option<Seat> {
        match self {
            MatchState::InProgress(seat) => Some(*seat),
            _ => None,
        }
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        match self {
            MatchState::Decided(outcome) => Some(outcome),
            _ => None,
        }
    }
}
