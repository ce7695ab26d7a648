//! Inbound events and outbound notifications

use serde::{Deserialize, Serialize};

use super::Outcome;
use crate::{
    strategy::PlayerKind,
    tictactoe::{Cell, Line, Seat},
};

/// Player intent delivered by the interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    ResetRequested,
    StartRequested,
    CellChosen(usize),
    PlayerTypeSelected(Seat, PlayerKind),
}

/// State change for the interface to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notification {
    CellMarked { cell: usize, mark: Cell },
    LineWon { line: Line, seat: Seat },
    TurnChanged(Option<Seat>),
    GameDecided(Outcome),
    ConfigurationOpened,
    ConfigurationClosed,
    ScoreChanged { seat: Seat, score: u32 },
    GamesPlayedChanged(u32),
    PlayerTypeChanged { seat: Seat, kind: PlayerKind },
    BoardCleared,
}
