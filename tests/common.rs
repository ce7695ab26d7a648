//! Common helpers for the xo test suite.

#![allow(dead_code)]

use std::collections::HashSet;

use xo::{
    app::{App, SessionConfig},
    session::Session,
    strategy::PlayerKind,
    tictactoe::{Board, Cell, Seat},
};

/// Every board reachable by legal alternating play with X opening.
///
/// Decided boards are included but not expanded.
pub fn reachable_boards() -> HashSet<Board> {
    let mut seen = HashSet::new();
    let mut board = Board::new();
    collect(&mut board, Cell::X, &mut seen);
    seen
}

fn collect(board: &mut Board, side: Cell, seen: &mut HashSet<Board>) {
    if !seen.insert(*board) || board.winning_line().is_some() || board.is_full() {
        return;
    }
    for cell in board.free_cells() {
        board.place(cell, side);
        collect(board, side.swapped(), seen);
        board.clear_cell(cell);
    }
}

/// Session with both seats configured, no bot delay and a fixed seed
pub fn session(app: &App, a: PlayerKind, b: PlayerKind, seed: u64) -> Session {
    let config = SessionConfig::default()
        .with_seat(Seat::A, a)
        .with_seat(Seat::B, b)
        .with_bot_delay_ms(0)
        .with_seed(seed);
    app.create_session(&config)
}
