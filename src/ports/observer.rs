//! Observer port - abstraction for match observation
//!
//! Observers are called by the match simulation in this order:
//! 1. `on_series_start(total_games)` once
//! 2. for each game: `on_game_start`, `on_move` per marked cell, then `on_game_end`
//! 3. `on_series_end()` once

use crate::{Result, session::Outcome, tictactoe::Seat};

/// Observer trait for monitoring a series of simulated games
pub trait Observer: Send {
    fn on_series_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    /// Called once the game is under way with the seat that opened it
    fn on_game_start(&mut self, _game_num: usize, _starter: Seat) -> Result<()> {
        Ok(())
    }

    fn on_move(&mut self, _game_num: usize, _seat: Seat, _cell: usize) -> Result<()> {
        Ok(())
    }

    /// Called after the game is decided
    fn on_game_end(&mut self, _game_num: usize, _outcome: &Outcome) -> Result<()> {
        Ok(())
    }

    fn on_series_end(&mut self) -> Result<()> {
        Ok(())
    }
}
