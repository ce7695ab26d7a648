//! Tier 2: one-ply win/block heuristic

use rand::{SeedableRng, random, rngs::StdRng, seq::IndexedRandom};

use crate::{
    Result,
    ports::{Strategy, TurnView},
    tictactoe::LineAnalyzer,
};

/// Heuristic player
///
/// 1. Completes one of its own lines when it can
/// 2. Otherwise blocks the opponent's immediate win
/// 3. Otherwise plays randomly
///
/// Both scans go through free cells in ascending order.
pub struct HeuristicStrategy {
    rng: StdRng,
}

impl HeuristicStrategy {
    pub fn new() -> Self {
        Self::with_seed(random())
    }

    /// Create a heuristic strategy with a deterministic seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for HeuristicStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for HeuristicStrategy {
    fn choose_cell(&mut self, view: &TurnView<'_>) -> Result<usize> {
        let cells = &view.board.cells;
        if let Some(win) = LineAnalyzer::first_completing_cell(cells, view.mover_mark()) {
            return Ok(win);
        }
        if let Some(block) = LineAnalyzer::first_completing_cell(cells, view.opponent_mark()) {
            return Ok(block);
        }

        let moves = view.board.free_cells();
        moves
            .choose(&mut self.rng)
            .copied()
            .ok_or(crate::Error::NoFreeCells)
    }

    fn name(&self) -> &str {
        "heuristic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::{Board, Seat};

    #[test]
    fn test_takes_win_before_block() {
        // XX.
        // OO.
        // ...
        let board = Board::from_string("XX. OO. ...").unwrap();
        let mut strategy = HeuristicStrategy::with_seed(1);
        let cell = strategy
            .choose_cell(&TurnView::new(&board, Seat::A, Seat::A))
            .unwrap();
        assert_eq!(cell, 2);
    }

    #[test]
    fn test_blocks_opponent_line() {
        // X..
        // OO.
        // X..
        let board = Board::from_string("X.. OO. X..").unwrap();
        let mut strategy = HeuristicStrategy::with_seed(1);
        let cell = strategy
            .choose_cell(&TurnView::new(&board, Seat::A, Seat::B))
            .unwrap();
        assert_eq!(cell, 5);
    }

    #[test]
    fn test_plays_as_seat_b() {
        // O's own line wins over blocking X
        let board = Board::from_string("XX. ... OO.").unwrap();
        let mut strategy = HeuristicStrategy::with_seed(1);
        let cell = strategy
            .choose_cell(&TurnView::new(&board, Seat::B, Seat::B))
            .unwrap();
        assert_eq!(cell, 8);
    }

    #[test]
    fn test_falls_back_to_free_cell() {
        let board = Board::from_string("X.. ... ...").unwrap();
        let mut strategy = HeuristicStrategy::with_seed(3);
        let cell = strategy
            .choose_cell(&TurnView::new(&board, Seat::B, Seat::A))
            .unwrap();
        assert!(board.is_free(cell));
    }
}
