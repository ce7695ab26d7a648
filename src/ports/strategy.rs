//! Strategy port - abstraction over automated move selection

use crate::{
    Result,
    tictactoe::{Board, Cell, Seat},
};

/// Everything a strategy may look at when choosing a cell
#[derive(Debug, Clone, Copy)]
pub struct TurnView<'a> {
    /// Current board
    pub board: &'a Board,
    /// Seat that is about to move
    pub mover: Seat,
    /// Seat that opened the current game
    pub starter: Seat,
}

impl<'a> TurnView<'a> {
    pub fn new(board: &'a Board, mover: Seat, starter: Seat) -> Self {
        Self {
            board,
            mover,
            starter,
        }
    }

    /// Mark the mover places
    pub fn mover_mark(&self) -> Cell {
        self.mover.mark()
    }

    /// Mark the opponent places
    pub fn opponent_mark(&self) -> Cell {
        self.mover.other().mark()
    }
}

/// Strategy trait - unified interface for the automated tiers
///
/// # Examples
///
/// ```no_run
/// use xo::{
///     ports::{Strategy, TurnView},
///     tictactoe::{Board, Seat},
/// };
///
/// fn opening<S: Strategy>(strategy: &mut S) -> xo::Result<usize> {
///     let board = Board::new();
///     strategy.choose_cell(&TurnView::new(&board, Seat::A, Seat::A))
/// }
/// ```
pub trait Strategy: Send {
    /// Pick a free cell for `view.mover`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoFreeCells`] when the board is full. Callers
    /// must only ask for a move on a board that still has a free cell.
    fn choose_cell(&mut self, view: &TurnView<'_>) -> Result<usize>;

    /// Short name used in logs and summaries
    fn name(&self) -> &str;
}
