//! Winning lines of the 3x3 grid

use std::{fmt, sync::LazyLock};

use serde::{Deserialize, Serialize};

use super::Cell;

/// Three cell indices that win when uniformly marked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line(pub [usize; 3]);

impl Line {
    /// Cell indices of the line, in ascending order
    pub fn cells(&self) -> [usize; 3] {
        self.0
    }

    /// Whether the line contains the given cell
    pub fn contains(&self, cell: usize) -> bool {
        self.0.contains(&cell)
    }

    /// True when all three cells hold the same non-empty mark
    pub fn is_uniform(&self, cells: &[Cell; 9]) -> bool {
        let [a, b, c] = self.cells();
        cells[a] != Cell::Empty && cells[a] == cells[b] && cells[b] == cells[c]
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{a}-{b}-{c}")
    }
}

/// Winning lines on the 3x3 board
pub const WINNING_LINES: [Line; 8] = [
    Line([0, 1, 2]),
    Line([3, 4, 5]),
    Line([6, 7, 8]), // rows
    Line([0, 3, 6]),
    Line([1, 4, 7]),
    Line([2, 5, 8]), // columns
    Line([0, 4, 8]),
    Line([2, 4, 6]), // diagonals
];

static LINES_AT_CELL: LazyLock<[Vec<Line>; 9]> = LazyLock::new(|| {
    std::array::from_fn(|cell| {
        WINNING_LINES
            .iter()
            .copied()
            .filter(|line| line.contains(cell))
            .collect()
    })
});

/// Lines passing through `cell`, in [`WINNING_LINES`] order
pub fn lines_at(cell: usize) -> &'static [Line] {
    &LINES_AT_CELL[cell]
}

/// Utility for analyzing winning lines
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// First line through `cell` whose three cells hold equal non-empty marks
    pub fn completed_at(cells: &[Cell; 9], cell: usize) -> Option<Line> {
        lines_at(cell)
            .iter()
            .copied()
            .find(|line| line.is_uniform(cells))
    }

    /// First free cell that would complete a line for `mark`, in ascending order
    pub fn first_completing_cell(cells: &[Cell; 9], mark: Cell) -> Option<usize> {
        debug_assert!(mark != Cell::Empty);
        (0..9).filter(|&idx| cells[idx] == Cell::Empty).find(|&idx| {
            let mut trial = *cells;
            trial[idx] = mark;
            Self::completed_at(&trial, idx).is_some()
        })
    }
}
