//! Board representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::lines::{Line, LineAnalyzer, WINNING_LINES};

/// Number of cells on the board
pub const BOARD_SIZE: usize = 9;

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '0' => Some(Cell::Empty),
            'X' | 'x' | '1' => Some(Cell::X),
            'O' | 'o' | '2' => Some(Cell::O),
            _ => None,
        }
    }

    /// The other mark; `Empty` stays `Empty`
    pub fn swapped(self) -> Cell {
        match self {
            Cell::X => Cell::O,
            Cell::O => Cell::X,
            Cell::Empty => Cell::Empty,
        }
    }
}

/// One of the two fixed player slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    A,
    B,
}

impl Seat {
    /// Both seats in table order
    pub const ALL: [Seat; 2] = [Seat::A, Seat::B];

    /// Get the other seat
    pub fn other(self) -> Seat {
        match self {
            Seat::A => Seat::B,
            Seat::B => Seat::A,
        }
    }

    /// Mark this seat puts on the board
    pub fn mark(self) -> Cell {
        match self {
            Seat::A => Cell::X,
            Seat::B => Cell::O,
        }
    }

    /// Index into per-seat arrays
    pub fn index(self) -> usize {
        match self {
            Seat::A => 0,
            Seat::B => 1,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::A => write!(f, "A"),
            Seat::B => write!(f, "B"),
        }
    }
}

impl FromStr for Seat {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" | "1" | "x" => Ok(Seat::A),
            "b" | "2" | "o" => Ok(Seat::B),
            _ => Err(crate::Error::UnknownSeat {
                input: s.to_string(),
            }),
        }
    }
}

/// The 3x3 grid, row-major
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    /// Parse a board from its text form.
    ///
    /// Whitespace is ignored; exactly nine characters must remain, read row-major.
    ///
    /// # Errors
    ///
    /// Returns error if other than 9 characters remain or any character is not a
    /// valid cell representation.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != BOARD_SIZE {
            return Err(crate::Error::InvalidBoardLength {
                expected: BOARD_SIZE,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; BOARD_SIZE];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }
        Ok(Board { cells })
    }

    /// Get cell at position (0-8)
    pub fn get(&self, cell: usize) -> Cell {
        self.cells[cell]
    }

    /// Check if a position is empty
    pub fn is_free(&self, cell: usize) -> bool {
        self.cells[cell] == Cell::Empty
    }

    /// Put `mark` on an empty cell.
    ///
    /// Placing on an occupied cell is a caller bug.
    pub fn place(&mut self, cell: usize, mark: Cell) {
        debug_assert!(self.is_free(cell), "cell {cell} is already occupied");
        debug_assert!(mark != Cell::Empty);
        self.cells[cell] = mark;
    }

    /// Reset a cell to empty (used to undo tentative placements)
    pub fn clear_cell(&mut self, cell: usize) {
        self.cells[cell] = Cell::Empty;
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells = [Cell::Empty; BOARD_SIZE];
    }

    /// The line through `cell` that is uniformly marked, if any
    pub fn line_completed_at(&self, cell: usize) -> Option<Line> {
        LineAnalyzer::completed_at(&self.cells, cell)
    }

    /// First completed line anywhere on the board
    pub fn winning_line(&self) -> Option<Line> {
        WINNING_LINES
            .iter()
            .copied()
            .find(|line| line.is_uniform(&self.cells))
    }

    /// Get all empty positions in ascending order
    pub fn free_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    pub fn count(&self, mark: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == mark).count()
    }

    /// Count the number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Swap X and O pieces on the board
    #[must_use = "swap_marks returns a new board; the original is unchanged"]
    pub fn swap_marks(&self) -> Self {
        let mut swapped = *self;
        for cell in &mut swapped.cells {
            *cell = cell.swapped();
        }
        swapped
    }

    /// Nine-character key form, e.g. `XO.......`
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
