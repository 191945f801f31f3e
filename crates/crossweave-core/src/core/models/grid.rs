use serde::{Deserialize, Serialize};
use std::fmt;

/// Character used for blocked cells whenever a grid leaves the engine.
pub const BLOCKED_SENTINEL: char = '#';

/// Character used to render cells that are still open during generation.
pub const OPEN_SENTINEL: char = '.';

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Direction::Across => Direction::Down,
            Direction::Down => Direction::Across,
        }
    }

    /// Unit `(row, col)` step along this direction.
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Across => (0, 1),
            Direction::Down => (1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Direction::Across => "across",
                Direction::Down => "down",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Open,
    Letter(char),
    Blocked,
}

impl Cell {
    pub fn is_open(self) -> bool {
        matches!(self, Cell::Open)
    }

    pub fn letter(self) -> Option<char> {
        match self {
            Cell::Letter(c) => Some(c),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Open => OPEN_SENTINEL,
            Cell::Letter(c) => c,
            Cell::Blocked => BLOCKED_SENTINEL,
        }
    }
}

/// A square board of cells addressed by `(row, col)`.
///
/// Lookups take signed coordinates so callers can probe one step outside the
/// board without special-casing the edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Open; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, row: isize, col: isize) -> Option<usize> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(row * self.size + col)
    }

    pub fn contains(&self, row: isize, col: isize) -> bool {
        self.index(row, col).is_some()
    }

    /// Returns `None` when the coordinate falls outside the board.
    pub fn get(&self, row: isize, col: isize) -> Option<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// True when the coordinate is off the board or holds an open cell.
    pub fn is_open_or_outside(&self, row: isize, col: isize) -> bool {
        self.get(row, col).is_none_or(Cell::is_open)
    }

    pub(crate) fn set(&mut self, row: isize, col: isize, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Converts every remaining open cell into a blocked one.
    pub fn freeze(&mut self) {
        for cell in &mut self.cells {
            if cell.is_open() {
                *cell = Cell::Blocked;
            }
        }
    }

    pub fn is_frozen(&self) -> bool {
        !self.cells.iter().any(|c| c.is_open())
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // `max(1)` keeps `chunks` happy for the degenerate zero-sized grid.
        self.cells.chunks(self.size.max(1))
    }

    pub fn letter_count(&self) -> usize {
        self.cells.iter().filter(|c| c.letter().is_some()).count()
    }

    pub(crate) fn from_cells(size: usize, cells: Vec<Cell>) -> Option<Self> {
        (cells.len() == size * size).then_some(Self { size, cells })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: String = row.iter().map(|c| c.to_char()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
