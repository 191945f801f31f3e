use super::grid::Direction;
use super::word::Word;

/// A word committed to the grid at a start coordinate and direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub word: Word,
    pub start_row: usize,
    pub start_col: usize,
    pub direction: Direction,
}

impl Placement {
    pub fn new(word: Word, start_row: usize, start_col: usize, direction: Direction) -> Self {
        Self {
            word,
            start_row,
            start_col,
            direction,
        }
    }

    pub fn len(&self) -> usize {
        self.word.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Row and column of the last occupied cell.
    pub fn end(&self) -> (usize, usize) {
        let last = self.len().saturating_sub(1);
        match self.direction {
            Direction::Across => (self.start_row, self.start_col.saturating_add(last)),
            Direction::Down => (self.start_row.saturating_add(last), self.start_col),
        }
    }

    /// Like [`Placement::end`], but `None` when the run would pass `usize::MAX`.
    pub fn checked_end(&self) -> Option<(usize, usize)> {
        let last = self.len().saturating_sub(1);
        match self.direction {
            Direction::Across => Some((self.start_row, self.start_col.checked_add(last)?)),
            Direction::Down => Some((self.start_row.checked_add(last)?, self.start_col)),
        }
    }

    /// Every occupied cell paired with the letter written there, in reading order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        let (dr, dc) = match self.direction {
            Direction::Across => (0, 1),
            Direction::Down => (1, 0),
        };
        self.word
            .text()
            .chars()
            .enumerate()
            .map(move |(i, c)| (self.start_row + i * dr, self.start_col + i * dc, c))
    }

    /// Position used for clue ordering: `row * grid_size + col`.
    pub fn reading_position(&self, grid_size: usize) -> usize {
        self.start_row * grid_size + self.start_col
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClueEntry {
    pub clue_number: u32,
    pub placement: Placement,
}
