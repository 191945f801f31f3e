//! The serialized shape a finished layout takes when it crosses into storage.

use crate::core::models::grid::{BLOCKED_SENTINEL, Cell, Direction, Grid};
use crate::core::models::layout::Layout;
use crate::core::models::placement::{ClueEntry, Placement};
use crate::core::models::word::{Word, WordError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("Grid has {found} row(s), expected {expected}")]
    RowCount { expected: usize, found: usize },
    #[error("Grid row {row} has {found} cell(s), expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Grid cell ({row}, {col}) holds '{value}', expected a letter or '#'")]
    InvalidCell { row: usize, col: usize, value: char },
    #[error("Placement {index} starts at ({row}, {col}), outside the {size}x{size} grid")]
    StartOutOfBounds {
        index: usize,
        row: usize,
        col: usize,
        size: usize,
    },
    #[error("Placement {index} has an invalid word: {source}")]
    InvalidWord {
        index: usize,
        #[source]
        source: WordError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementRecord {
    pub word: String,
    #[serde(default)]
    pub clue: String,
    pub start_row: usize,
    pub start_col: usize,
    pub direction: Direction,
    pub clue_number: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutRecord {
    pub grid_size: usize,
    pub grid: Vec<Vec<char>>,
    pub placements: Vec<PlacementRecord>,
}

impl From<&Layout> for LayoutRecord {
    fn from(layout: &Layout) -> Self {
        let grid = layout
            .grid
            .rows()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Cell::Letter(c) => *c,
                        // Open cells never survive freezing; render them blocked regardless.
                        Cell::Open | Cell::Blocked => BLOCKED_SENTINEL,
                    })
                    .collect()
            })
            .collect();

        let placements = layout
            .entries
            .iter()
            .map(|entry| PlacementRecord {
                word: entry.placement.word.text().to_string(),
                clue: entry.placement.word.clue().to_string(),
                start_row: entry.placement.start_row,
                start_col: entry.placement.start_col,
                direction: entry.placement.direction,
                clue_number: entry.clue_number,
            })
            .collect();

        Self {
            grid_size: layout.grid_size(),
            grid,
            placements,
        }
    }
}

impl LayoutRecord {
    /// Rebuilds the in-memory layout. Only the shape and the placement start cells
    /// are checked here; whether the placements agree with the grid is the job of
    /// the layout audit.
    pub fn try_into_layout(&self) -> Result<Layout, RecordError> {
        let size = self.grid_size;
        if self.grid.len() != size {
            return Err(RecordError::RowCount {
                expected: size,
                found: self.grid.len(),
            });
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in self.grid.iter().enumerate() {
            if values.len() != size {
                return Err(RecordError::RowLength {
                    row,
                    expected: size,
                    found: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                let cell = if value == BLOCKED_SENTINEL {
                    Cell::Blocked
                } else if value.is_ascii_alphabetic() {
                    Cell::Letter(value.to_ascii_uppercase())
                } else {
                    return Err(RecordError::InvalidCell { row, col, value });
                };
                cells.push(cell);
            }
        }
        let grid = Grid::from_cells(size, cells).ok_or(RecordError::RowCount {
            expected: size,
            found: self.grid.len(),
        })?;

        let entries = self
            .placements
            .iter()
            .enumerate()
            .map(|(index, p)| {
                if p.start_row >= size || p.start_col >= size {
                    return Err(RecordError::StartOutOfBounds {
                        index,
                        row: p.start_row,
                        col: p.start_col,
                        size,
                    });
                }
                let word = Word::new(&p.word, &p.clue)
                    .map_err(|source| RecordError::InvalidWord { index, source })?;
                Ok(ClueEntry {
                    clue_number: p.clue_number,
                    placement: Placement::new(word, p.start_row, p.start_col, p.direction),
                })
            })
            .collect::<Result<Vec<_>, RecordError>>()?;

        Ok(Layout { grid, entries })
    }
}
