use super::connectivity::component_count;
use crate::core::models::grid::{Cell, Direction};
use crate::core::models::layout::Layout;
use std::collections::HashMap;
use thiserror::Error;

/// The first rule a layout breaks, as found by [`audit_layout`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutDefect {
    #[error("Cell ({row}, {col}) is still open; the grid was never frozen")]
    OpenCell { row: usize, col: usize },

    #[error("'{word}' runs off the {size}x{size} grid")]
    OutOfBounds { word: String, size: usize },

    #[error("'{word}' expects '{expected}' at ({row}, {col}) but the grid holds '{found}'")]
    LetterMismatch {
        word: String,
        row: usize,
        col: usize,
        expected: char,
        found: char,
    },

    #[error("Placements disagree at ({row}, {col}): '{first}' vs '{second}'")]
    ConflictingLetters {
        row: usize,
        col: usize,
        first: char,
        second: char,
    },

    #[error("'{word}' is not separated from a neighbouring letter at its {side}")]
    UnterminatedRun { word: String, side: &'static str },

    #[error("Letter '{letter}' at ({row}, {col}) belongs to no placement")]
    StrayLetter { row: usize, col: usize, letter: char },

    #[error("Layout splits into {components} disconnected group(s)")]
    Disconnected { components: usize },

    #[error("Clue numbers are not 1..={expected} in reading order (found {found:?})")]
    ClueNumbering { expected: usize, found: Vec<u32> },
}

/// Checks a finished layout against every invariant a generated layout carries.
///
/// Stored layouts and the built-in fallback go through here before anyone relies
/// on them; freshly generated layouts satisfy it by construction.
pub fn audit_layout(layout: &Layout) -> Result<(), LayoutDefect> {
    let grid = &layout.grid;
    let size = grid.size();

    for (row, cells) in grid.rows().enumerate() {
        if let Some(col) = cells.iter().position(|c| c.is_open()) {
            return Err(LayoutDefect::OpenCell { row, col });
        }
    }

    let mut covered: HashMap<(usize, usize), char> = HashMap::new();
    for placement in layout.placements() {
        let word = placement.word.text();
        let Some((end_row, end_col)) = placement
            .checked_end()
            .filter(|&(r, c)| r < size && c < size)
        else {
            return Err(LayoutDefect::OutOfBounds {
                word: word.to_string(),
                size,
            });
        };

        for (row, col, expected) in placement.cells() {
            let found = grid
                .get(row as isize, col as isize)
                .map(Cell::to_char)
                .unwrap_or(' ');
            if found != expected {
                return Err(LayoutDefect::LetterMismatch {
                    word: word.to_string(),
                    row,
                    col,
                    expected,
                    found,
                });
            }
            if let Some(&first) = covered.get(&(row, col)) {
                if first != expected {
                    return Err(LayoutDefect::ConflictingLetters {
                        row,
                        col,
                        first,
                        second: expected,
                    });
                }
            }
            covered.insert((row, col), expected);
        }

        let (dr, dc) = placement.direction.step();
        let (start_row, start_col) = (placement.start_row as isize, placement.start_col as isize);
        let before = grid.get(start_row - dr, start_col - dc);
        let after = grid.get(end_row as isize + dr, end_col as isize + dc);
        for (cell, side) in [(before, "start"), (after, "end")] {
            if cell.and_then(Cell::letter).is_some() {
                return Err(LayoutDefect::UnterminatedRun {
                    word: word.to_string(),
                    side,
                });
            }
        }
    }

    for (row, cells) in grid.rows().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            if let Some(letter) = cell.letter() {
                if !covered.contains_key(&(row, col)) {
                    return Err(LayoutDefect::StrayLetter { row, col, letter });
                }
            }
        }
    }

    let placements: Vec<_> = layout.placements().cloned().collect();
    let components = component_count(&placements);
    if components > 1 {
        return Err(LayoutDefect::Disconnected { components });
    }

    let found: Vec<u32> = layout.entries.iter().map(|e| e.clue_number).collect();
    let numbered_in_order = found.iter().enumerate().all(|(i, &n)| n as usize == i + 1);
    let reading_order = layout
        .placements()
        .map(|p| p.reading_position(size))
        .collect::<Vec<_>>()
        .windows(2)
        .all(|w| w[0] <= w[1]);
    if !numbered_in_order || !reading_order {
        return Err(LayoutDefect::ClueNumbering {
            expected: found.len(),
            found,
        });
    }

    Ok(())
}

/// Counts how many entries run in each direction; handy for summaries.
pub fn direction_counts(layout: &Layout) -> (usize, usize) {
    layout
        .placements()
        .fold((0, 0), |(across, down), p| match p.direction {
            Direction::Across => (across + 1, down),
            Direction::Down => (across, down + 1),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::grid::Grid;
    use crate::core::models::word::Word;
    use crate::engine::search::run;

    fn sample() -> Layout {
        let words: Vec<_> = ["CAT", "CAR", "ART"]
            .iter()
            .map(|t| Word::bare(t).unwrap())
            .collect();
        run(&words, 7).unwrap()
    }

    #[test]
    fn generated_layout_passes() {
        assert_eq!(audit_layout(&sample()), Ok(()));
    }

    #[test]
    fn unfrozen_grid_is_reported() {
        let mut layout = sample();
        layout.grid = Grid::new(7);
        assert_eq!(
            audit_layout(&layout),
            Err(LayoutDefect::OpenCell { row: 0, col: 0 })
        );
    }

    #[test]
    fn tampered_letter_is_reported() {
        let mut layout = sample();
        let first = layout.entries[0].placement.clone();
        let (row, col, _) = first.cells().next().unwrap();
        layout
            .grid
            .set(row as isize, col as isize, Cell::Letter('Q'));
        assert!(matches!(
            audit_layout(&layout),
            Err(LayoutDefect::LetterMismatch { found: 'Q', .. })
        ));
    }

    #[test]
    fn placement_starting_near_usize_max_is_out_of_bounds() {
        let mut layout = sample();
        layout.entries[0].placement.start_row = usize::MAX;
        layout.entries[0].placement.direction = Direction::Down;
        let word = layout.entries[0].placement.word.text().to_string();
        assert_eq!(
            audit_layout(&layout),
            Err(LayoutDefect::OutOfBounds { word, size: 7 })
        );
    }

    #[test]
    fn stray_letter_is_reported() {
        let mut layout = sample();
        layout.grid.set(0, 0, Cell::Letter('X'));
        assert_eq!(
            audit_layout(&layout),
            Err(LayoutDefect::StrayLetter {
                row: 0,
                col: 0,
                letter: 'X'
            })
        );
    }

    #[test]
    fn shuffled_clue_numbers_are_reported() {
        let mut layout = sample();
        layout.entries.swap(0, 1);
        assert!(matches!(
            audit_layout(&layout),
            Err(LayoutDefect::ClueNumbering { expected: 3, .. })
        ));
    }

    #[test]
    fn direction_counts_split_across_and_down() {
        let (across, down) = direction_counts(&sample());
        assert_eq!(across + down, 3);
        assert!(across >= 1 && down >= 1);
    }
}
