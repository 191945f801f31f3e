use super::audit::audit_layout;
use super::error::EngineError;
use super::numbering::number_clues;
use super::placement::place_word;
use super::validator::can_place;
use crate::core::models::grid::{Direction, Grid};
use crate::core::models::layout::Layout;
use crate::core::models::word::Word;

pub const FALLBACK_GRID_SIZE: usize = 7;

/// Word, clue, start row, start column and direction, in placement order.
const FALLBACK_ENTRIES: [(&str, &str, usize, usize, Direction); 3] = [
    ("PLANET", "Earth, for one", 3, 0, Direction::Across),
    ("APPLE", "Orchard fruit", 2, 0, Direction::Down),
    ("TEN", "Number of fingers on two hands", 3, 5, Direction::Down),
];

/// The fixed puzzle handed out when every generation attempt has failed.
///
/// It is assembled through the same validator and mutator as a generated
/// layout and audited before it is returned, so a bad edit to the table above
/// surfaces as an error instead of a broken puzzle.
pub fn fallback_layout() -> Result<Layout, EngineError> {
    let mut grid = Grid::new(FALLBACK_GRID_SIZE);
    let mut placements = Vec::with_capacity(FALLBACK_ENTRIES.len());

    for (text, clue, row, col, direction) in FALLBACK_ENTRIES {
        let word = Word::new(text, clue).map_err(|e| EngineError::Fallback(e.to_string()))?;
        if !can_place(word.text(), row as isize, col as isize, direction, &grid) {
            return Err(EngineError::Fallback(format!(
                "'{}' cannot be placed at ({}, {}) {}",
                text, row, col, direction
            )));
        }
        place_word(&word, row, col, direction, &mut grid, &mut placements);
    }

    let entries = number_clues(placements, FALLBACK_GRID_SIZE);
    grid.freeze();
    let layout = Layout { grid, entries };
    audit_layout(&layout).map_err(|e| EngineError::Fallback(e.to_string()))?;
    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_valid_and_numbered() {
        let layout = fallback_layout().unwrap();
        assert_eq!(layout.grid_size(), 7);
        let numbered: Vec<_> = layout
            .entries
            .iter()
            .map(|e| (e.clue_number, e.placement.word.text()))
            .collect();
        assert_eq!(numbered, vec![(1, "APPLE"), (2, "PLANET"), (3, "TEN")]);
    }

    #[test]
    fn fallback_grid_renders_as_expected() {
        let layout = fallback_layout().unwrap();
        assert_eq!(
            layout.grid.to_string(),
            "#######\n\
             #######\n\
             A######\n\
             PLANET#\n\
             P####E#\n\
             L####N#\n\
             E######\n"
        );
    }

    #[test]
    fn fallback_carries_clues() {
        let layout = fallback_layout().unwrap();
        assert_eq!(
            layout.entry_for("PLANET").unwrap().placement.word.clue(),
            "Earth, for one"
        );
    }
}
