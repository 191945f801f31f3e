use crate::core::models::grid::{Cell, Direction, Grid};
use crate::core::models::placement::Placement;
use crate::core::models::word::Word;

/// Commits a placement that [`can_place`](super::validator::can_place) has already approved.
///
/// Letters are written unconditionally; on intersection cells this rewrites the
/// letter that is already there.
pub fn place_word(
    word: &Word,
    row: usize,
    col: usize,
    direction: Direction,
    grid: &mut Grid,
    placements: &mut Vec<Placement>,
) {
    let placement = Placement::new(word.clone(), row, col, direction);
    for (r, c, letter) in placement.cells() {
        grid.set(r as isize, c as isize, Cell::Letter(letter));
    }
    placements.push(placement);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_letters_and_records_the_placement() {
        let mut grid = Grid::new(5);
        let mut placements = Vec::new();
        let word = Word::bare("CAT").unwrap();

        place_word(&word, 1, 1, Direction::Down, &mut grid, &mut placements);

        assert_eq!(grid.get(1, 1), Some(Cell::Letter('C')));
        assert_eq!(grid.get(2, 1), Some(Cell::Letter('A')));
        assert_eq!(grid.get(3, 1), Some(Cell::Letter('T')));
        assert_eq!(grid.letter_count(), 3);
        assert_eq!(placements, vec![Placement::new(word, 1, 1, Direction::Down)]);
    }

    #[test]
    fn intersection_cells_are_written_idempotently() {
        let mut grid = Grid::new(5);
        let mut placements = Vec::new();
        place_word(&Word::bare("CAT").unwrap(), 2, 0, Direction::Across, &mut grid, &mut placements);
        place_word(&Word::bare("ART").unwrap(), 2, 1, Direction::Down, &mut grid, &mut placements);

        assert_eq!(grid.get(2, 1), Some(Cell::Letter('A')));
        assert_eq!(grid.letter_count(), 5);
        assert_eq!(placements.len(), 2);
    }
}
