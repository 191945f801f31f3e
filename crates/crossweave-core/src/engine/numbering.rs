use crate::core::models::placement::{ClueEntry, Placement};

/// Orders placements by reading position and numbers them from 1.
///
/// An across and a down word starting on the same cell get consecutive,
/// distinct numbers; the sort is stable so they keep their placement order.
pub fn number_clues(placements: Vec<Placement>, grid_size: usize) -> Vec<ClueEntry> {
    let mut placements = placements;
    placements.sort_by_key(|p| p.reading_position(grid_size));
    placements
        .into_iter()
        .enumerate()
        .map(|(i, placement)| ClueEntry {
            clue_number: i as u32 + 1,
            placement,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::grid::Direction;
    use crate::core::models::word::Word;

    fn p(text: &str, row: usize, col: usize, direction: Direction) -> Placement {
        Placement::new(Word::bare(text).unwrap(), row, col, direction)
    }

    #[test]
    fn numbers_follow_reading_order() {
        let entries = number_clues(
            vec![
                p("PLANET", 3, 0, Direction::Across),
                p("TEN", 3, 5, Direction::Down),
                p("APPLE", 2, 0, Direction::Down),
            ],
            7,
        );
        let order: Vec<_> = entries
            .iter()
            .map(|e| (e.clue_number, e.placement.word.text()))
            .collect();
        assert_eq!(order, vec![(1, "APPLE"), (2, "PLANET"), (3, "TEN")]);
    }

    #[test]
    fn co_located_words_get_distinct_numbers() {
        let entries = number_clues(
            vec![p("CAT", 0, 0, Direction::Across), p("COW", 0, 0, Direction::Down)],
            5,
        );
        assert_eq!(entries[0].clue_number, 1);
        assert_eq!(entries[0].placement.word.text(), "CAT");
        assert_eq!(entries[1].clue_number, 2);
        assert_eq!(entries[1].placement.word.text(), "COW");
    }

    #[test]
    fn empty_input_yields_no_entries() {
        assert!(number_clues(Vec::new(), 7).is_empty());
    }
}
