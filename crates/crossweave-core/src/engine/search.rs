use super::connectivity::component_count;
use super::error::AttemptFailure;
use super::numbering::number_clues;
use super::placement::place_word;
use super::validator::can_place;
use crate::core::models::grid::{Direction, Grid};
use crate::core::models::layout::Layout;
use crate::core::models::placement::Placement;
use crate::core::models::word::Word;
use tracing::{debug, instrument, trace};

/// Start coordinate and direction for a word about to be placed.
type Spot = (isize, isize, Direction);

/// Lays out every word on a `grid_size` board, or reports why it could not.
///
/// The longest word is centred across; every other word must cross something
/// already placed. The scan is first-fit in a fixed order (unplaced words, then
/// placed words, then candidate letter, then placed letter), and the scan
/// restarts after each success so later words can hook onto earlier ones.
#[instrument(level = "debug", skip_all, fields(words = words.len(), grid_size = grid_size))]
pub fn run(words: &[Word], grid_size: usize) -> Result<Layout, AttemptFailure> {
    let mut ordered: Vec<&Word> = words.iter().collect();
    ordered.sort_by(|a, b| b.len().cmp(&a.len()));

    let Some((&longest, rest)) = ordered.split_first() else {
        return Err(AttemptFailure::PlacementExhausted {
            placed: 0,
            unplaced: 0,
        });
    };

    let mut grid = Grid::new(grid_size);
    let mut placements: Vec<Placement> = Vec::with_capacity(ordered.len());

    let row = (grid_size / 2) as isize;
    let col = (grid_size as isize - longest.len() as isize).div_euclid(2);
    if !can_place(longest.text(), row, col, Direction::Across, &grid) {
        debug!(word = longest.text(), "Seed word does not fit the grid.");
        return Err(AttemptFailure::PlacementExhausted {
            placed: 0,
            unplaced: ordered.len(),
        });
    }
    place_word(
        longest,
        row as usize,
        col as usize,
        Direction::Across,
        &mut grid,
        &mut placements,
    );

    let mut unplaced: Vec<&Word> = rest.to_vec();
    while !unplaced.is_empty() {
        let found = unplaced.iter().enumerate().find_map(|(idx, word)| {
            find_crossing(word, &placements, &grid).map(|spot| (idx, spot))
        });

        let Some((idx, (r, c, direction))) = found else {
            debug!(
                placed = placements.len(),
                unplaced = unplaced.len(),
                "No remaining word crosses the layout."
            );
            return Err(AttemptFailure::PlacementExhausted {
                placed: placements.len(),
                unplaced: unplaced.len(),
            });
        };

        let word = unplaced.remove(idx);
        trace!(word = word.text(), row = r, col = c, %direction, "Word placed.");
        place_word(word, r as usize, c as usize, direction, &mut grid, &mut placements);
    }

    let components = component_count(&placements);
    if components > 1 {
        debug!(components, "Layout is not connected.");
        return Err(AttemptFailure::DisconnectedLayout { components });
    }

    let entries = number_clues(placements, grid_size);
    grid.freeze();
    Ok(Layout { grid, entries })
}

/// Standalone entry point: the layout on success, `None` on any attempt failure.
pub fn generate_layout(words: &[Word], grid_size: usize) -> Option<Layout> {
    match run(words, grid_size) {
        Ok(layout) => Some(layout),
        Err(failure) => {
            debug!(%failure, "Layout attempt failed.");
            None
        }
    }
}

/// First spot where `word` crosses an existing placement and passes validation.
fn find_crossing(word: &Word, placements: &[Placement], grid: &Grid) -> Option<Spot> {
    let letters = word.letters();
    for placed in placements {
        let placed_letters = placed.word.letters();
        let (base_row, base_col) = (placed.start_row as isize, placed.start_col as isize);
        for (j, &letter) in letters.iter().enumerate() {
            for (k, &placed_letter) in placed_letters.iter().enumerate() {
                if letter != placed_letter {
                    continue;
                }
                let (j, k) = (j as isize, k as isize);
                let spot = match placed.direction {
                    Direction::Across => (base_row - j, base_col + k, Direction::Down),
                    Direction::Down => (base_row + k, base_col - j, Direction::Across),
                };
                if can_place(word.text(), spot.0, spot.1, spot.2, grid) {
                    return Some(spot);
                }
            }
        }
    }
    None
}
