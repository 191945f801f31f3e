use crate::core::models::grid::{Cell, Direction, Grid};

/// Decides whether `word` may occupy the run starting at `(row, col)` along `direction`.
///
/// A placement is rejected when it leaves the board, when the cells directly
/// before or after the run are occupied, when it disagrees with a letter already
/// on the board, or when a freshly written letter would touch an unrelated
/// letter on either side perpendicular to the run.
pub fn can_place(word: &str, row: isize, col: isize, direction: Direction, grid: &Grid) -> bool {
    let len = word.chars().count() as isize;
    if len == 0 || row < 0 || col < 0 {
        return false;
    }

    let (dr, dc) = direction.step();
    let (end_row, end_col) = (row + dr * (len - 1), col + dc * (len - 1));
    if !grid.contains(end_row, end_col) {
        return false;
    }

    if !grid.is_open_or_outside(row - dr, col - dc)
        || !grid.is_open_or_outside(end_row + dr, end_col + dc)
    {
        return false;
    }

    // Perpendicular neighbours sit one step along the other axis.
    let (pr, pc) = direction.flipped().step();

    word.chars().enumerate().all(|(i, letter)| {
        let (r, c) = (row + dr * i as isize, col + dc * i as isize);
        match grid.get(r, c) {
            Some(Cell::Open) => {
                grid.is_open_or_outside(r - pr, c - pc) && grid.is_open_or_outside(r + pr, c + pc)
            }
            Some(Cell::Letter(existing)) => existing == letter,
            Some(Cell::Blocked) | None => false,
        }
    })
}
