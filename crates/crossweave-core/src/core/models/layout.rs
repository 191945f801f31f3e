use super::grid::Grid;
use super::placement::{ClueEntry, Placement};

/// The frozen result of a successful generation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub grid: Grid,
    pub entries: Vec<ClueEntry>,
}

impl Layout {
    pub fn grid_size(&self) -> usize {
        self.grid.size()
    }

    pub fn placements(&self) -> impl Iterator<Item = &Placement> {
        self.entries.iter().map(|e| &e.placement)
    }

    pub fn entry_for(&self, word: &str) -> Option<&ClueEntry> {
        self.entries.iter().find(|e| e.placement.word.text() == word)
    }

    pub fn words(&self) -> Vec<&str> {
        self.placements().map(|p| p.word.text()).collect()
    }
}
