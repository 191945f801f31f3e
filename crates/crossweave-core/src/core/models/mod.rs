//! Data structures shared by every stage of generation: words, the cell grid,
//! placements and the finished layout.

pub mod grid;
pub mod layout;
pub mod placement;
pub mod word;
