//! Heuristics used to bias word selection toward sets that interlock well.
//! Nothing here affects the correctness of a layout.

pub mod overlap;
