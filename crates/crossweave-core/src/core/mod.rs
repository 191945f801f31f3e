//! # Core Module
//!
//! Stateless building blocks shared by the generation engine.
//!
//! - **Data model** ([`models`]) - Words, the tagged cell grid, placements and layouts
//! - **Heuristics** ([`scoring`]) - Letter-overlap scoring used when choosing word sets
//! - **I/O** ([`io`]) - Word-pool files and the persisted layout record

pub mod io;
pub mod models;
pub mod scoring;
