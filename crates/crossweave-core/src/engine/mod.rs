//! # Engine Module
//!
//! The generation engine: everything needed to turn a handful of words into a
//! validated, connected and numbered crossword layout.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Attempt budget, grid size and word counts
//! - **Selection** ([`selection`]) - Overlap-biased choice of a word set from a pool
//! - **Validation and mutation** ([`validator`], [`placement`]) - Legality checks and grid writes
//! - **Search** ([`search`]) - First-fit intersection search for a full layout
//! - **Post-processing** ([`connectivity`], [`numbering`]) - Connectedness and clue numbers
//! - **Safety net** ([`fallback`], [`audit`]) - The fixed fallback puzzle and layout checks
//! - **Progress Monitoring** ([`progress`]) - Callback-based reporting for front ends
//! - **Error Handling** ([`error`]) - Engine errors and per-attempt failure kinds

pub mod audit;
pub mod config;
pub mod connectivity;
pub mod error;
pub mod fallback;
pub mod numbering;
pub mod placement;
pub mod progress;
pub mod search;
pub mod selection;
pub mod validator;
