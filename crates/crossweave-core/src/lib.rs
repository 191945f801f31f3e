//! # Crossweave Core Library
//!
//! A compact crossword grid synthesis engine. Given a pool of words with clues it
//! picks a small, letter-sharing subset, lays it out on a square grid through
//! first-fit intersection search, and numbers the clues in reading order.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Word`, `Grid`, `Layout`),
//!   the letter-overlap heuristic and word-pool / layout-record I/O.
//!
//! - **[`engine`]: The Logic Core.** Word selection, placement validation, the grid
//!   mutator, layout search, connectivity, clue numbering and the fallback puzzle.
//!
//! - **[`workflows`]: The Public API.** The generation supervisor that retries
//!   selection and search within a fixed budget and degrades to the fallback.
//!
//! Every attempt is synchronous and self-contained; randomness is always passed in
//! so results can be reproduced from a seed.

pub mod core;
pub mod engine;
pub mod workflows;
