//! # Workflows Module
//!
//! Top-level entry points that tie selection, search and the fallback puzzle
//! together. Callers hand over a word pool and a random source and always get
//! a usable layout back, along with a report of how it was obtained.
//!
//! - **Generation Workflow** ([`generate`]) - Bounded retry loop with fallback

pub mod generate;
