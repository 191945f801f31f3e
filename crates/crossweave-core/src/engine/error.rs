use super::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Fallback layout failed its own audit: {0}")]
    Fallback(String),
}

/// Why a single generation attempt was abandoned.
///
/// These are ordinary outcomes of a randomized search, not errors: the
/// supervisor counts them and moves on to the next attempt.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AttemptFailure {
    #[error("placement exhausted with {placed} word(s) placed and {unplaced} left over")]
    PlacementExhausted { placed: usize, unplaced: usize },

    #[error("layout split into {components} disconnected group(s)")]
    DisconnectedLayout { components: usize },
}
