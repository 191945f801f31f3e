use crossweave::core::io::pool::PoolLoadError;
use crossweave::core::io::record::RecordError;
use crossweave::engine::audit::LayoutDefect;
use crossweave::engine::error::{AttemptFailure, EngineError};
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] EngineError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load word pool: {0}")]
    Pool(#[from] PoolLoadError),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Layout could not be generated: {0}")]
    Attempt(#[from] AttemptFailure),

    #[error("Every attempt failed and the fallback puzzle was refused ({attempts} attempt(s))")]
    FallbackRefused { attempts: usize },

    #[error("Stored layout is malformed: {0}")]
    Record(#[from] RecordError),

    #[error("Stored layout is invalid: {0}")]
    Defect(#[from] LayoutDefect),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
