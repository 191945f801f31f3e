use thiserror::Error;

pub const DEFAULT_MAX_ATTEMPTS: usize = 50;
pub const DEFAULT_GRID_SIZE: usize = 7;
pub const DEFAULT_WORD_COUNTS: [usize; 2] = [3, 4];

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Parameter '{name}' must be at least {min}, got {value}")]
    TooSmall {
        name: &'static str,
        min: usize,
        value: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Upper bound on selection-plus-search attempts before the fallback is used.
    pub max_attempts: usize,
    pub grid_size: usize,
    /// Word counts an attempt may draw from, chosen uniformly per attempt.
    pub word_counts: Vec<usize>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            grid_size: DEFAULT_GRID_SIZE,
            word_counts: DEFAULT_WORD_COUNTS.to_vec(),
        }
    }
}

#[derive(Default)]
pub struct GenerationConfigBuilder {
    max_attempts: Option<usize>,
    grid_size: Option<usize>,
    word_counts: Option<Vec<usize>>,
}

impl GenerationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = Some(attempts);
        self
    }
    pub fn grid_size(mut self, size: usize) -> Self {
        self.grid_size = Some(size);
        self
    }
    pub fn word_counts(mut self, counts: Vec<usize>) -> Self {
        self.word_counts = Some(counts);
        self
    }
    /// Shorthand for a single, fixed word count on every attempt.
    pub fn word_count(mut self, count: usize) -> Self {
        self.word_counts = Some(vec![count]);
        self
    }

    pub fn build(self) -> Result<GenerationConfig, ConfigError> {
        let max_attempts = self
            .max_attempts
            .ok_or(ConfigError::MissingParameter("max_attempts"))?;
        let grid_size = self
            .grid_size
            .ok_or(ConfigError::MissingParameter("grid_size"))?;
        let word_counts = self
            .word_counts
            .ok_or(ConfigError::MissingParameter("word_counts"))?;

        at_least("max_attempts", max_attempts, 1)?;
        at_least("grid_size", grid_size, 1)?;
        at_least("word_counts.len", word_counts.len(), 1)?;
        for &count in &word_counts {
            at_least("word_counts", count, 1)?;
        }

        Ok(GenerationConfig {
            max_attempts,
            grid_size,
            word_counts,
        })
    }
}

fn at_least(name: &'static str, value: usize, min: usize) -> Result<(), ConfigError> {
    if value < min {
        return Err(ConfigError::TooSmall { name, min, value });
    }
    Ok(())
}
