use crossweave::engine::config::{DEFAULT_GRID_SIZE, DEFAULT_MAX_ATTEMPTS, DEFAULT_WORD_COUNTS};

pub struct DefaultsConfig {
    pub max_attempts: usize,
    pub grid_size: usize,
    pub word_counts: Vec<usize>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            grid_size: DEFAULT_GRID_SIZE,
            word_counts: DEFAULT_WORD_COUNTS.to_vec(),
        }
    }
}
