use crossweave::engine::config as core_config;
use std::path::PathBuf;

pub struct AppConfig {
    pub pool_path: PathBuf,
    pub output_path: Option<PathBuf>,
    pub seed: Option<u64>,
    pub allow_fallback: bool,
    pub core_config: core_config::GenerationConfig,
}
