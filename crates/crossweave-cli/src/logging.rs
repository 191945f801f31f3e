use crate::error::{CliError, Result};
use std::fs::File;
use std::path::PathBuf;
use tracing_subscriber::{
    EnvFilter,
    filter::LevelFilter,
    fmt::{self},
    prelude::*,
};

/// Environment variable that, when set, replaces the verbosity flags with a full filter directive.
pub const LOG_ENV_VAR: &str = "CROSSWEAVE_LOG";

fn level_for(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::ERROR
    } else {
        match verbosity {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

fn build_filter(verbosity: u8, quiet: bool) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(level_for(verbosity, quiet).into())
        .with_env_var(LOG_ENV_VAR)
        .from_env_lossy()
}

pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<PathBuf>) -> Result<()> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(build_filter(verbosity, quiet))
        .with(stderr_layer);

    if let Some(path) = log_file {
        let file = File::create(&path).map_err(CliError::Io)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_thread_ids(true)
            .with_target(true);

        subscriber.with(file_layer).init();
    } else {
        subscriber.init();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn with_log_env<T>(value: Option<&str>, f: impl FnOnce() -> T) -> T {
        let previous = std::env::var(LOG_ENV_VAR).ok();
        // SAFETY: tests touching the environment run under `#[serial]`.
        unsafe {
            match value {
                Some(v) => std::env::set_var(LOG_ENV_VAR, v),
                None => std::env::remove_var(LOG_ENV_VAR),
            }
        }
        let result = f();
        unsafe {
            match previous {
                Some(v) => std::env::set_var(LOG_ENV_VAR, v),
                None => std::env::remove_var(LOG_ENV_VAR),
            }
        }
        result
    }

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_for(0, false), LevelFilter::WARN);
        assert_eq!(level_for(1, false), LevelFilter::INFO);
        assert_eq!(level_for(2, false), LevelFilter::DEBUG);
        assert_eq!(level_for(9, false), LevelFilter::TRACE);
        assert_eq!(level_for(3, true), LevelFilter::ERROR);
    }

    #[test]
    #[serial]
    fn filter_follows_verbosity_without_env_override() {
        let hint = with_log_env(None, || build_filter(1, false).max_level_hint());
        assert_eq!(hint, Some(LevelFilter::INFO));

        let hint = with_log_env(None, || build_filter(2, true).max_level_hint());
        assert_eq!(hint, Some(LevelFilter::ERROR));
    }

    #[test]
    #[serial]
    fn env_var_overrides_verbosity_flags() {
        let hint = with_log_env(Some("trace"), || build_filter(0, false).max_level_hint());
        assert_eq!(hint, Some(LevelFilter::TRACE));

        let hint = with_log_env(Some("error"), || build_filter(3, false).max_level_hint());
        assert_eq!(hint, Some(LevelFilter::ERROR));
    }

    #[test]
    #[serial]
    fn invalid_log_file_path_propagates_error() {
        let invalid_path = PathBuf::from("/");

        if cfg!(unix) && invalid_path.is_dir() {
            let result = setup_logging(0, false, Some(invalid_path));
            assert!(matches!(result, Err(CliError::Io(_))));
        }
    }
}
