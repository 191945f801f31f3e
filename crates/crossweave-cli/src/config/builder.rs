use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::GenerateArgs;
use crate::error::{CliError, Result};
use crossweave::engine::config as core_config;
use std::str::FromStr;

pub fn build_config(args: &GenerateArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let generation_file = file_config.generation.take().unwrap_or_default();
    let max_attempts = args
        .max_attempts
        .or(generation_file.max_attempts)
        .unwrap_or(defaults.max_attempts);
    let grid_size = args
        .grid_size
        .or(generation_file.grid_size)
        .unwrap_or(defaults.grid_size);
    let word_counts = args
        .word_count
        .map(|n| vec![n])
        .or(generation_file.word_counts)
        .unwrap_or(defaults.word_counts);
    let seed = args.seed.or(generation_file.seed);

    let output_file = file_config.output.take().unwrap_or_default();
    let allow_fallback = !args.no_fallback && output_file.allow_fallback.unwrap_or(true);

    let core_config = core_config::GenerationConfigBuilder::new()
        .max_attempts(max_attempts)
        .grid_size(grid_size)
        .word_counts(word_counts)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        pool_path: args.pool.clone(),
        output_path: args.output.clone(),
        seed,
        allow_fallback,
        core_config,
    })
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value)))
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };

        match key.trim() {
            "generation.max-attempts" => {
                config
                    .generation
                    .get_or_insert_with(Default::default)
                    .max_attempts = Some(parse_value(key, value_str, "integer")?);
            }
            "generation.grid-size" => {
                config.generation.get_or_insert_with(Default::default).grid_size =
                    Some(parse_value(key, value_str, "integer")?);
            }
            "generation.word-counts" => {
                let counts = value_str
                    .split(',')
                    .map(|part| parse_value(key, part, "integer list"))
                    .collect::<Result<Vec<usize>>>()?;
                config.generation.get_or_insert_with(Default::default).word_counts =
                    Some(counts);
            }
            "generation.seed" => {
                config.generation.get_or_insert_with(Default::default).seed =
                    Some(parse_value(key, value_str, "integer")?);
            }
            "output.allow-fallback" => {
                config
                    .output
                    .get_or_insert_with(Default::default)
                    .allow_fallback = Some(parse_value(key, value_str, "boolean")?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::tempdir;

    fn generate_args(extra: &[&str]) -> GenerateArgs {
        let mut argv = vec!["crossweave", "generate", "--pool", "words.csv"];
        argv.extend_from_slice(extra);
        match Cli::parse_from(argv).command {
            Commands::Generate(args) => args,
            other => panic!("Expected 'generate' subcommand, got {:?}", other),
        }
    }

    fn write_config_file(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("crossweave.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn defaults_apply_without_file_or_flags() {
        let app = build_config(&generate_args(&[])).expect("build ok");
        assert_eq!(app.pool_path, PathBuf::from("words.csv"));
        assert_eq!(app.core_config.max_attempts, 50);
        assert_eq!(app.core_config.grid_size, 7);
        assert_eq!(app.core_config.word_counts, vec![3, 4]);
        assert_eq!(app.seed, None);
        assert!(app.allow_fallback);
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempdir().unwrap();
        let config_path = write_config_file(
            dir.path(),
            r#"
            [generation]
            max-attempts = 12
            grid-size = 9
            word-counts = [4, 5]
            seed = 77

            [output]
            allow-fallback = false
            "#,
        );
        let args = generate_args(&["-c", config_path.to_str().unwrap()]);
        let app = build_config(&args).expect("build ok");

        assert_eq!(app.core_config.max_attempts, 12);
        assert_eq!(app.core_config.grid_size, 9);
        assert_eq!(app.core_config.word_counts, vec![4, 5]);
        assert_eq!(app.seed, Some(77));
        assert!(!app.allow_fallback);
    }

    #[test]
    fn cli_flags_override_file_values() {
        let dir = tempdir().unwrap();
        let config_path = write_config_file(
            dir.path(),
            "[generation]\nmax-attempts = 12\nword-counts = [4, 5]\nseed = 1\n",
        );
        let args = generate_args(&[
            "-c",
            config_path.to_str().unwrap(),
            "--max-attempts",
            "3",
            "-n",
            "3",
            "--seed",
            "2",
        ]);
        let app = build_config(&args).expect("build ok");

        assert_eq!(app.core_config.max_attempts, 3);
        assert_eq!(app.core_config.word_counts, vec![3]);
        assert_eq!(app.seed, Some(2));
    }

    #[test]
    fn set_values_override_file_but_not_flags() {
        let dir = tempdir().unwrap();
        let config_path = write_config_file(dir.path(), "[generation]\ngrid-size = 9\n");
        let args = generate_args(&[
            "-c",
            config_path.to_str().unwrap(),
            "-S",
            "generation.grid-size=11",
            "-S",
            "generation.word-counts=3, 5",
            "--max-attempts",
            "4",
            "-S",
            "generation.max-attempts=40",
        ]);
        let app = build_config(&args).expect("build ok");

        assert_eq!(app.core_config.grid_size, 11);
        assert_eq!(app.core_config.word_counts, vec![3, 5]);
        assert_eq!(app.core_config.max_attempts, 4);
    }

    #[test]
    fn unknown_set_key_is_rejected() {
        let args = generate_args(&["-S", "generation.theme=animals"]);
        assert!(matches!(build_config(&args), Err(CliError::Config(_))));
    }

    #[test]
    fn malformed_set_value_is_rejected() {
        let args = generate_args(&["-S", "generation.seed"]);
        assert!(matches!(build_config(&args), Err(CliError::Config(_))));

        let args = generate_args(&["-S", "output.allow-fallback=maybe"]);
        assert!(matches!(build_config(&args), Err(CliError::Config(_))));
    }

    #[test]
    fn unknown_file_keys_fail_to_parse() {
        let dir = tempdir().unwrap();
        let config_path = write_config_file(dir.path(), "[generation]\nthemes = 3\n");
        let args = generate_args(&["-c", config_path.to_str().unwrap()]);
        assert!(matches!(
            build_config(&args),
            Err(CliError::FileParsing { .. })
        ));
    }

    #[test]
    fn invalid_core_values_surface_as_config_errors() {
        let args = generate_args(&["--grid-size", "0"]);
        assert!(matches!(build_config(&args), Err(CliError::Config(_))));
    }

    #[test]
    fn no_fallback_flag_wins_over_file() {
        let dir = tempdir().unwrap();
        let config_path = write_config_file(dir.path(), "[output]\nallow-fallback = true\n");
        let args = generate_args(&["-c", config_path.to_str().unwrap(), "--no-fallback"]);
        assert!(!build_config(&args).unwrap().allow_fallback);
    }
}
