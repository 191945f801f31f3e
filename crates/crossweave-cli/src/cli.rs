use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Crossweave CLI - Generate small interlocking crossword layouts from a pool of words and clues.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Select words from a pool and generate a layout, falling back to a fixed puzzle if needed.
    Generate(GenerateArgs),
    /// Lay out an explicit list of words without selection, retries or fallback.
    Layout(LayoutArgs),
    /// Validate a stored layout record (JSON) against the layout invariants.
    Check(CheckArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    // --- Core Arguments ---
    /// Path to the word pool (.csv with a `word,clue` header, or .toml with [[words]] tables).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub pool: PathBuf,

    /// Write the layout record as JSON to this path.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Generation Overrides ---
    /// Select exactly this many words on every attempt instead of alternating between 3 and 4.
    #[arg(short = 'n', long, value_name = "INT")]
    pub word_count: Option<usize>,

    /// Override the maximum number of attempts before the fallback puzzle is used.
    #[arg(long, value_name = "INT")]
    pub max_attempts: Option<usize>,

    /// Override the side length of the square grid.
    #[arg(short, long, value_name = "INT")]
    pub grid_size: Option<usize>,

    /// Seed the random source to make the run reproducible.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Exit with an error instead of printing the fallback puzzle when every attempt fails.
    #[arg(long)]
    pub no_fallback: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S generation.max-attempts=20
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `layout` subcommand.
#[derive(Args, Debug)]
pub struct LayoutArgs {
    /// Words to lay out; the longest one is placed first.
    #[arg(required = true, value_name = "WORD")]
    pub words: Vec<String>,

    /// Side length of the square grid.
    #[arg(short, long, default_value_t = 7, value_name = "INT")]
    pub grid_size: usize,

    /// Write the layout record as JSON to this path.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to a layout record previously written with `--output`.
    #[arg(required = true, value_name = "PATH")]
    pub input: PathBuf,
}
