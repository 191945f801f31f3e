use super::{render_layout, write_record};
use crate::cli::GenerateArgs;
use crate::config::build_config;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use crossweave::core::io::pool::load_pool;
use crossweave::engine::progress::ProgressReporter;
use crossweave::workflows;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};

pub async fn run(args: GenerateArgs) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let app_config = build_config(&args)?;

    info!("Loading word pool from {:?}", &app_config.pool_path);
    let pool = load_pool(&app_config.pool_path)?;

    let mut rng = match app_config.seed {
        Some(seed) => {
            info!(seed, "Using seeded random source.");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the core generation workflow...");
    let outcome = tokio::task::block_in_place(|| {
        workflows::generate::run(&pool, &app_config.core_config, &mut rng, &reporter)
    })?;

    if outcome.is_fallback() {
        warn!(
            attempts = outcome.report.attempts,
            placement_exhausted = outcome.report.placement_exhausted,
            disconnected = outcome.report.disconnected,
            "No layout could be generated from this pool."
        );
        if !app_config.allow_fallback {
            return Err(CliError::FallbackRefused {
                attempts: outcome.report.attempts,
            });
        }
        println!(
            "Warning: no layout found after {} attempts; showing the fallback puzzle.",
            outcome.report.attempts
        );
    } else {
        println!(
            "Layout found on attempt {} of {}.",
            outcome.report.attempts, app_config.core_config.max_attempts
        );
    }

    println!("{}", render_layout(&outcome.layout));

    if let Some(path) = &app_config.output_path {
        write_record(&outcome.layout, path)?;
        println!("Layout record written to: {}", path.display());
    }

    Ok(())
}
