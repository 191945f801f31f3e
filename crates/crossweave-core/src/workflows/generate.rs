use crate::core::io::traits::WordPool;
use crate::core::models::layout::Layout;
use crate::engine::config::{
    ConfigError, DEFAULT_GRID_SIZE, DEFAULT_MAX_ATTEMPTS, GenerationConfig,
    GenerationConfigBuilder,
};
use crate::engine::error::{AttemptFailure, EngineError};
use crate::engine::fallback::fallback_layout;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::search;
use crate::engine::selection::select_words;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, info, instrument, warn};

/// How a layout was obtained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub attempts: usize,
    pub placement_exhausted: usize,
    pub disconnected: usize,
    pub used_fallback: bool,
}

impl GenerationReport {
    fn record(&mut self, failure: AttemptFailure) {
        match failure {
            AttemptFailure::PlacementExhausted { .. } => self.placement_exhausted += 1,
            AttemptFailure::DisconnectedLayout { .. } => self.disconnected += 1,
        }
    }

    pub fn failures(&self) -> usize {
        self.placement_exhausted + self.disconnected
    }
}

#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub layout: Layout,
    pub report: GenerationReport,
}

impl GenerationOutcome {
    pub fn is_fallback(&self) -> bool {
        self.report.used_fallback
    }
}

/// Generates a layout from `pool` with the default budget and grid size.
///
/// With `desired_count` set, every attempt selects that many words; otherwise
/// each attempt flips a coin between three and four.
pub fn generate<P: WordPool + ?Sized>(
    pool: &P,
    desired_count: Option<usize>,
    rng: &mut impl Rng,
) -> Result<GenerationOutcome, EngineError> {
    let mut builder = GenerationConfigBuilder::new()
        .max_attempts(DEFAULT_MAX_ATTEMPTS)
        .grid_size(DEFAULT_GRID_SIZE);
    builder = match desired_count {
        Some(count) => builder.word_count(count),
        None => builder.word_counts(GenerationConfig::default().word_counts),
    };
    let config = builder.build()?;
    run(pool, &config, rng, &ProgressReporter::new())
}

/// Retries word selection and layout search until one attempt succeeds or the
/// budget runs out, in which case the fallback puzzle is returned.
///
/// The first successful attempt wins. Failed attempts are counted per kind in
/// the returned report; exhausting the budget is logged as a warning so that a
/// pool which never produces layouts does not go unnoticed.
#[instrument(skip_all, name = "generation_workflow", fields(pool = pool.len()))]
pub fn run<P: WordPool + ?Sized>(
    pool: &P,
    config: &GenerationConfig,
    rng: &mut impl Rng,
    reporter: &ProgressReporter,
) -> Result<GenerationOutcome, EngineError> {
    let mut report = GenerationReport::default();
    reporter.report(Progress::GenerationStart {
        max_attempts: config.max_attempts,
    });
    if pool.is_empty() {
        warn!("Word pool is empty; every attempt will fail.");
        reporter.report(Progress::Message(
            "Word pool is empty; the fallback layout will be used.".to_string(),
        ));
    }

    for attempt in 1..=config.max_attempts {
        report.attempts = attempt;
        let Some(&word_count) = config.word_counts.choose(rng) else {
            return Err(ConfigError::MissingParameter("word_counts").into());
        };
        reporter.report(Progress::AttemptStart {
            attempt,
            word_count,
        });

        let words = select_words(pool.entries(), word_count, rng);
        debug!(
            attempt,
            words = ?words.iter().map(|w| w.text()).collect::<Vec<_>>(),
            "Attempting layout."
        );

        match search::run(&words, config.grid_size) {
            Ok(layout) => {
                info!(
                    attempt,
                    placements = layout.entries.len(),
                    "Layout generated."
                );
                reporter.report(Progress::Generated { attempt });
                return Ok(GenerationOutcome { layout, report });
            }
            Err(failure) => {
                debug!(attempt, %failure, "Attempt failed.");
                report.record(failure);
                reporter.report(Progress::AttemptFailed { attempt, failure });
            }
        }
    }

    warn!(
        attempts = report.attempts,
        placement_exhausted = report.placement_exhausted,
        disconnected = report.disconnected,
        "Attempt budget exhausted; substituting the fallback layout."
    );
    report.used_fallback = true;
    reporter.report(Progress::FallbackUsed {
        attempts: report.attempts,
    });
    Ok(GenerationOutcome {
        layout: fallback_layout()?,
        report,
    })
}
