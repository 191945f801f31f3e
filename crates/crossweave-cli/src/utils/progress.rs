use crossweave::engine::progress::{Progress, ProgressCallback};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::{Arc, Mutex};
use tracing::warn;

#[derive(Clone)]
pub struct CliProgressHandler {
    pb: Arc<Mutex<ProgressBar>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        let pb = ProgressBar::new(0)
            .with_style(Self::bar_style())
            .with_message("Initializing...");
        pb.set_draw_target(indicatif::ProgressDrawTarget::stderr());
        pb.finish_and_clear();

        Self {
            pb: Arc::new(Mutex::new(pb)),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb_clone = self.pb.clone();

        Box::new(move |progress: Progress| {
            let Ok(pb_guard) = pb_clone.lock() else {
                warn!("Progress bar mutex was poisoned. Cannot update progress.");
                return;
            };

            match progress {
                Progress::GenerationStart { max_attempts } => {
                    pb_guard.reset();
                    pb_guard.set_length(max_attempts as u64);
                    pb_guard.set_position(0);
                    pb_guard.set_style(Self::bar_style());
                    pb_guard.set_message("Generating");
                }
                Progress::AttemptStart {
                    attempt,
                    word_count,
                } => {
                    pb_guard.set_message(format!("Attempt {} ({} words)", attempt, word_count));
                }
                Progress::AttemptFailed { .. } => {
                    pb_guard.inc(1);
                }
                Progress::Generated { attempt } => {
                    pb_guard.set_position(attempt as u64);
                    pb_guard.finish_with_message(format!("✓ Layout found on attempt {}", attempt));
                }
                Progress::FallbackUsed { attempts } => {
                    pb_guard.finish_with_message(format!(
                        "⚠ No layout after {} attempts, using fallback",
                        attempts
                    ));
                }
                Progress::Message(msg) => {
                    if !pb_guard.is_finished() {
                        pb_guard.println(format!("  {}", msg));
                    } else {
                        pb_guard.set_message(msg);
                    }
                }
            }
        })
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("{msg:<28} [{bar:30.cyan/blue}] {pos}/{len}")
            .expect("Failed to create bar style template")
            .progress_chars("##-")
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossweave::engine::error::AttemptFailure;
    use std::thread;

    #[test]
    fn handler_initializes_in_a_clean_state() {
        let handler = CliProgressHandler::new();
        let pb = handler.pb.lock().unwrap();
        assert_eq!(pb.length(), Some(0));
        assert!(pb.is_finished());
    }

    #[test]
    fn message_on_a_finished_bar_replaces_its_text() {
        let handler = CliProgressHandler::new();
        let callback = handler.get_callback();
        callback(Progress::Message("Word pool is empty".to_string()));
        assert_eq!(handler.pb.lock().unwrap().message(), "Word pool is empty");
    }

    #[test]
    fn callback_tracks_failed_attempts() {
        let handler = CliProgressHandler::new();
        let callback = handler.get_callback();

        callback(Progress::GenerationStart { max_attempts: 50 });
        {
            let pb = handler.pb.lock().unwrap();
            assert_eq!(pb.length(), Some(50));
            assert_eq!(pb.position(), 0);
            assert!(!pb.is_finished());
        }

        callback(Progress::AttemptStart {
            attempt: 1,
            word_count: 4,
        });
        {
            let pb = handler.pb.lock().unwrap();
            assert_eq!(pb.message(), "Attempt 1 (4 words)");
        }

        callback(Progress::AttemptFailed {
            attempt: 1,
            failure: AttemptFailure::PlacementExhausted {
                placed: 2,
                unplaced: 2,
            },
        });
        {
            let pb = handler.pb.lock().unwrap();
            assert_eq!(pb.position(), 1);
        }

        callback(Progress::Generated { attempt: 2 });
        {
            let pb = handler.pb.lock().unwrap();
            assert!(pb.is_finished());
            assert_eq!(pb.position(), 2);
            assert_eq!(pb.message(), "✓ Layout found on attempt 2");
        }
    }

    #[test]
    fn fallback_finishes_the_bar() {
        let handler = CliProgressHandler::new();
        let callback = handler.get_callback();

        thread::spawn(move || {
            callback(Progress::GenerationStart { max_attempts: 2 });
            callback(Progress::FallbackUsed { attempts: 2 });
        })
        .join()
        .unwrap();

        let pb = handler.pb.lock().unwrap();
        assert!(pb.is_finished());
        assert!(pb.message().contains("fallback"));
    }
}
