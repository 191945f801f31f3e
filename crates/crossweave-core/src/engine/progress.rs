use super::error::AttemptFailure;

#[derive(Debug, Clone)]
pub enum Progress {
    GenerationStart { max_attempts: usize },
    AttemptStart { attempt: usize, word_count: usize },
    AttemptFailed { attempt: usize, failure: AttemptFailure },
    Generated { attempt: usize },
    FallbackUsed { attempts: usize },
    /// Free-form notice, such as an empty word pool.
    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}
