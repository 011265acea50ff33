use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use subroute_render::{Ui, UiError};

#[derive(Debug, Default)]
struct State {
    answers: VecDeque<String>,
    output: String,
    error: String,
}

/// A [`Ui`] answering questions from a script and capturing what is
/// written.
///
/// Queries are captured in the output like a terminal would show them.
/// Asking with no scripted answer left fails with [`UiError::Eof`].
/// Clones share the script and the captured text.
#[derive(Debug, Clone, Default)]
pub struct MockUi {
    state: Arc<Mutex<State>>,
}

impl MockUi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues answers for `ask` and `ask_secret`, in order.
    pub fn with_answers(self, answers: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.lock()
            .answers
            .extend(answers.into_iter().map(Into::into));
        self
    }

    /// Text written through `ask`, `output` and `info`.
    pub fn output_text(&self) -> String {
        self.lock().output.clone()
    }

    /// Text written through `error` and `warn`.
    pub fn error_text(&self) -> String {
        self.lock().error.clone()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn answer(&self, query: &str) -> Result<String, UiError> {
        let mut state = self.lock();
        state.output.push_str(query);
        state.output.push(' ');
        state.answers.pop_front().ok_or(UiError::Eof)
    }
}

impl Ui for MockUi {
    fn ask(&self, query: &str) -> Result<String, UiError> {
        self.answer(query)
    }

    fn ask_secret(&self, query: &str) -> Result<String, UiError> {
        self.answer(query)
    }

    fn output(&self, message: &str) {
        let mut state = self.lock();
        state.output.push_str(message);
        state.output.push('\n');
    }

    fn info(&self, message: &str) {
        self.output(message);
    }

    fn error(&self, message: &str) {
        let mut state = self.lock();
        state.error.push_str(message);
        state.error.push('\n');
    }

    fn warn(&self, message: &str) {
        self.error(message);
    }
}
