use std::sync::{Arc, Mutex, MutexGuard};

use subroute_dispatch::{Command, CommandFactory};

#[derive(Debug, Default)]
struct Record {
    run_called: bool,
    run_args: Vec<String>,
}

/// A command with fixed help text and exit code that records its runs.
#[derive(Debug, Clone, Default)]
pub struct MockCommand {
    help: String,
    synopsis: String,
    run_result: i32,
    record: Arc<Mutex<Record>>,
}

impl MockCommand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    pub fn with_synopsis(mut self, synopsis: impl Into<String>) -> Self {
        self.synopsis = synopsis.into();
        self
    }

    /// Exit code returned from `run`.
    pub fn with_run_result(mut self, code: i32) -> Self {
        self.run_result = code;
        self
    }

    /// Returns true if any clone has been run.
    pub fn run_called(&self) -> bool {
        self.lock().run_called
    }

    /// Arguments of the most recent run.
    pub fn run_args(&self) -> Vec<String> {
        self.lock().run_args.clone()
    }

    /// A factory handing out clones of this command.
    pub fn factory(&self) -> CommandFactory {
        let template = self.clone();
        Arc::new(move || Ok(Box::new(template.clone()) as Box<dyn Command>))
    }

    fn lock(&self) -> MutexGuard<'_, Record> {
        match self.record.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Command for MockCommand {
    fn help(&self) -> String {
        self.help.clone()
    }

    fn synopsis(&self) -> String {
        self.synopsis.clone()
    }

    fn run(&mut self, args: &[String]) -> i32 {
        let mut record = self.lock();
        record.run_called = true;
        record.run_args = args.to_vec();
        self.run_result
    }
}

/// A [`MockCommand`] that renders its help with a custom template.
#[derive(Debug, Clone)]
pub struct MockTemplateCommand {
    inner: MockCommand,
    template: String,
}

impl MockTemplateCommand {
    pub fn new(inner: MockCommand, template: impl Into<String>) -> Self {
        Self {
            inner,
            template: template.into(),
        }
    }

    /// The wrapped command, sharing its run record.
    pub fn inner(&self) -> &MockCommand {
        &self.inner
    }

    pub fn factory(&self) -> CommandFactory {
        let template = self.clone();
        Arc::new(move || Ok(Box::new(template.clone()) as Box<dyn Command>))
    }
}

impl Command for MockTemplateCommand {
    fn help(&self) -> String {
        self.inner.help.clone()
    }

    fn synopsis(&self) -> String {
        self.inner.synopsis.clone()
    }

    fn run(&mut self, args: &[String]) -> i32 {
        self.inner.run(args)
    }

    fn help_template(&self) -> Option<String> {
        Some(self.template.clone())
    }
}
