//! User interaction for commands.
//!
//! [`Ui`] is what commands use to talk to the user instead of printing
//! directly, so tests can swap in a scripted implementation.
//!
//! - [`BasicUi`]: line-based input from a reader, output to sinks
//! - [`ColoredUi`]: wraps another `Ui` and colors each kind of message

use console::{Color, Style, Term};
use std::io::{self, BufRead, BufReader};
use std::sync::Mutex;

use crate::error::UiError;
use crate::output::{ColorChoice, OutputSink};

/// Interface for reading input from and writing output to the user.
pub trait Ui: Send + Sync {
    /// Asks the user a question and returns the answer.
    fn ask(&self, query: &str) -> Result<String, UiError>;

    /// Asks the user a question without echoing the answer.
    fn ask_secret(&self, query: &str) -> Result<String, UiError>;

    /// Regular output.
    fn output(&self, message: &str);

    /// Informational output. May be styled differently from `output`.
    fn info(&self, message: &str);

    /// Error messages.
    fn error(&self, message: &str);

    /// Warnings.
    fn warn(&self, message: &str);
}

/// A [`Ui`] reading lines from a reader and writing to output sinks.
pub struct BasicUi {
    reader: Mutex<Box<dyn BufRead + Send>>,
    writer: OutputSink,
    error_writer: Option<OutputSink>,
    secret_terminal: Option<Term>,
}

impl BasicUi {
    /// A UI on stdin, stdout and stderr.
    ///
    /// Secrets are read without echo from the terminal when stderr is
    /// attached to one, and from stdin otherwise.
    pub fn new() -> Self {
        let term = Term::stderr();
        let secret_terminal = if term.is_term() { Some(term) } else { None };
        Self {
            reader: Mutex::new(Box::new(BufReader::new(io::stdin()))),
            writer: OutputSink::stdout(),
            error_writer: Some(OutputSink::stderr()),
            secret_terminal,
        }
    }

    /// A UI on the given reader and writer. Errors go to the writer unless
    /// an error writer is configured.
    pub fn with_io<R: BufRead + Send + 'static>(reader: R, writer: OutputSink) -> Self {
        Self {
            reader: Mutex::new(Box::new(reader)),
            writer,
            error_writer: None,
            secret_terminal: None,
        }
    }

    /// Sends `error` and `warn` output to a separate sink.
    pub fn error_writer(mut self, sink: OutputSink) -> Self {
        self.error_writer = Some(sink);
        self
    }

    fn read_line(&self) -> Result<String, UiError> {
        let mut reader = match self.reader.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Err(UiError::Eof);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn errors(&self) -> &OutputSink {
        self.error_writer.as_ref().unwrap_or(&self.writer)
    }
}

impl Default for BasicUi {
    fn default() -> Self {
        Self::new()
    }
}

impl Ui for BasicUi {
    fn ask(&self, query: &str) -> Result<String, UiError> {
        self.writer.write_str(&format!("{} ", query));
        self.read_line()
    }

    fn ask_secret(&self, query: &str) -> Result<String, UiError> {
        self.writer.write_str(&format!("{} ", query));
        match &self.secret_terminal {
            Some(term) => Ok(term.read_secure_line()?),
            None => self.read_line(),
        }
    }

    fn output(&self, message: &str) {
        self.writer.write_str(&format!("{}\n", message));
    }

    fn info(&self, message: &str) {
        self.output(message);
    }

    fn error(&self, message: &str) {
        self.errors().write_str(&format!("{}\n", message));
    }

    fn warn(&self, message: &str) {
        self.error(message);
    }
}

/// A terminal color for one kind of [`ColoredUi`] message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiColor {
    pub color: Option<Color>,
    pub bold: bool,
}

impl UiColor {
    pub const NONE: UiColor = UiColor::plain(None);
    pub const RED: UiColor = UiColor::plain(Some(Color::Red));
    pub const GREEN: UiColor = UiColor::plain(Some(Color::Green));
    pub const YELLOW: UiColor = UiColor::plain(Some(Color::Yellow));
    pub const BLUE: UiColor = UiColor::plain(Some(Color::Blue));
    pub const MAGENTA: UiColor = UiColor::plain(Some(Color::Magenta));
    pub const CYAN: UiColor = UiColor::plain(Some(Color::Cyan));

    const fn plain(color: Option<Color>) -> Self {
        Self { color, bold: false }
    }

    /// The same color in bold.
    pub const fn bold(self) -> Self {
        Self {
            color: self.color,
            bold: true,
        }
    }

    fn style(&self) -> Option<Style> {
        let color = self.color?;
        let mut style = Style::new().fg(color).bright();
        if self.bold {
            style = style.bold();
        }
        Some(style)
    }
}

impl Default for UiColor {
    fn default() -> Self {
        Self::NONE
    }
}

/// A [`Ui`] that colors messages before handing them to another `Ui`.
pub struct ColoredUi {
    output_color: UiColor,
    info_color: UiColor,
    error_color: UiColor,
    warn_color: UiColor,
    colors: bool,
    ui: Box<dyn Ui>,
}

impl ColoredUi {
    /// Wraps `ui` with no colors configured. Colors are applied when
    /// stdout is a color terminal; see [`color_choice`](Self::color_choice).
    pub fn new(ui: impl Ui + 'static) -> Self {
        Self {
            output_color: UiColor::NONE,
            info_color: UiColor::NONE,
            error_color: UiColor::NONE,
            warn_color: UiColor::NONE,
            colors: ColorChoice::Auto.enabled_for(&Term::stdout()),
            ui: Box::new(ui),
        }
    }

    pub fn output_color(mut self, color: UiColor) -> Self {
        self.output_color = color;
        self
    }

    pub fn info_color(mut self, color: UiColor) -> Self {
        self.info_color = color;
        self
    }

    pub fn error_color(mut self, color: UiColor) -> Self {
        self.error_color = color;
        self
    }

    pub fn warn_color(mut self, color: UiColor) -> Self {
        self.warn_color = color;
        self
    }

    /// Overrides terminal detection.
    pub fn color_choice(mut self, choice: ColorChoice) -> Self {
        self.colors = choice.enabled(ColorChoice::Auto.enabled_for(&Term::stdout()));
        self
    }

    fn colorize(&self, message: &str, color: UiColor) -> String {
        match color.style() {
            Some(style) => style
                .force_styling(self.colors)
                .apply_to(message)
                .to_string(),
            None => message.to_string(),
        }
    }
}

impl Ui for ColoredUi {
    fn ask(&self, query: &str) -> Result<String, UiError> {
        self.ui.ask(&self.colorize(query, self.output_color))
    }

    fn ask_secret(&self, query: &str) -> Result<String, UiError> {
        self.ui.ask_secret(&self.colorize(query, self.output_color))
    }

    fn output(&self, message: &str) {
        self.ui.output(&self.colorize(message, self.output_color));
    }

    fn info(&self, message: &str) {
        self.ui.info(&self.colorize(message, self.info_color));
    }

    fn error(&self, message: &str) {
        self.ui.error(&self.colorize(message, self.error_color));
    }

    fn warn(&self, message: &str) {
        self.ui.warn(&self.colorize(message, self.warn_color));
    }
}
