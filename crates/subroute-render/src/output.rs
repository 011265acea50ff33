//! Output sinks.
//!
//! An [`OutputSink`] is a shared, cloneable handle to a writer. The
//! dispatcher writes help to one sink and errors to another; both may be
//! clones of the same sink.
//!
//! Whether a sink emits ANSI styling is a property of the sink itself
//! ([`ColorChoice`]), never of process-wide state.

use console::{Style, Term};
use std::fmt;
use std::io::Write;
use std::sync::{Arc, Mutex};

/// Controls whether styled output is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Style only when writing to a terminal that supports colors.
    #[default]
    Auto,
    /// Always emit styling.
    Always,
    /// Never emit styling.
    Never,
}

impl ColorChoice {
    /// Resolves the choice given whether the destination supports colors.
    pub fn enabled(self, supported: bool) -> bool {
        match self {
            ColorChoice::Auto => supported,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }

    /// Resolves the choice for a terminal handle.
    pub fn enabled_for(self, term: &Term) -> bool {
        self.enabled(term.is_term() && term.features().colors_supported())
    }
}

/// A shared writer that accepts text.
#[derive(Clone)]
pub struct OutputSink {
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
    supports_color: bool,
    colors: bool,
}

impl OutputSink {
    /// Wraps an arbitrary writer. Styling is off until enabled with
    /// [`with_color`](Self::with_color).
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Arc::new(Mutex::new(Box::new(writer))),
            supports_color: false,
            colors: false,
        }
    }

    /// Standard output, styled when it is a color terminal.
    pub fn stdout() -> Self {
        Self::terminal(Term::stdout())
    }

    /// Standard error, styled when it is a color terminal.
    pub fn stderr() -> Self {
        Self::terminal(Term::stderr())
    }

    fn terminal(term: Term) -> Self {
        let supports_color = ColorChoice::Auto.enabled_for(&term);
        Self {
            writer: Arc::new(Mutex::new(Box::new(term))),
            supports_color,
            colors: supports_color,
        }
    }

    /// Overrides color detection for this sink.
    pub fn with_color(mut self, choice: ColorChoice) -> Self {
        self.colors = choice.enabled(self.supports_color);
        self
    }

    /// Returns true if styled writes emit ANSI codes.
    pub fn colors_enabled(&self) -> bool {
        self.colors
    }

    /// Writes raw text.
    ///
    /// Failures are logged and otherwise ignored: output to a closed pipe
    /// must not abort dispatch.
    pub fn write_str(&self, text: &str) {
        let mut writer = match self.writer.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(err) = writer.write_all(text.as_bytes()).and_then(|_| writer.flush()) {
            log::warn!("failed to write output: {}", err);
        }
    }

    /// Writes text with a style applied when colors are enabled.
    pub fn write_styled(&self, text: &str, style: &Style) {
        let styled = style.clone().force_styling(self.colors).apply_to(text);
        self.write_str(&styled.to_string());
    }

    /// Writes a diagnostic message, red when colors are enabled.
    pub fn write_diagnostic(&self, text: &str) {
        self.write_styled(text, &Style::new().red());
    }
}

impl fmt::Debug for OutputSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputSink")
            .field("colors", &self.colors)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Capture {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn test_color_choice() {
        assert!(ColorChoice::Auto.enabled(true));
        assert!(!ColorChoice::Auto.enabled(false));
        assert!(ColorChoice::Always.enabled(false));
        assert!(!ColorChoice::Never.enabled(true));
    }

    #[test]
    fn test_clones_share_writer() {
        let capture = Capture::default();
        let sink = OutputSink::new(capture.clone());
        let other = sink.clone();
        sink.write_str("a");
        other.write_str("b");
        assert_eq!(capture.text(), "ab");
    }

    #[test]
    fn test_plain_sink_has_no_styling() {
        let capture = Capture::default();
        let sink = OutputSink::new(capture.clone());
        assert!(!sink.colors_enabled());
        sink.write_diagnostic("oops");
        assert_eq!(capture.text(), "oops");
    }

    #[test]
    fn test_forced_color_styles_diagnostics() {
        let capture = Capture::default();
        let sink = OutputSink::new(capture.clone()).with_color(ColorChoice::Always);
        sink.write_diagnostic("oops");
        let text = capture.text();
        assert!(text.contains("\u{1b}["));
        assert!(text.contains("oops"));
    }

    #[test]
    fn test_auto_on_plain_writer_stays_off() {
        let sink = OutputSink::new(Capture::default())
            .with_color(ColorChoice::Always)
            .with_color(ColorChoice::Auto);
        assert!(!sink.colors_enabled());
    }
}
