//! MiniJinja-backed template engine.
//!
//! Help templates are Jinja2 syntax. Every template is rendered from source
//! on demand since each invocation renders at most a couple of them.
//!
//! Besides the MiniJinja builtins, two filters are registered:
//!
//! - `pad(width)`: right-pads a string with spaces to a display width
//! - `last_segment`: the last space-separated segment of a command path

use minijinja::Environment;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::error::RenderError;

/// Renders help templates.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Creates an engine with the help filters registered.
    ///
    /// Trailing newlines in templates are kept, so a template that ends in
    /// a newline renders one.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        register_filters(&mut env);
        Self { env }
    }

    /// Returns a mutable reference to the underlying MiniJinja environment.
    ///
    /// Use it to register additional filters or functions.
    pub fn environment_mut(&mut self) -> &mut Environment<'static> {
        &mut self.env
    }

    /// Renders a template string against a JSON value.
    pub fn render_template(
        &self,
        template: &str,
        data: &serde_json::Value,
    ) -> Result<String, RenderError> {
        Ok(self.env.render_str(template, data)?)
    }

    /// Serializes `data` and renders the template with it.
    pub fn render<T: Serialize>(&self, template: &str, data: &T) -> Result<String, RenderError> {
        let value = serde_json::to_value(data)?;
        self.render_template(template, &value)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn register_filters(env: &mut Environment<'static>) {
    env.add_filter("pad", pad);
    env.add_filter("last_segment", last_segment);
}

fn pad(value: String, width: usize) -> String {
    pad_to_width(&value, width)
}

fn last_segment(value: String) -> String {
    match value.rfind(' ') {
        Some(idx) => value[idx + 1..].to_string(),
        None => value,
    }
}

/// Right-pads `value` with spaces up to `width` display columns.
pub fn pad_to_width(value: &str, width: usize) -> String {
    let fill = width.saturating_sub(value.width());
    format!("{}{}", value, " ".repeat(fill))
}
