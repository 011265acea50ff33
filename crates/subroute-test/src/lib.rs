//! Test doubles for subroute CLIs.
//!
//! - [`MockCommand`]: records whether and how it ran; clones share the
//!   record, so a test keeps one clone and registers a factory for another
//! - [`MockTemplateCommand`]: a [`MockCommand`] with a custom help template
//! - [`SharedBuffer`]: an in-memory writer usable as an
//!   [`OutputSink`](subroute_render::OutputSink)
//! - [`MockUi`]: scripted answers and captured output for code using
//!   [`Ui`](subroute_render::Ui)

mod buffer;
mod command;
mod ui;

pub use buffer::SharedBuffer;
pub use command::{MockCommand, MockTemplateCommand};
pub use ui::MockUi;
