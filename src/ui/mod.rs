//! UI layer: terminal screens and plain-text reports.

mod event_source;
mod message_input;
mod message_rendering;
pub mod report;
pub mod shell;
mod styles;
mod terminal;
mod view;

pub(crate) use event_source::CrosstermEventSource;

/// Returns the UI module name for smoke checks.
pub fn module_name() -> &'static str {
    "ui"
}
