//! Output formatting.

pub mod console;
pub mod diagram;
pub mod formatter;

pub use console::ConsoleFormatter;
pub use formatter::OutputFormatter;

/// Globally enable or disable colored output.
pub fn set_color_enabled(enabled: bool) {
    colored::control::set_override(enabled);
}
