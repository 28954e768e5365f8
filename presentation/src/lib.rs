//! Presentation layer for euler-brick
//!
//! This crate maps the core's discriminated verdict to user-facing text:
//! CLI definition, console formatting (including the ASCII box sketch),
//! the interactive REPL, and configuration loading.

pub mod cli;
pub mod config;
pub mod output;
pub mod repl;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use config::loader::{AppConfig, ConfigLoader, EvaluationConfig, OutputConfig, ReplConfig};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use output::set_color_enabled;
pub use repl::BrickRepl;
