//! CLI definition.

pub mod commands;

pub use commands::{Cli, OutputFormat};
