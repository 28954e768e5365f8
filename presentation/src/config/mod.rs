//! Configuration loading.

pub mod loader;

pub use loader::{AppConfig, ConfigLoader, EvaluationConfig, OutputConfig, ReplConfig};
