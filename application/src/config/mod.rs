//! Application configuration types.

pub mod evaluation_params;

pub use evaluation_params::EvaluationParams;
