//! Application layer for euler-brick
//!
//! This crate contains use cases and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod use_cases;

// Re-export commonly used types
pub use config::EvaluationParams;
pub use use_cases::evaluate_pair::{
    EvaluatePairError, EvaluatePairInput, EvaluatePairUseCase, FaceClassification, PairEvaluation,
};
