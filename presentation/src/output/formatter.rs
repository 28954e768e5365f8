//! Output formatter trait

use brick_application::PairEvaluation;

/// Trait for formatting pair evaluations
pub trait OutputFormatter {
    /// Format the complete evaluation
    fn format(&self, evaluation: &PairEvaluation) -> String;

    /// Format as JSON
    fn format_json(&self, evaluation: &PairEvaluation) -> String;

    /// Format the verdict only (concise output)
    fn format_verdict_only(&self, evaluation: &PairEvaluation) -> String;
}
