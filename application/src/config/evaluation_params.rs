//! Evaluation parameters — use case control.
//!
//! [`EvaluationParams`] groups the static parameters that control one run
//! of [`EvaluatePairUseCase`](crate::use_cases::evaluate_pair::EvaluatePairUseCase).
//! These are application-layer concerns, not domain policy.

use brick_domain::Strictness;
use serde::{Deserialize, Serialize};

/// Pair evaluation control parameters.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct EvaluationParams {
    /// Whether the third face diagonal is also required to be integral.
    pub strictness: Strictness,
}

impl EvaluationParams {
    pub fn strict() -> Self {
        Self {
            strictness: Strictness::Strict,
        }
    }

    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_lenient() {
        assert_eq!(EvaluationParams::default().strictness, Strictness::Lenient);
    }

    #[test]
    fn test_strict_constructor() {
        assert_eq!(EvaluationParams::strict().strictness, Strictness::Strict);
    }
}
