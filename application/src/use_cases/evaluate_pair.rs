//! Evaluate Pair use case.
//!
//! Orchestrates one evaluation: trim and parse both raw inputs
//! independently, run the domain pipeline, and bundle everything the
//! presentation layer needs into a [`PairEvaluation`]. The whole flow is
//! synchronous, stateless and cheap enough to run on every keystroke of
//! an interactive caller.

use crate::config::EvaluationParams;
use brick_domain::{
    DomainError, Triple, TripleSlot, Verdict, evaluate_pair, hypotenuse, is_pythagorean, legs,
    parse_triple,
};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can escape the use case.
///
/// User-input problems never appear here — they come back inside
/// [`PairEvaluation::verdict`]. An `Internal` error is a domain
/// invariant violation and should abort the caller.
#[derive(Error, Debug)]
pub enum EvaluatePairError {
    #[error("internal consistency failure: {0}")]
    Internal(#[from] DomainError),
}

/// Input for the [`EvaluatePairUseCase`].
#[derive(Debug, Clone)]
pub struct EvaluatePairInput {
    /// Raw text for the first triple, as typed.
    pub first_raw: String,
    /// Raw text for the second triple, as typed.
    pub second_raw: String,
    /// Evaluation parameters.
    pub params: EvaluationParams,
}

impl EvaluatePairInput {
    pub fn new(first_raw: impl Into<String>, second_raw: impl Into<String>) -> Self {
        Self {
            first_raw: first_raw.into(),
            second_raw: second_raw.into(),
            params: EvaluationParams::default(),
        }
    }

    pub fn with_params(mut self, params: EvaluationParams) -> Self {
        self.params = params;
        self
    }
}

/// Leg/hypotenuse classification of one validated face, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceClassification {
    pub triple: Triple,
    pub hypotenuse: u64,
    pub legs: [u64; 2],
}

/// Everything the presentation layer needs to render one evaluation.
#[derive(Debug, Clone)]
pub struct PairEvaluation {
    /// The raw inputs, echoed back for display.
    pub first_raw: String,
    pub second_raw: String,
    /// Parsed triples — `None` when the corresponding input is malformed.
    pub first: Option<Triple>,
    pub second: Option<Triple>,
    /// Classification per side — `None` when unparsed or not Pythagorean.
    pub first_face: Option<FaceClassification>,
    pub second_face: Option<FaceClassification>,
    /// The evaluation outcome.
    pub verdict: Verdict,
}

/// Use case for evaluating a pair of raw triple inputs.
///
/// Stateless; a single instance can serve any number of evaluations.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvaluatePairUseCase;

impl EvaluatePairUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Execute one evaluation.
    ///
    /// Parsing failures short-circuit into
    /// [`Verdict::MalformedInput`] naming the offending slot; when both
    /// inputs are malformed the first is reported.
    pub fn execute(&self, input: EvaluatePairInput) -> Result<PairEvaluation, EvaluatePairError> {
        debug!(
            first = %input.first_raw.trim(),
            second = %input.second_raw.trim(),
            "evaluating pair"
        );

        let first = match parse_triple(input.first_raw.trim()) {
            Ok(triple) => triple,
            Err(reason) => {
                debug!(%reason, "first input did not parse");
                return Ok(Self::malformed(input, TripleSlot::First, reason, None));
            }
        };
        let second = match parse_triple(input.second_raw.trim()) {
            Ok(triple) => triple,
            Err(reason) => {
                debug!(%reason, "second input did not parse");
                return Ok(Self::malformed(input, TripleSlot::Second, reason, Some(first)));
            }
        };

        let verdict = evaluate_pair(&first, &second, input.params.strictness)?;
        info!(verdict = verdict.kind(), %first, %second, "pair evaluated");

        Ok(PairEvaluation {
            first_raw: input.first_raw,
            second_raw: input.second_raw,
            first: Some(first),
            second: Some(second),
            first_face: Self::classify(&first)?,
            second_face: Self::classify(&second)?,
            verdict,
        })
    }

    fn malformed(
        input: EvaluatePairInput,
        which: TripleSlot,
        reason: brick_domain::ParseTripleError,
        first: Option<Triple>,
    ) -> PairEvaluation {
        PairEvaluation {
            first_raw: input.first_raw,
            second_raw: input.second_raw,
            first,
            second: None,
            first_face: None,
            second_face: None,
            verdict: Verdict::MalformedInput { which, reason },
        }
    }

    /// Classify one side, if it is a valid face.
    fn classify(triple: &Triple) -> Result<Option<FaceClassification>, DomainError> {
        if !is_pythagorean(triple) {
            return Ok(None);
        }
        let hyp = hypotenuse(triple).ok_or(DomainError::HypotenuseNotFound(*triple))?;
        let legs = legs(triple).ok_or(DomainError::LegsNotFound(*triple))?;
        Ok(Some(FaceClassification {
            triple: *triple,
            hypotenuse: hyp,
            legs,
        }))
    }
}
