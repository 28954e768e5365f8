//! Domain error types

use crate::triple::value_objects::Triple;
use thiserror::Error;

/// Internal-consistency failures.
///
/// User-input problems (malformed text, non-Pythagorean triples, bad
/// shared edges) are reported as [`Verdict`](crate::Verdict) variants and
/// never reach this type. A `DomainError` means a triple that already
/// passed [`is_pythagorean`](crate::is_pythagorean) could not be
/// classified afterwards — that is a bug, and callers should treat it as
/// fatal rather than show it as a validation message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("no hypotenuse found in validated triple {0}")]
    HypotenuseNotFound(Triple),

    #[error("no leg pair found in validated triple {0}")]
    LegsNotFound(Triple),

    #[error("shared edge {0} is not a leg of a triple it was found in")]
    SharedLegMissing(u64),
}
