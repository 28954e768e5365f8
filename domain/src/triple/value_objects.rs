//! Triple value object

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// Rejected triple construction: a value was zero.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("triple values must be positive")]
pub struct ZeroValueError;

/// An ordered triple of positive integer edge lengths (Value Object)
///
/// The order as typed by the user is preserved: classification of which
/// positional value is the hypotenuse depends on it, and display echoes
/// it back. A sorted copy feeds the Pythagorean acceptance test and
/// set-equality, so `(3, 4, 5)` and `(4, 3, 5)` are equal as faces but
/// display differently.
///
/// Invariant: every value is greater than zero.
///
/// # Example
///
/// ```
/// use brick_domain::Triple;
///
/// let triple = Triple::new([44, 117, 125]);
/// assert_eq!(triple.sorted(), [44, 117, 125]);
/// assert!(triple.same_set(&Triple::new([117, 125, 44])));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u64; 3]")]
pub struct Triple([u64; 3]);

impl Triple {
    /// Create a new triple
    ///
    /// # Panics
    /// Panics if any value is zero
    pub fn new(values: [u64; 3]) -> Self {
        assert!(
            values.iter().all(|&v| v > 0),
            "Triple values must be positive"
        );
        Self(values)
    }

    /// Try to create a new triple, returning None if any value is zero
    pub fn try_new(values: [u64; 3]) -> Option<Self> {
        if values.iter().all(|&v| v > 0) {
            Some(Self(values))
        } else {
            None
        }
    }

    /// The values in typed order
    pub fn values(&self) -> [u64; 3] {
        self.0
    }

    /// A copy sorted ascending
    pub fn sorted(&self) -> [u64; 3] {
        let mut sorted = self.0;
        sorted.sort_unstable();
        sorted
    }

    /// The distinct values, ascending
    pub fn distinct(&self) -> BTreeSet<u64> {
        self.0.iter().copied().collect()
    }

    /// Whether `value` appears in the triple
    pub fn contains(&self, value: u64) -> bool {
        self.0.contains(&value)
    }

    /// Set equality — true when both triples contain the same values,
    /// regardless of typed order
    pub fn same_set(&self, other: &Triple) -> bool {
        self.sorted() == other.sorted()
    }
}

impl std::fmt::Display for Triple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "({}, {}, {})", a, b, c)
    }
}

impl TryFrom<[u64; 3]> for Triple {
    type Error = ZeroValueError;

    fn try_from(values: [u64; 3]) -> Result<Self, Self::Error> {
        Self::try_new(values).ok_or(ZeroValueError)
    }
}
