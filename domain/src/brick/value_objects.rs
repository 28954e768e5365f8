//! Brick value objects

use serde::{Deserialize, Serialize};

/// Which of the two inputs a per-triple finding refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripleSlot {
    First,
    Second,
}

impl std::fmt::Display for TripleSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TripleSlot::First => write!(f, "first"),
            TripleSlot::Second => write!(f, "second"),
        }
    }
}

/// How thoroughly a pair of faces is checked.
///
/// Lenient mode validates the two supplied faces and the placement of the
/// shared edge, nothing more. Strict mode additionally requires the
/// diagonal of the third face (the one spanned by the two non-shared
/// legs) to be an integer, which is what a full Euler brick needs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    /// Accept once both faces and the shared edge check out.
    #[default]
    Lenient,
    /// Also require the third face diagonal to be an integer.
    Strict,
}

impl Strictness {
    pub fn checks_third_diagonal(&self) -> bool {
        matches!(self, Strictness::Strict)
    }
}

/// The three edge lengths of the reconstructed box (Value Object)
///
/// `a` is the non-shared leg of the first face, `b` the shared edge, `c`
/// the non-shared leg of the second face. Used for display only — the
/// accept/reject decision is made before reconstruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrickDimensions {
    pub a: u64,
    pub b: u64,
    pub c: u64,
}

impl BrickDimensions {
    pub fn new(a: u64, b: u64, c: u64) -> Self {
        Self { a, b, c }
    }
}

impl std::fmt::Display for BrickDimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} × {} × {}", self.a, self.b, self.c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_display() {
        assert_eq!(TripleSlot::First.to_string(), "first");
        assert_eq!(TripleSlot::Second.to_string(), "second");
    }

    #[test]
    fn test_strictness_default_is_lenient() {
        assert_eq!(Strictness::default(), Strictness::Lenient);
        assert!(!Strictness::Lenient.checks_third_diagonal());
        assert!(Strictness::Strict.checks_third_diagonal());
    }

    #[test]
    fn test_dimensions_display() {
        let brick = BrickDimensions::new(44, 117, 240);
        assert_eq!(brick.to_string(), "44 × 117 × 240");
    }
}
