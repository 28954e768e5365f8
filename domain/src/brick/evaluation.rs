//! Pair evaluation — the accept/reject core.
//!
//! [`evaluate_pair`] runs the whole pipeline over two already-parsed
//! triples and yields a [`Verdict`]. Every rejection is a value;
//! `Err(DomainError)` only fires when a triple that passed the validity
//! test cannot be classified afterwards, which indicates a bug.

use super::value_objects::{BrickDimensions, Strictness, TripleSlot};
use crate::core::error::DomainError;
use crate::triple::parsing::ParseTripleError;
use crate::triple::pythagorean::{hypotenuse, is_pythagorean, legs, square};
use crate::triple::value_objects::Triple;

/// Discriminated outcome of evaluating a pair of inputs.
///
/// One variant per user-visible condition; the presentation layer maps
/// each to a message. `MalformedInput` is produced by the caller when
/// parsing fails, before the evaluator ever runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// A raw input did not parse as a positive-integer triple.
    MalformedInput {
        which: TripleSlot,
        reason: ParseTripleError,
    },
    /// A triple parsed but fails a² + b² = c².
    NotPythagorean { which: TripleSlot, triple: Triple },
    /// Both triples contain the same three values.
    IdenticalTriples,
    /// The triples share zero values, or more than one.
    NoSharedDimension,
    /// The one shared value is the face diagonal of a triple, not an edge.
    SharedDimensionIsHypotenuse { shared: u64 },
    /// Strict mode only: √(a² + c²) is not an integer.
    ThirdDiagonalNotIntegral { a: u64, c: u64 },
    /// The faces fit together; `brick` holds the reconstructed edges.
    Valid { brick: BrickDimensions, shared: u64 },
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid { .. })
    }

    /// Stable tag for logs and JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            Verdict::MalformedInput { .. } => "malformed_input",
            Verdict::NotPythagorean { .. } => "not_pythagorean",
            Verdict::IdenticalTriples => "identical_triples",
            Verdict::NoSharedDimension => "no_shared_dimension",
            Verdict::SharedDimensionIsHypotenuse { .. } => "shared_dimension_is_hypotenuse",
            Verdict::ThirdDiagonalNotIntegral { .. } => "third_diagonal_not_integral",
            Verdict::Valid { .. } => "valid",
        }
    }
}

/// The single value present in both triples, if there is exactly one.
///
/// Intersects the *distinct* values of each side. Zero common values and
/// two or more common values both yield `None`: two faces of a box meet
/// in exactly one edge, so an ambiguous overlap cannot characterize a
/// brick.
///
/// # Example
///
/// ```
/// use brick_domain::{Triple, shared_dimension};
///
/// let first = Triple::new([44, 117, 125]);
/// assert_eq!(shared_dimension(&first, &Triple::new([117, 240, 267])), Some(117));
/// assert_eq!(shared_dimension(&first, &Triple::new([3, 4, 5])), None);
/// ```
pub fn shared_dimension(first: &Triple, second: &Triple) -> Option<u64> {
    let common: Vec<u64> = first
        .distinct()
        .intersection(&second.distinct())
        .copied()
        .collect();
    match common[..] {
        [only] => Some(only),
        _ => None,
    }
}

/// Rebuild the three box edges once a shared edge is known.
///
/// `None` when either leg pair does not contain `shared` — the shared
/// value sits on a diagonal, so there is no box to rebuild. Display-only;
/// the accept/reject decision never depends on this.
pub fn reconstruct(
    first: &Triple,
    second: &Triple,
    shared: u64,
) -> Result<Option<BrickDimensions>, DomainError> {
    let first_legs = legs(first).ok_or(DomainError::LegsNotFound(*first))?;
    let second_legs = legs(second).ok_or(DomainError::LegsNotFound(*second))?;

    match (other_leg(first_legs, shared), other_leg(second_legs, shared)) {
        (Some(a), Some(c)) => Ok(Some(BrickDimensions::new(a, shared, c))),
        _ => Ok(None),
    }
}

fn other_leg(pair: [u64; 2], shared: u64) -> Option<u64> {
    match pair {
        [leg, other] if leg == shared => Some(other),
        [other, leg] if leg == shared => Some(other),
        _ => None,
    }
}

/// Evaluate two parsed triples as candidate adjacent faces.
///
/// Pipeline, first rejection wins:
///
/// 1. equal as sets → [`Verdict::IdenticalTriples`]
/// 2. either side fails a² + b² = c² → [`Verdict::NotPythagorean`]
/// 3. no unique common value → [`Verdict::NoSharedDimension`]
/// 4. the common value is a diagonal on either side →
///    [`Verdict::SharedDimensionIsHypotenuse`]
/// 5. strict mode: third face diagonal not an integer →
///    [`Verdict::ThirdDiagonalNotIntegral`]
/// 6. otherwise → [`Verdict::Valid`] with the reconstructed edges
///
/// Symmetric in its arguments up to the reported slot and the a/c
/// orientation of the reconstruction.
pub fn evaluate_pair(
    first: &Triple,
    second: &Triple,
    strictness: Strictness,
) -> Result<Verdict, DomainError> {
    if first.same_set(second) {
        return Ok(Verdict::IdenticalTriples);
    }
    if !is_pythagorean(first) {
        return Ok(Verdict::NotPythagorean {
            which: TripleSlot::First,
            triple: *first,
        });
    }
    if !is_pythagorean(second) {
        return Ok(Verdict::NotPythagorean {
            which: TripleSlot::Second,
            triple: *second,
        });
    }

    let Some(shared) = shared_dimension(first, second) else {
        return Ok(Verdict::NoSharedDimension);
    };

    let first_hyp = hypotenuse(first).ok_or(DomainError::HypotenuseNotFound(*first))?;
    let second_hyp = hypotenuse(second).ok_or(DomainError::HypotenuseNotFound(*second))?;
    if shared == first_hyp || shared == second_hyp {
        return Ok(Verdict::SharedDimensionIsHypotenuse { shared });
    }

    // shared is in both triples and is neither hypotenuse, so it must be
    // a leg on both sides
    let brick = reconstruct(first, second, shared)?.ok_or(DomainError::SharedLegMissing(shared))?;

    if strictness.checks_third_diagonal() {
        // A sum past u128 has no representable integer root, so checked
        // addition folds overflow into the non-integral case
        let third = square(brick.a).checked_add(square(brick.c));
        if !third.is_some_and(is_perfect_square) {
            return Ok(Verdict::ThirdDiagonalNotIntegral {
                a: brick.a,
                c: brick.c,
            });
        }
    }

    Ok(Verdict::Valid { brick, shared })
}

/// Boolean projection of [`evaluate_pair`].
pub fn check_pair(
    first: &Triple,
    second: &Triple,
    strictness: Strictness,
) -> Result<bool, DomainError> {
    Ok(evaluate_pair(first, second, strictness)?.is_valid())
}

fn is_perfect_square(value: u128) -> bool {
    let root = value.isqrt();
    root * root == value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(values: [u64; 3]) -> Triple {
        Triple::new(values)
    }

    fn lenient(first: [u64; 3], second: [u64; 3]) -> Verdict {
        evaluate_pair(&t(first), &t(second), Strictness::Lenient).unwrap()
    }

    // ==================== shared_dimension Tests ====================

    #[test]
    fn test_shared_dimension_unique() {
        assert_eq!(shared_dimension(&t([44, 117, 125]), &t([117, 240, 267])), Some(117));
    }

    #[test]
    fn test_shared_dimension_none_without_overlap() {
        assert_eq!(shared_dimension(&t([3, 4, 5]), &t([6, 8, 10])), None);
    }

    #[test]
    fn test_shared_dimension_none_with_multiple_overlap() {
        assert_eq!(shared_dimension(&t([3, 4, 5]), &t([4, 3, 13])), None);
    }

    #[test]
    fn test_shared_dimension_uses_distinct_values() {
        // 5 repeated on one side still counts once
        assert_eq!(shared_dimension(&t([5, 5, 7]), &t([5, 12, 13])), Some(5));
    }

    // ==================== evaluate_pair Tests ====================

    #[test]
    fn test_known_euler_brick_faces() {
        let verdict = lenient([44, 117, 125], [117, 240, 267]);
        assert_eq!(
            verdict,
            Verdict::Valid {
                brick: BrickDimensions::new(44, 117, 240),
                shared: 117,
            }
        );
    }

    #[test]
    fn test_known_faces_in_permuted_order() {
        let verdict = lenient([117, 44, 125], [240, 117, 267]);
        assert_eq!(
            verdict,
            Verdict::Valid {
                brick: BrickDimensions::new(44, 117, 240),
                shared: 117,
            }
        );
    }

    #[test]
    fn test_identical_triples() {
        assert_eq!(lenient([3, 4, 5], [3, 4, 5]), Verdict::IdenticalTriples);
    }

    #[test]
    fn test_identical_as_sets_even_when_reordered() {
        assert_eq!(lenient([3, 4, 5], [4, 3, 5]), Verdict::IdenticalTriples);
    }

    #[test]
    fn test_not_pythagorean_names_the_slot() {
        assert_eq!(
            lenient([3, 4, 6], [5, 12, 13]),
            Verdict::NotPythagorean {
                which: TripleSlot::First,
                triple: t([3, 4, 6]),
            }
        );
        assert_eq!(
            lenient([44, 117, 125], [117, 240, 266]),
            Verdict::NotPythagorean {
                which: TripleSlot::Second,
                triple: t([117, 240, 266]),
            }
        );
    }

    #[test]
    fn test_no_shared_dimension() {
        assert_eq!(lenient([3, 4, 5], [6, 8, 10]), Verdict::NoSharedDimension);
        assert_eq!(lenient([44, 117, 125], [118, 240, 267]), Verdict::NoSharedDimension);
    }

    #[test]
    fn test_shared_dimension_is_hypotenuse() {
        // 5 is the diagonal of the first face
        assert_eq!(
            lenient([3, 4, 5], [5, 12, 13]),
            Verdict::SharedDimensionIsHypotenuse { shared: 5 }
        );
    }

    #[test]
    fn test_shared_leg_pair_reconstructs() {
        let verdict = lenient([5, 12, 13], [12, 9, 15]);
        assert_eq!(
            verdict,
            Verdict::Valid {
                brick: BrickDimensions::new(5, 12, 9),
                shared: 12,
            }
        );
    }

    #[test]
    fn test_check_pair_is_symmetric() {
        let pairs: [([u64; 3], [u64; 3]); 4] = [
            ([44, 117, 125], [117, 240, 267]),
            ([5, 12, 13], [12, 9, 15]),
            ([3, 4, 5], [5, 12, 13]),
            ([3, 4, 5], [6, 8, 10]),
        ];
        for (first, second) in pairs {
            let forward = check_pair(&t(first), &t(second), Strictness::Lenient).unwrap();
            let backward = check_pair(&t(second), &t(first), Strictness::Lenient).unwrap();
            assert_eq!(forward, backward, "{:?} / {:?}", first, second);
        }
    }

    #[test]
    fn test_reconstructed_faces_are_still_pythagorean() {
        let Verdict::Valid { brick, shared } = lenient([5, 12, 13], [12, 9, 15]) else {
            panic!("expected valid verdict");
        };
        assert_eq!(shared, brick.b);
        assert!(is_pythagorean(&t([brick.a, brick.b, 13])));
        assert!(is_pythagorean(&t([brick.b, brick.c, 15])));
    }

    #[test]
    fn test_reconstruct_none_when_shared_is_a_diagonal() {
        let first = t([3, 4, 5]);
        let second = t([5, 12, 13]);
        assert_eq!(reconstruct(&first, &second, 5).unwrap(), None);
    }

    #[test]
    fn test_reconstruct_rejects_unvalidated_triple() {
        let invalid = t([3, 4, 6]);
        assert_eq!(
            reconstruct(&invalid, &t([5, 12, 13]), 3),
            Err(DomainError::LegsNotFound(invalid))
        );
    }

    // ==================== Strict Mode Tests ====================

    #[test]
    fn test_strict_rejects_irrational_third_diagonal() {
        // √(6² + 15²) = √261 is irrational
        let verdict = evaluate_pair(&t([6, 8, 10]), &t([8, 15, 17]), Strictness::Strict).unwrap();
        assert_eq!(verdict, Verdict::ThirdDiagonalNotIntegral { a: 6, c: 15 });
    }

    #[test]
    fn test_lenient_accepts_the_same_pair() {
        let verdict = lenient([6, 8, 10], [8, 15, 17]);
        assert_eq!(
            verdict,
            Verdict::Valid {
                brick: BrickDimensions::new(6, 8, 15),
                shared: 8,
            }
        );
    }

    #[test]
    fn test_strict_accepts_a_real_euler_brick() {
        // 44² + 240² = 244²
        let verdict =
            evaluate_pair(&t([44, 117, 125]), &t([117, 240, 267]), Strictness::Strict).unwrap();
        assert!(verdict.is_valid());
    }

    #[test]
    fn test_strict_survives_sums_past_u128() {
        // n = 2^32 - 2. The faces (n²-1, 2n, n²+1) and (2n, n²/2-2,
        // n²/2+2) are both Pythagorean and share only the edge 2n, but
        // the outer legs are large enough that the third-diagonal sum
        // (n²-1)² + (n²/2-2)² exceeds u128.
        let n: u64 = 4_294_967_294;
        let sq = n * n;
        let first = t([sq - 1, 2 * n, sq + 1]);
        let second = t([2 * n, sq / 2 - 2, sq / 2 + 2]);
        assert!(is_pythagorean(&first));
        assert!(is_pythagorean(&second));

        let verdict = evaluate_pair(&first, &second, Strictness::Strict).unwrap();
        assert_eq!(
            verdict,
            Verdict::ThirdDiagonalNotIntegral {
                a: sq - 1,
                c: sq / 2 - 2,
            }
        );

        // Lenient mode never looks at the third diagonal
        let verdict = evaluate_pair(&first, &second, Strictness::Lenient).unwrap();
        assert!(verdict.is_valid());
    }

    #[test]
    fn test_verdict_kind_tags() {
        assert_eq!(lenient([3, 4, 5], [6, 8, 10]).kind(), "no_shared_dimension");
        assert_eq!(lenient([44, 117, 125], [117, 240, 267]).kind(), "valid");
    }
}
