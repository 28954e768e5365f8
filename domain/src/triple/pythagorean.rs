//! Pythagorean validity and leg/hypotenuse classification.
//!
//! Squares are computed in `u128`, so any pair of `u64` edge lengths is
//! compared exactly.
//!
//! [`is_pythagorean`] is the only acceptance test: it sorts the triple and
//! checks the largest value as the hypotenuse, which is sound because the
//! hypotenuse of a valid triple is always the largest side. The
//! classification functions deliberately do *not* sort — they examine the
//! triple in typed order so the reported hypotenuse is the positional
//! value the user entered, which the shared-edge exclusion rule depends
//! on.

use super::value_objects::Triple;

/// Exact square of an edge length.
pub(crate) fn square(value: u64) -> u128 {
    u128::from(value) * u128::from(value)
}

/// Whether x² + y² = z², exactly.
///
/// The sum of two `u64` squares can exceed `u128`; a sum past `u128` can
/// never equal a representable square, so checked addition treats
/// overflow as unequal instead of panicking.
fn sum_of_squares_eq(x: u64, y: u64, z: u64) -> bool {
    square(x)
        .checked_add(square(y))
        .is_some_and(|sum| sum == square(z))
}

/// Whether the triple satisfies a² + b² = c² with (a, b, c) sorted
/// ascending.
///
/// Invariant under permutation of the typed order.
///
/// # Example
///
/// ```
/// use brick_domain::{Triple, is_pythagorean};
///
/// assert!(is_pythagorean(&Triple::new([5, 12, 13])));
/// assert!(is_pythagorean(&Triple::new([13, 5, 12])));
/// assert!(!is_pythagorean(&Triple::new([5, 12, 14])));
/// ```
pub fn is_pythagorean(triple: &Triple) -> bool {
    let [a, b, c] = triple.sorted();
    sum_of_squares_eq(a, b, c)
}

/// The typed value whose square equals the sum of the other two squares.
///
/// Checks all three assignments in typed order and returns the first
/// match. `None` means the triple is not Pythagorean; after
/// [`is_pythagorean`] has passed, a match is guaranteed.
pub fn hypotenuse(triple: &Triple) -> Option<u64> {
    let [a, b, c] = triple.values();
    if sum_of_squares_eq(a, b, c) {
        Some(c)
    } else if sum_of_squares_eq(a, c, b) {
        Some(b)
    } else if sum_of_squares_eq(b, c, a) {
        Some(a)
    } else {
        None
    }
}

/// The complementary pair to [`hypotenuse`] — the two edges of the face.
///
/// Same exhaustive three-way check, returning the pair whose squares sum
/// to the third value. `None` means the triple is not Pythagorean.
pub fn legs(triple: &Triple) -> Option<[u64; 2]> {
    let [a, b, c] = triple.values();
    if sum_of_squares_eq(a, b, c) {
        Some([a, b])
    } else if sum_of_squares_eq(a, c, b) {
        Some([a, c])
    } else if sum_of_squares_eq(b, c, a) {
        Some([b, c])
    } else {
        None
    }
}
