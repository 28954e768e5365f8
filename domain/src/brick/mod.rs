//! Brick subdomain — shared-edge detection and pair evaluation.
//!
//! Two validated faces belong to one Euler brick candidate when they
//! share exactly one value and that value is a leg in both. The three box
//! edges are then reconstructed as: the non-shared leg of the first face,
//! the shared edge, and the non-shared leg of the second face.
//!
//! ```text
//!            +--------- face 2: (b, c, diag2)
//!            |
//!      +-----+--------+
//!     /              /|
//!    /              / |  c
//!   +--------------+  +
//!   |              | /
//!   |              |/ b      face 1: (a, b, diag1)
//!   +--------------+
//!          a
//! ```
//!
//! By default the diagonal of the third face (spanned by `a` and `c`) is
//! *not* checked — [`Strictness::Strict`] turns that check on.

pub mod evaluation;
pub mod value_objects;

// Re-export main types
pub use evaluation::{Verdict, check_pair, evaluate_pair, reconstruct, shared_dimension};
pub use value_objects::{BrickDimensions, Strictness, TripleSlot};
