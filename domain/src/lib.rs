//! Domain layer for euler-brick
//!
//! This crate contains the core validation and reconstruction logic.
//! It has no dependencies on presentation concerns and performs no I/O;
//! every evaluation is a pure function over already-parsed values.
//!
//! # Core Concepts
//!
//! ## Face
//!
//! A Pythagorean triple read as one face of a rectangular box: the two
//! legs are the edges of the face, the hypotenuse is its diagonal.
//!
//! ## Pair evaluation
//!
//! Two faces belong to the same Euler brick candidate when they share
//! exactly one edge, and that edge is a leg (never the diagonal) in both.
//! The evaluation result is a [`Verdict`] — user-input problems are data,
//! not errors. Only internal-consistency violations surface as
//! [`DomainError`].

pub mod brick;
pub mod core;
pub mod triple;

// Re-export commonly used types
pub use brick::{
    evaluation::{Verdict, check_pair, evaluate_pair, reconstruct, shared_dimension},
    value_objects::{BrickDimensions, Strictness, TripleSlot},
};
pub use self::core::error::DomainError;
pub use triple::{
    parsing::{ParseTripleError, parse_triple},
    pythagorean::{hypotenuse, is_pythagorean, legs},
    value_objects::{Triple, ZeroValueError},
};
