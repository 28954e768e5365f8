//! Triple subdomain — the parsed user input and its classification.
//!
//! - [`value_objects::Triple`] — three positive edge lengths, order as typed
//! - [`parsing::parse_triple`] — free-form text to [`Triple`]
//! - [`pythagorean`] — validity test and leg/hypotenuse classification

pub mod parsing;
pub mod pythagorean;
pub mod value_objects;

// Re-export main types
pub use parsing::{ParseTripleError, parse_triple};
pub use pythagorean::{hypotenuse, is_pythagorean, legs};
pub use value_objects::{Triple, ZeroValueError};
