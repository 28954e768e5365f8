//! Use cases for euler-brick.

pub mod evaluate_pair;
