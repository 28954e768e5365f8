//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`] — internal-consistency failures

pub mod error;
