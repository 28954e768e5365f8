//! Interactive mode.

pub mod session;

pub use session::BrickRepl;
