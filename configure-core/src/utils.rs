//! Various utilities.
pub mod log;
