//! Framework error types.
//!
//! Sub-crates define their own error enums and wrap [`DayOutOfRange`] as one
//! variant so a bad weekday index stays distinguishable everywhere.

use thiserror::Error;

/// A weekday index outside `[0, 6]`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("day index {0} out of range: expected 0 (Monday) through 6 (Sunday)")]
pub struct DayOutOfRange(pub i64);

/// The top-level error type for `hw-core`.
#[derive(Debug, Error)]
pub enum HwError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `hw-core`.
pub type HwResult<T> = Result<T, HwError>;
