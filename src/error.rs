//! Error types for the railfence library.

use thiserror::Error;

/// Errors produced by the railfence library.
///
/// Configuration errors are reported when a [`RailFence`](crate::RailFence)
/// is built; structural errors are reported per call, once the text length
/// is known.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RailFenceError {
    /// Row count is less than 2.
    #[error("Row count must be at least 2, got {rows}")]
    InvalidRowCount { rows: usize },

    /// Mask length differs from the row count.
    #[error("Mask length must equal the row count: expected {expected}, got {actual}")]
    MaskLengthMismatch { expected: usize, actual: usize },

    /// Mask contains a character outside `A-Za-z`.
    #[error("Mask character {ch:?} at position {position} is not in A-Za-z")]
    InvalidMaskChar { ch: char, position: usize },

    /// Two mask characters share the same alphabetic rank.
    #[error("Mask character {ch:?} repeats at positions {first} and {second}")]
    DuplicateMaskRank {
        ch: char,
        first: usize,
        second: usize,
    },

    /// Text is too short to fill at least two columns.
    #[error("Unexpected column count {columns} for {length} characters over {rows} rows")]
    UnexpectedColumnCount {
        columns: usize,
        length: usize,
        rows: usize,
    },
}
