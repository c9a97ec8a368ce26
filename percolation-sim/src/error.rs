//! Error types for the percolation simulator.
//!
//! Both variants are precondition violations reported straight back to the
//! caller. A simulation that constructs successfully cannot fail afterwards.

/// Errors raised by grid and experiment construction or grid queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PercolationError {
    /// A size, trial count or sample set was rejected at construction.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A 1-based grid coordinate fell outside `[1, n]`.
    #[error("site ({row}, {col}) is outside the {n}x{n} grid")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Grid dimension.
        n: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PercolationError>;
