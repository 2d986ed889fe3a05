//! Error types for possibilities.

use thiserror::Error;

/// Result type alias for estimator operations.
pub type Result<T> = std::result::Result<T, EstimateError>;

/// Errors that can occur while computing a search cost estimate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EstimateError {
    /// Pattern length must cover at least one position and stay within the estimator's limit.
    #[error("Invalid length: {length} (must be between 1 and {max})")]
    InvalidLength {
        /// The rejected length.
        length: usize,
        /// The longest accepted length.
        max: usize,
    },

    /// Alphabet must contain at least one symbol.
    #[error("Invalid alphabet length: 0 (must be at least 1)")]
    InvalidAlphabet,
}
