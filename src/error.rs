use thiserror::Error;

/// Errors returned by the vectorization and clustering pipeline.
///
/// Undersized or empty document sets are deliberately *not* errors: the
/// engines return a well-formed degenerate result for those, so callers can
/// show "not enough data" messaging without an error path. The variants
/// here cover conditions no degenerate result can answer.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Vectors in a dataset have inconsistent dimensionality.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected dimensionality.
        expected: usize,
        /// Found dimensionality.
        found: usize,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
