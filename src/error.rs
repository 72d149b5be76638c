//! Error types for rs-postextract.
//!
//! Only page-provider level failures surface as errors. Structure mismatches
//! inside a snapshot are recovered by the extractor and never reach this type.

/// Error type for acquisition and batch operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The page provider could not produce a usable snapshot.
    #[error("Page acquisition failed for {target}: {reason}")]
    AcquisitionFailure { target: String, reason: String },

    /// The target is not an absolute http(s) URL.
    #[error("Invalid target {target:?}: {reason}")]
    InvalidTarget { target: String, reason: String },

    /// The batch exceeds the configured target cap.
    #[error("Batch of {count} targets exceeds the limit of {limit}")]
    BatchTooLarge { count: usize, limit: usize },

    /// Input could not be read or decoded.
    #[error("Input parsing failed: {0}")]
    Parse(String),
}

impl Error {
    /// Shorthand used by page providers to report a failed acquisition.
    #[must_use]
    pub fn acquisition(target: impl Into<String>, reason: impl ToString) -> Self {
        Self::AcquisitionFailure {
            target: target.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type alias for acquisition and batch operations.
pub type Result<T> = std::result::Result<T, Error>;
