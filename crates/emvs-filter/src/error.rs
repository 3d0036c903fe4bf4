//! Error types for emvs-filter
//!
//! Every variant describes a precondition that is checked before any
//! filtering work starts.

use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] emvs_core::Error),

    /// Unsupported pixel depth for this operation
    #[error("unsupported depth: expected {expected}, got {actual}")]
    UnsupportedDepth {
        /// Expected depth description
        expected: &'static str,
        /// Actual depth in bits
        actual: u32,
    },

    /// Mask and image sizes differ
    #[error("mask size {}x{} does not match image size {}x{}", .mask.0, .mask.1, .image.0, .image.1)]
    MaskSizeMismatch {
        /// Image width and height
        image: (u32, u32),
        /// Mask width and height
        mask: (u32, u32),
    },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
