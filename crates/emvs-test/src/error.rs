//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to build a synthetic image
    #[error("failed to build image: {0}")]
    Core(#[from] emvs_core::Error),

    /// Invalid generator parameter
    #[error("invalid generator parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
