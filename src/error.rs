//! Error types for the apex-points library
//!
//! This module provides the main error and result types used throughout the
//! library. All errors use the `thiserror` crate for automatic trait
//! implementations; module-specific errors convert into the crate error.

use crate::{geometry::PointError, io::IoError};
use thiserror::Error;

/// Main result type used throughout the apex-points library
pub type ApexPointsResult<T> = Result<T, ApexPointsError>;

/// Main error type for the apex-points library
#[derive(Debug, Clone, Error)]
pub enum ApexPointsError {
    /// Point construction / geometry errors
    #[error("Geometry error: {0}")]
    Geometry(String),

    /// IO related errors (record reading/writing, parsing)
    #[error("IO error: {0}")]
    Io(String),

    /// Invalid input parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

// Convert module-specific errors to ApexPointsError

impl From<PointError> for ApexPointsError {
    fn from(err: PointError) -> Self {
        ApexPointsError::Geometry(err.to_string())
    }
}

impl From<IoError> for ApexPointsError {
    fn from(err: IoError) -> Self {
        ApexPointsError::Io(err.to_string())
    }
}
