//! Error types for tiling operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all tiling operations
#[derive(Debug)]
pub enum TilingError {
    /// Ring or stride failed validation before any scanning
    InvalidInput {
        /// Name of the rejected input
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// The containment primitive could not evaluate a candidate
    ///
    /// Aborts the whole tiling call; a partially scanned result would
    /// silently misrepresent coverage, so none is returned.
    Geometry {
        /// Name of the operation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Failed to load a polygon ring from disk
    RingLoad {
        /// Path to the ring file
        path: PathBuf,
        /// Description of what went wrong
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to save a preview image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },
}

impl fmt::Display for TilingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid input '{parameter}' = '{value}': {reason}")
            }
            Self::Geometry { operation, reason } => {
                write!(f, "Geometry failure in {operation}: {reason}")
            }
            Self::RingLoad { path, reason } => {
                write!(f, "Failed to load ring '{}': {reason}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for TilingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TilingError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Convenience type alias for tiling results
pub type Result<T> = std::result::Result<T, TilingError>;

/// Create an invalid input error
pub fn invalid_input(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TilingError {
    TilingError::InvalidInput {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a geometry error
pub fn geometry_error(operation: &'static str, reason: &impl ToString) -> TilingError {
    TilingError::Geometry {
        operation,
        reason: reason.to_string(),
    }
}

/// Create a ring loading error
pub fn ring_load_error(path: &Path, reason: &impl ToString) -> TilingError {
    TilingError::RingLoad {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}
