//! Error types for filesystem usage queries.

use std::io;
use std::path::{Path, PathBuf};

/// Error returned by usage queries and descriptor resolution.
///
/// Platform failures are surfaced verbatim via the `#[source]` chain —
/// nothing is swallowed or replaced with a default. Uses
/// `#[non_exhaustive]` for forward compatibility.
///
/// # Examples
///
/// ```rust
/// use fsusage::UsageError;
/// use std::path::PathBuf;
///
/// let err = UsageError::NotFound { path: PathBuf::from("/missing") };
/// assert_eq!(err.to_string(), "not found: /missing");
/// ```
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum UsageError {
    /// Path does not exist.
    ///
    /// Terminal everywhere except inside the descriptor resolver, which
    /// retries with a shortened path.
    #[error("not found: {path}")]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The platform facility refused the query. Never retried.
    #[error("{operation}: permission denied: {path}")]
    PermissionDenied {
        /// The path where permission was denied.
        path: PathBuf,
        /// The operation that was denied.
        operation: &'static str,
    },

    /// No usage strategy is available on this build or platform.
    #[error("filesystem usage reporting is not supported on this platform")]
    Unsupported,

    /// The platform facility failed. Never retried.
    #[error("{operation} failed for {path}: {source}")]
    Io {
        /// The operation that failed.
        operation: &'static str,
        /// The path involved in the operation.
        path: PathBuf,
        /// The underlying platform error.
        #[source]
        source: io::Error,
    },
}

impl UsageError {
    /// Classify a platform error, keeping the path and operation context.
    pub fn from_io(operation: &'static str, path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => UsageError::NotFound {
                path: path.to_path_buf(),
            },
            io::ErrorKind::PermissionDenied => UsageError::PermissionDenied {
                path: path.to_path_buf(),
                operation,
            },
            _ => UsageError::Io {
                operation,
                path: path.to_path_buf(),
                source,
            },
        }
    }

    /// Returns `true` for the "path does not exist" case.
    ///
    /// This is the only error the descriptor resolver recovers from.
    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self, UsageError::NotFound { .. })
    }
}
