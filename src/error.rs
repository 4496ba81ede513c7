//! Error types for strip-ifdef operations.
//!
//! This module provides the error hierarchy using `thiserror` for directive
//! resolution, file I/O, and configuration handling.

use thiserror::Error;

/// Result type alias for strip-ifdef operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for strip-ifdef operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Directive-resolution errors (malformed region structure).
    #[error("directive error: {0}")]
    Directive(#[from] DirectiveError),

    /// I/O errors (file operations).
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// Configuration errors.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// A specific file failed to preprocess during a multi-file run.
    #[error("{path}: {source}")]
    File {
        /// Root-relative path of the failing file.
        path: String,
        /// The underlying failure.
        #[source]
        source: Box<Error>,
    },
}

/// Errors raised while resolving directive regions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectiveError {
    /// An `//#ifdef` open marker was never closed by a matching `//#endif`.
    ///
    /// Surfaced as a fatal error rather than silently retaining to end of
    /// file. The line number is 1-based.
    #[error("unterminated //#ifdef directive opened on line {line}")]
    Unterminated {
        /// 1-based line number of the unmatched open marker.
        line: usize,
    },
}

/// I/O-specific errors for file operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// File doesn't exist.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: String,
    },

    /// File read error.
    #[error("failed to read {path}: {reason}")]
    ReadFailed {
        /// Path that failed to read.
        path: String,
        /// Reason for the failure.
        reason: String,
    },

    /// File write error.
    #[error("failed to write {path}: {reason}")]
    WriteFailed {
        /// Path that failed to write.
        path: String,
        /// Reason for the failure.
        reason: String,
    },

    /// Memory mapping error.
    #[error("failed to mmap {path}: {reason}")]
    MmapFailed {
        /// Path that failed to map.
        path: String,
        /// Reason for the failure.
        reason: String,
    },

    /// Directory enumeration error.
    #[error("failed to read directory {path}: {reason}")]
    ReadDirFailed {
        /// Directory that failed to enumerate.
        path: String,
        /// Reason for the failure.
        reason: String,
    },
}

impl Error {
    /// Creates a configuration error with the given message.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unterminated_display() {
        let err = DirectiveError::Unterminated { line: 7 };
        assert_eq!(
            err.to_string(),
            "unterminated //#ifdef directive opened on line 7"
        );
    }

    #[test]
    fn test_error_from_directive() {
        let err: Error = DirectiveError::Unterminated { line: 1 }.into();
        assert!(matches!(err, Error::Directive(_)));
        assert!(err.to_string().contains("directive error"));
    }

    #[test]
    fn test_error_from_io() {
        let err: Error = IoError::FileNotFound {
            path: "missing.ts".to_string(),
        }
        .into();
        assert!(err.to_string().contains("missing.ts"));
    }

    #[test]
    fn test_config_error() {
        let err = Error::config("bad mapping");
        assert_eq!(err.to_string(), "configuration error: bad mapping");
    }
}
