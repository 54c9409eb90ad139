//! Error types and context management for corpus analysis operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all analysis operations
#[derive(Debug)]
pub enum AnalysisError {
    /// Corpus structure was not recognized
    ///
    /// Raised before any aggregation begins, for example when the top-level
    /// JSON value has no `inscriptions` array or a record is not an object
    InputFormat {
        /// Corpus file or stream the problem was found in
        source_name: String,
        /// Description of what's wrong with the corpus structure
        reason: String,
    },

    /// Corpus or mapping file is not valid JSON
    CorpusParse {
        /// Path to the offending file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Analysis parameter validation failed
    InvalidParameter {
        /// Parameter name as given on the command line or in `AnalysisConfig`
        parameter: &'static str,
        /// Rejected value, rendered as text
        value: String,
        /// Accepted range or shape
        reason: String,
    },

    /// Reading a corpus or writing a report failed
    FileSystem {
        /// File or directory being accessed
        path: PathBuf,
        /// What was being done, e.g. `read corpus`
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to serialize an analysis artifact
    Serialization {
        /// Artifact and direction, e.g. `transition model export`
        operation: &'static str,
        /// Underlying JSON error
        source: serde_json::Error,
    },
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputFormat {
                source_name,
                reason,
            } => {
                write!(f, "Unrecognized corpus format in '{source_name}': {reason}")
            }
            Self::CorpusParse { path, source } => {
                write!(f, "Failed to parse JSON in '{}': {source}", path.display())
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
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
            Self::Serialization { operation, source } => {
                write!(f, "Serialization error in {operation}: {source}")
            }
        }
    }
}

impl std::error::Error for AnalysisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CorpusParse { source, .. } | Self::Serialization { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::InputFormat { .. } | Self::InvalidParameter { .. } => None,
        }
    }
}

/// Convenience type alias for analysis results
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Attaches the path and operation to bare I/O failures
pub trait WithPath<T> {
    /// Convert an I/O result into an analysis result naming the path involved
    ///
    /// # Errors
    ///
    /// Propagates the original I/O error wrapped as [`AnalysisError::FileSystem`]
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::io::Result<T> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| AnalysisError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AnalysisError {
    AnalysisError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an input format error
pub fn input_format(source_name: &impl ToString, reason: &impl ToString) -> AnalysisError {
    AnalysisError::InputFormat {
        source_name: source_name.to_string(),
        reason: reason.to_string(),
    }
}
