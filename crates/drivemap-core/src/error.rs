//! Error types for mapping loading and pattern compilation.

use std::path::PathBuf;
use thiserror::Error;

/// A mapping key that could not be turned into a usable pattern.
#[derive(Debug, Clone, Error)]
pub enum PatternError {
    /// The regex engine rejected the pattern text.
    #[error("invalid pattern '{pattern}': {message}")]
    Syntax { pattern: String, message: String },
}

impl PatternError {
    /// The pattern text as written in the mapping file.
    pub fn pattern(&self) -> &str {
        match self {
            Self::Syntax { pattern, .. } => pattern,
        }
    }
}

/// Errors turning a decoded JSON document into a mapping.
#[derive(Debug, Error)]
pub enum MappingError {
    /// Content is not valid JSON.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// JSON root is something other than an object.
    #[error("expected a JSON object at the root, found {found}")]
    NotAnObject { found: &'static str },

    /// Label value cannot be printed as a string.
    #[error("label for pattern '{pattern}' must be a string, found {found}")]
    InvalidLabel {
        pattern: String,
        found: &'static str,
    },

    #[error(transparent)]
    Pattern(#[from] PatternError),
}

/// Errors loading a mapping file from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read the mapping file.
    #[error("failed to read mapping file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File was read but its content is not a usable mapping.
    #[error("invalid mapping file {path}: {source}")]
    Mapping {
        path: PathBuf,
        #[source]
        source: MappingError,
    },
}

/// Errors reading a candidate list.
#[derive(Debug, Error)]
pub enum CandidateError {
    #[error("failed to read candidate file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for mapping file loading.
pub type Result<T> = std::result::Result<T, LoadError>;
