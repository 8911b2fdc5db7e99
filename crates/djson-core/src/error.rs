//! Error types for document parsing, path operations and sorting.

use crate::value::Kind;
use thiserror::Error;

/// Errors that can occur while parsing or mutating a document.
///
/// Lookups that simply miss (absent key, out-of-range index, a value that
/// does not coerce) are not errors; they surface as `None` or as the
/// caller's default.
#[derive(Error, Debug)]
pub enum DocError {
    /// The input text was not valid JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The path could not be tokenized, or the walk hit a missing key or a
    /// node of the wrong shape. Arrays grown during the walk stay grown.
    #[error("invalid path: {path}")]
    InvalidPath { path: String },

    /// The elements of a sequence (or the sort field of each element) do not
    /// share one scalar kind. The sequence is left untouched.
    #[error("cannot sort: {0}")]
    Unsortable(String),

    /// The target container refused the value: a NaN or infinite float, or
    /// a container that already holds the target. Nothing was written.
    #[error("cannot store {kind} value here")]
    Unstorable { kind: Kind },

    /// An array operation was applied to a node of another kind.
    #[error("expected an array, found {kind}")]
    NotAnArray { kind: Kind },
}

impl DocError {
    pub(crate) fn invalid_path(path: impl Into<String>) -> Self {
        DocError::InvalidPath { path: path.into() }
    }
}

/// Convenience alias used throughout djson-core.
pub type Result<T> = std::result::Result<T, DocError>;
