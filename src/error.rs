//! Error types shared by the loaders and the clustering pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a bushou run
///
/// Argument-count problems never reach this type: clap rejects them before
/// any file is opened.
#[derive(Error, Debug)]
pub enum BushouError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Decomposition row with the wrong column count or a bad stroke field.
    /// `line` is the 1-based line number in the source file.
    #[error("Malformed decomposition record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("Malformed vocabulary file on line {line}: {reason}")]
    MalformedVocabulary { line: usize, reason: String },
}

/// Result type for bushou operations
pub type Result<T> = std::result::Result<T, BushouError>;

impl BushouError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
