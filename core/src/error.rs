use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for nlstdb operations
pub type Result<T> = std::result::Result<T, NlstError>;

/// Error types for nlstdb operations
///
/// Every variant is fatal for the import run that raised it. Numeric
/// coercion problems never show up here; see [`FieldCoercionWarning`].
#[derive(Error, Debug)]
pub enum NlstError {
    /// Destination database already exists (checked before any input is read)
    #[error("destination already exists: {path}")]
    DestinationExists { path: PathBuf },

    /// Input document has the wrong shape, a missing key, or a study
    /// document that does not hold exactly one study
    #[error("malformed input {path}: {reason}")]
    MalformedInput { path: PathBuf, reason: String },

    /// Input document could not be opened or read
    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// SQLite error
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl NlstError {
    pub(crate) fn malformed(path: &Path, reason: impl Into<String>) -> Self {
        NlstError::MalformedInput {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    pub(crate) fn file_read(path: &Path, source: std::io::Error) -> Self {
        NlstError::FileRead {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Returns true for [`NlstError::MalformedInput`]
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, NlstError::MalformedInput { .. })
    }
}

/// A single auxiliary numeric token that could not be read as a number
///
/// Non-fatal: the decoder resolves the slot to an absent value and keeps going.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("could not read {slot} token {token:?} as a number")]
pub struct FieldCoercionWarning {
    /// Name of the auxiliary slot
    pub slot: &'static str,

    /// Raw token as found in the description
    pub token: String,
}
