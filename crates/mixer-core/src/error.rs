//! Error types for the mixer core.
//!
//! None of these are fatal to a running session: callers log them and carry on
//! with the previous in-memory state.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MixerError {
    /// No blob stored under the persistence key
    #[error("no saved configuration under key {0:?}")]
    MissingBlob(String),

    /// Blob or config JSON could not be parsed or encoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Sound id outside the catalog
    #[error("unknown sound id {0}")]
    UnknownSound(usize),
}

pub type Result<T> = std::result::Result<T, MixerError>;
