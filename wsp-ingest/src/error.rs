//! Error types for wsp-ingest
//!
//! Every failure is a deterministic function of the input bytes except
//! [`Error::Io`], which callers may choose to retry.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the ingestion pipeline
#[derive(Error, Debug)]
pub enum Error {
    /// Input is not an uncompressed PCM WAV (other extension or codec)
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Header fields inconsistent with the payload, or unreadable structure
    #[error("Malformed container: {0}")]
    MalformedContainer(String),

    /// Declared bit depth is not 8, 16 or 32
    #[error("Unsupported bit depth: expected 8, 16 or 32, got {bits}")]
    UnsupportedBitDepth { bits: u16 },

    /// File could not be opened or read
    #[error("File I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Caller asked for a zero sample rate
    #[error("Invalid target sample rate: expected a positive rate, got {0}")]
    InvalidTargetRate(u32),
}

impl Error {
    /// Whether retrying the same call could succeed.
    ///
    /// Only storage failures are transient; everything else is decided by the
    /// file contents.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Io { .. })
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience Result type using wsp-ingest Error
pub type Result<T> = std::result::Result<T, Error>;
