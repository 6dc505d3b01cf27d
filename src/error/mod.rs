//! Error types for scanning and rewriting files.

use std::io;
use std::path::PathBuf;

/// Per-file failure classes.
///
/// Every variant is caught at the file-processing boundary, printed as a
/// diagnostic, and never aborts the overall run. The exception is
/// `Canceled`, which additionally stops the traversal.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("error opening {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("can't read first 512 bytes of {}: {source}", .path.display())]
    Sniff { path: PathBuf, source: io::Error },

    #[error("can't seek {}: {source}", .path.display())]
    Seek { path: PathBuf, source: io::Error },

    #[error("error reading {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("unable to create a scratch file: {source}")]
    Scratch { source: io::Error },

    #[error("error writing to scratch file: {source}")]
    ScratchWrite { source: io::Error },

    #[error("can't sync scratch file: {source}")]
    ScratchSync { source: io::Error },

    #[error("error recreating {}: {source}", .path.display())]
    Recreate { path: PathBuf, source: io::Error },

    #[error("error writing to destination file {}: {source}", .path.display())]
    Copy { path: PathBuf, source: io::Error },

    #[error("error flushing destination file {}: {source}", .path.display())]
    Flush { path: PathBuf, source: io::Error },

    #[error("interrupted")]
    Canceled,
}

impl ConvertError {
    /// Whether this error should stop the traversal as a whole.
    pub fn is_canceled(&self) -> bool {
        matches!(self, ConvertError::Canceled)
    }
}

/// Fatal configuration error: a glob pattern that does not compile.
///
/// Reported before any file is touched; the process exits non-zero.
#[derive(Debug, thiserror::Error)]
#[error("invalid pattern: {pattern}")]
pub struct InvalidPattern {
    pub pattern: String,
    #[source]
    pub source: glob::PatternError,
}

/// Result type for per-file conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;
