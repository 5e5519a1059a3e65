// ============================================================
// Layer 6 — Acquisition Errors
// ============================================================
// Everything that can go wrong while making the corpus
// available on disk. These are fatal for the load call and are
// passed to the caller as-is (inside an anyhow::Error, from
// which they can be recovered with `downcast_ref`).

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// The URL has no file name to save the archive under
    #[error("Cannot derive an archive file name from URL '{url}'")]
    InvalidUrl { url: String },

    /// Transport-level failure (DNS, TLS, connection reset, ...)
    #[error("HTTP request for '{url}' failed: {message}")]
    Http { url: String, message: String },

    /// Server answered with a non-success status
    #[error("Server returned HTTP {status} for '{url}'")]
    Status { url: String, status: u16 },

    #[error("I/O error at '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Archive format not handled by the extractor
    #[error("Unsupported archive type: '{}'", path.display())]
    UnsupportedArchive { path: PathBuf },

    #[error("Failed to extract '{}': {source}", archive.display())]
    Extract {
        archive: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Presence check failed after extraction
    #[error("[DOWNLOAD FAILED] '{}' not found after extraction", check_file.display())]
    CheckFileMissing { check_file: PathBuf },
}

pub type FetchResult<T> = std::result::Result<T, FetchError>;
