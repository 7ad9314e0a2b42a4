//! Error reporting for archive extraction.
//!
//! Every failure identifies the stage it happened in: opening the archive,
//! preparing the destination, or processing one entry. Entry-level variants
//! carry the offending entry's path inside the archive.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A Result type alias over [`UnzipError`] to minimise repetition.
pub type Result<T> = std::result::Result<T, UnzipError>;

/// An extraction failure and the stage it occurred in.
#[derive(Debug, Error)]
pub enum UnzipError {
    /// The archive could not be opened: missing or unreadable path, or a
    /// file the compression library rejects as malformed.
    #[error("failed to open archive '{path}': {source}")]
    ArchiveOpen {
        path: PathBuf,
        source: zip::result::ZipError,
    },

    /// The destination directory could not be created or accessed.
    #[error("cannot create destination directory '{path}': {source}")]
    Destination { path: PathBuf, source: io::Error },

    /// An entry's name resolves outside the destination directory.
    #[error("entry '{entry}' escapes the destination directory")]
    UnsafeEntryPath { entry: String },

    /// An entry's decompressed stream could not be produced or read:
    /// corrupt data, CRC mismatch, or a wrong or missing password.
    #[error("failed to decompress entry '{entry}': {source}")]
    EntryDecompression {
        entry: String,
        source: zip::result::ZipError,
    },

    /// The filesystem rejected writing an entry's output.
    #[error("failed to write entry '{entry}' to '{path}': {source}")]
    EntryWrite {
        entry: String,
        path: PathBuf,
        source: io::Error,
    },
}
