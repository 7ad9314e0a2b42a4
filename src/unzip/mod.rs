//! ZIP archive extraction with overwrite control, passwords, and progress
//! reporting.
//!
//! ## Architecture
//!
//! The module is organized into four main components:
//!
//! - [`options`]: Per-run policy ([`UnzipOptions`]) and the full request
//!   bundle ([`ExtractionRequest`])
//! - [`observer`]: The [`UnzipObserver`] callback trait for lifecycle events
//! - [`info`]: Read-only metadata snapshots handed to observers and returned
//!   by the inspection helpers
//! - [`extractor`]: The extraction engine and the convenience entry points
//!
//! ## Extraction Flow
//!
//! One extraction run:
//! 1. Open the archive and read its global info
//! 2. Notify the observer that the archive is about to be extracted
//! 3. Ensure the destination directory exists
//! 4. For each entry in archive order: notify, then create the directory,
//!    skip the existing file, or stream the decompressed bytes to disk
//! 5. Notify the observer that the archive finished
//!
//! Entries are processed strictly in order on the calling thread. A fatal
//! error aborts the run; entries already extracted stay on disk.
//!
//! ## Supported Features
//!
//! - STORED and DEFLATE compression methods
//! - Traditional ZIP encryption (password per run)
//! - Unix permission bits on extracted files
//!
//! ## Limitations
//!
//! - No multi-disk archive support
//! - Symbolic link entries are extracted as regular files

mod extractor;
mod info;
mod observer;
mod options;

pub use extractor::{
    UnzipReport, extract, list_entries, read_archive_info, unzip_file, unzip_file_with_observer,
    unzip_file_with_options,
};
pub use info::{ArchiveInfo, EntryInfo, ModTime};
pub use observer::UnzipObserver;
pub use options::{ExtractionRequest, UnzipOptions};
