//! # fastunzip
//!
//! A ZIP extraction facade with overwrite control, password support, and
//! progress callbacks.
//!
//! This library extracts ZIP archives from the local filesystem into a
//! destination directory in a single blocking call. Callers that need more
//! than a plain unpack can opt into overwrite semantics, supply a password
//! for encrypted entries, or attach an observer that receives lifecycle
//! events for the archive and for every entry as extraction proceeds.
//!
//! ## Features
//!
//! - One-call extraction of a whole archive into a destination directory
//! - Keep-existing or overwrite policy for colliding files
//! - Password support for traditionally encrypted entries
//! - Observer callbacks before and after the archive and each entry
//! - Archive and entry inspection without extracting
//! - Entry paths sanitized against directory traversal
//!
//! ## Example
//!
//! ```no_run
//! use fastunzip::{UnzipOptions, unzip_file, unzip_file_with_options};
//!
//! fn main() -> anyhow::Result<()> {
//!     // Plain extraction: existing files are kept.
//!     let report = unzip_file("archive.zip", "output")?;
//!     println!("{} files extracted", report.files_written);
//!
//!     // Replace existing files and decrypt protected entries.
//!     let options = UnzipOptions::default().overwrite(true).password("secret");
//!     unzip_file_with_options("archive.zip", "output", &options)?;
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod error;
pub mod unzip;

pub use cli::Cli;
pub use error::{Result, UnzipError};
pub use unzip::{
    ArchiveInfo, EntryInfo, ExtractionRequest, ModTime, UnzipObserver, UnzipOptions, UnzipReport,
    extract, list_entries, read_archive_info, unzip_file, unzip_file_with_observer,
    unzip_file_with_options,
};
