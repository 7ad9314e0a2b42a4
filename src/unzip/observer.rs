use std::path::Path;

use super::info::{ArchiveInfo, EntryInfo};

/// Callbacks invoked at extraction lifecycle points.
///
/// Every method has a no-op default body, so implementors override only the
/// subset of events they care about. Callbacks run synchronously on the
/// extracting thread, between filesystem operations; entry hooks receive
/// the entry's index in archive order, its computed destination path, and
/// its metadata.
pub trait UnzipObserver {
    /// Invoked once, after the archive is opened and before any entry is
    /// processed.
    fn will_unzip_archive(&self, archive: &Path, info: &ArchiveInfo) {
        let _ = (archive, info);
    }

    /// Invoked once, after every entry has been processed.
    fn did_unzip_archive(&self, archive: &Path, info: &ArchiveInfo, destination: &Path) {
        let _ = (archive, info, destination);
    }

    /// Invoked before an entry is processed.
    fn will_unzip_entry(&self, index: usize, path: &Path, info: &EntryInfo) {
        let _ = (index, path, info);
    }

    /// Invoked after an entry has been processed: file written, directory
    /// created, or skipped by the overwrite policy.
    fn did_unzip_entry(&self, index: usize, path: &Path, info: &EntryInfo) {
        let _ = (index, path, info);
    }
}
