use std::fs::{self, File};
use std::io::{self, ErrorKind, Read, Write};
use std::path::Path;

use tracing::{debug, trace};
use zip::ZipArchive;
use zip::result::ZipError;

use crate::error::{Result, UnzipError};

use super::info::{ArchiveInfo, EntryInfo};
use super::observer::UnzipObserver;
use super::options::{ExtractionRequest, UnzipOptions};

/// Totals accumulated over one extraction run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnzipReport {
    pub files_written: usize,
    /// Files left untouched because they already existed and overwriting
    /// was not requested.
    pub files_skipped: usize,
    pub directories_created: usize,
    /// Decompressed bytes written to disk.
    pub bytes_written: u64,
}

/// Extract every entry of `archive` into `destination` with the default
/// policy: existing files are kept, no password, no observer.
pub fn unzip_file(archive: impl AsRef<Path>, destination: impl AsRef<Path>) -> Result<UnzipReport> {
    extract(&ExtractionRequest::new(archive.as_ref(), destination.as_ref()))
}

/// Extract with explicit overwrite/password options.
pub fn unzip_file_with_options(
    archive: impl AsRef<Path>,
    destination: impl AsRef<Path>,
    options: &UnzipOptions,
) -> Result<UnzipReport> {
    let request = ExtractionRequest::new(archive.as_ref(), destination.as_ref())
        .options(options.clone());
    extract(&request)
}

/// Extract with default options, reporting lifecycle events to `observer`.
pub fn unzip_file_with_observer(
    archive: impl AsRef<Path>,
    destination: impl AsRef<Path>,
    observer: &dyn UnzipObserver,
) -> Result<UnzipReport> {
    let request =
        ExtractionRequest::new(archive.as_ref(), destination.as_ref()).observer(observer);
    extract(&request)
}

/// Perform one complete extraction.
///
/// Runs synchronously on the calling thread: opens the archive, reads its
/// global info, ensures the destination directory exists, then processes
/// entries in archive order. The archive handle is released on every exit
/// path. Fatal errors abort the remaining entries; files already written
/// for prior entries stay on disk.
#[tracing::instrument(skip_all, fields(archive = %request.archive.display()))]
pub fn extract(request: &ExtractionRequest<'_>) -> Result<UnzipReport> {
    let mut archive = open_archive(request.archive)?;
    let info = ArchiveInfo::from_archive(&archive);
    debug!(entries = info.entry_count, "opened archive");

    if let Some(observer) = request.observer {
        observer.will_unzip_archive(request.archive, &info);
    }

    fs::create_dir_all(request.destination).map_err(|source| UnzipError::Destination {
        path: request.destination.to_path_buf(),
        source,
    })?;

    let mut report = UnzipReport::default();
    for index in 0..info.entry_count {
        extract_entry(&mut archive, index, request, &mut report)?;
    }

    if let Some(observer) = request.observer {
        observer.did_unzip_archive(request.archive, &info, request.destination);
    }

    debug!(
        files = report.files_written,
        skipped = report.files_skipped,
        "extraction finished"
    );
    Ok(report)
}

/// Read an archive's global metadata without extracting anything.
pub fn read_archive_info(archive: impl AsRef<Path>) -> Result<ArchiveInfo> {
    let archive = open_archive(archive.as_ref())?;
    Ok(ArchiveInfo::from_archive(&archive))
}

/// List every entry's metadata in archive order without extracting.
pub fn list_entries(archive: impl AsRef<Path>) -> Result<Vec<EntryInfo>> {
    let mut archive = open_archive(archive.as_ref())?;
    let mut entries = Vec::with_capacity(archive.len());
    for index in 0..archive.len() {
        let entry_name = entry_display_name(&archive, index);
        let file = archive
            .by_index_raw(index)
            .map_err(|source| UnzipError::EntryDecompression {
                entry: entry_name,
                source,
            })?;
        entries.push(EntryInfo::from_zip_file(&file));
    }
    Ok(entries)
}

#[tracing::instrument]
fn open_archive(path: &Path) -> Result<ZipArchive<File>> {
    let file = File::open(path).map_err(|e| UnzipError::ArchiveOpen {
        path: path.to_path_buf(),
        source: ZipError::from(e),
    })?;
    ZipArchive::new(file).map_err(|source| UnzipError::ArchiveOpen {
        path: path.to_path_buf(),
        source,
    })
}

/// Process one entry: read its metadata, notify the observer, then create
/// the directory, skip, or write the file according to its kind and the
/// overwrite policy.
fn extract_entry(
    archive: &mut ZipArchive<File>,
    index: usize,
    request: &ExtractionRequest<'_>,
    report: &mut UnzipReport,
) -> Result<()> {
    let entry_name = entry_display_name(archive, index);

    // Metadata comes from the raw (non-decompressing) reader so that the
    // observer is notified even for entries whose stream cannot be opened.
    let (info, relative) = {
        let file = archive
            .by_index_raw(index)
            .map_err(|source| UnzipError::EntryDecompression {
                entry: entry_name,
                source,
            })?;
        let info = EntryInfo::from_zip_file(&file);
        let relative = match file.enclosed_name() {
            Some(path) => path,
            None => return Err(UnzipError::UnsafeEntryPath { entry: info.name }),
        };
        (info, relative)
    };

    // An entry naming the archive root sanitizes to nothing; there is
    // nothing to create for it.
    if relative.as_os_str().is_empty() {
        trace!(entry = %info.name, "ignoring entry with empty relative path");
        return Ok(());
    }

    let dest_path = request.destination.join(&relative);

    if let Some(observer) = request.observer {
        observer.will_unzip_entry(index, &dest_path, &info);
    }

    if info.is_directory {
        fs::create_dir_all(&dest_path).map_err(|source| UnzipError::EntryWrite {
            entry: info.name.clone(),
            path: dest_path.clone(),
            source,
        })?;
        report.directories_created += 1;
        trace!(entry = %info.name, "created directory");
    } else if dest_path.exists() && !request.options.overwrite {
        debug!(entry = %info.name, "skipping existing file");
        report.files_skipped += 1;
    } else {
        report.bytes_written += write_entry(archive, index, &info, &dest_path, request)?;
        report.files_written += 1;
    }

    if let Some(observer) = request.observer {
        observer.did_unzip_entry(index, &dest_path, &info);
    }

    Ok(())
}

/// Stream one file entry's decompressed bytes to `dest_path`, creating
/// parent directories as needed. Returns the number of bytes written.
fn write_entry(
    archive: &mut ZipArchive<File>,
    index: usize,
    info: &EntryInfo,
    dest_path: &Path,
    request: &ExtractionRequest<'_>,
) -> Result<u64> {
    if let Some(parent) = dest_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| UnzipError::EntryWrite {
                entry: info.name.clone(),
                path: dest_path.to_path_buf(),
                source,
            })?;
        }
    }

    let mut file = match &request.options.password {
        Some(password) => archive.by_index_decrypt(index, password.as_bytes()),
        None => archive.by_index(index),
    }
    .map_err(|source| UnzipError::EntryDecompression {
        entry: info.name.clone(),
        source,
    })?;

    let mut output = File::create(dest_path).map_err(|source| UnzipError::EntryWrite {
        entry: info.name.clone(),
        path: dest_path.to_path_buf(),
        source,
    })?;

    let copied = copy_streaming(&mut file, &mut output);
    drop(output);

    let written = match copied {
        Ok(written) => written,
        Err(failure) => {
            // Do not leave a half-written file behind for this entry.
            let _ = fs::remove_file(dest_path);
            return Err(match failure {
                CopyFailure::Read(source) => UnzipError::EntryDecompression {
                    entry: info.name.clone(),
                    source: ZipError::from(source),
                },
                CopyFailure::Write(source) => UnzipError::EntryWrite {
                    entry: info.name.clone(),
                    path: dest_path.to_path_buf(),
                    source,
                },
            });
        }
    };

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Some(mode) = file.unix_mode() {
            if let Err(source) = fs::set_permissions(dest_path, fs::Permissions::from_mode(mode)) {
                // The write failed as a whole; no output for this entry.
                let _ = fs::remove_file(dest_path);
                return Err(UnzipError::EntryWrite {
                    entry: info.name.clone(),
                    path: dest_path.to_path_buf(),
                    source,
                });
            }
        }
    }

    trace!(entry = %info.name, bytes = written, "wrote file");
    Ok(written)
}

/// Which side of the entry copy failed: reads come from the decompressor,
/// writes go to the destination filesystem.
#[derive(Debug)]
enum CopyFailure {
    Read(io::Error),
    Write(io::Error),
}

fn copy_streaming<R: Read, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> std::result::Result<u64, CopyFailure> {
    let mut buffer = [0u8; 8192];
    let mut written = 0u64;
    loop {
        let n = match reader.read(&mut buffer) {
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(CopyFailure::Read(e)),
        };
        if n == 0 {
            return Ok(written);
        }
        writer.write_all(&buffer[..n]).map_err(CopyFailure::Write)?;
        written += n as u64;
    }
}

fn entry_display_name(archive: &ZipArchive<File>, index: usize) -> String {
    archive
        .name_for_index(index)
        .map(str::to_owned)
        .unwrap_or_else(|| format!("#{index}"))
}
