use std::io::{Read, Seek};

use zip::ZipArchive;
use zip::read::ZipFile;

/// Archive-level metadata, read once when the archive is opened.
#[derive(Debug, Clone)]
pub struct ArchiveInfo {
    /// Number of entries in the archive.
    pub entry_count: usize,
    /// Archive comment, when one is present and non-empty.
    pub comment: Option<String>,
}

impl ArchiveInfo {
    pub(crate) fn from_archive<R: Read + Seek>(archive: &ZipArchive<R>) -> Self {
        let comment = archive.comment();
        Self {
            entry_count: archive.len(),
            comment: if comment.is_empty() {
                None
            } else {
                Some(String::from_utf8_lossy(comment).into_owned())
            },
        }
    }
}

/// Metadata for a single archive entry.
#[derive(Debug, Clone)]
pub struct EntryInfo {
    /// Entry path as stored in the archive (directories end with `/`).
    pub name: String,
    pub compressed_size: u64,
    pub uncompressed_size: u64,
    pub crc32: u32,
    /// Modification timestamp, when the archive stores one.
    pub modified: Option<ModTime>,
    pub is_directory: bool,
}

impl EntryInfo {
    pub(crate) fn from_zip_file(file: &ZipFile<'_>) -> Self {
        Self {
            name: file.name().to_string(),
            compressed_size: file.compressed_size(),
            uncompressed_size: file.size(),
            crc32: file.crc32(),
            modified: file.last_modified().map(ModTime::from_datetime),
            is_directory: file.is_dir(),
        }
    }
}

/// Entry modification timestamp decoded from the archive's DOS format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl ModTime {
    pub(crate) fn from_datetime(datetime: zip::DateTime) -> Self {
        Self {
            year: datetime.year(),
            month: datetime.month(),
            day: datetime.day(),
            hour: datetime.hour(),
            minute: datetime.minute(),
            second: datetime.second(),
        }
    }
}
