//! End-to-end tests driving the public API against archives built on the
//! fly.

use std::cell::RefCell;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::unstable::write::FileOptionsExt;
use zip::write::SimpleFileOptions;

use fastunzip::{
    ArchiveInfo, EntryInfo, ExtractionRequest, ModTime, UnzipObserver, UnzipOptions, extract,
    list_entries, unzip_file, unzip_file_with_observer,
};

/// `assets/` marker, `readme.txt` with "hello world!", `assets/logo.png`.
fn write_sample_zip(path: &Path) {
    let stored = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    let mut writer = ZipWriter::new(File::create(path).unwrap());
    writer.add_directory("assets", stored).unwrap();
    writer
        .start_file("readme.txt", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(b"hello world!").unwrap();
    writer.start_file("assets/logo.png", stored).unwrap();
    writer.write_all(&[0x89, 0x50, 0x4e, 0x47]).unwrap();
    writer.finish().unwrap();
}

fn write_encrypted_zip(path: &Path, password: &str) {
    let mut writer = ZipWriter::new(File::create(path).unwrap());
    let options = SimpleFileOptions::default().with_deprecated_encryption(password.as_bytes());
    writer.start_file("secret.txt", options).unwrap();
    writer.write_all(b"classified").unwrap();
    writer.finish().unwrap();
}

/// Records every callback so tests can assert on ordering and payloads.
#[derive(Default)]
struct RecordingObserver {
    events: RefCell<Vec<String>>,
    entry_paths: RefCell<Vec<PathBuf>>,
}

impl UnzipObserver for RecordingObserver {
    fn will_unzip_archive(&self, _archive: &Path, info: &ArchiveInfo) {
        self.events
            .borrow_mut()
            .push(format!("will-archive {}", info.entry_count));
    }

    fn did_unzip_archive(&self, _archive: &Path, info: &ArchiveInfo, _destination: &Path) {
        self.events
            .borrow_mut()
            .push(format!("did-archive {}", info.entry_count));
    }

    fn will_unzip_entry(&self, index: usize, path: &Path, info: &EntryInfo) {
        self.events
            .borrow_mut()
            .push(format!("will-entry {index} {}", info.name));
        self.entry_paths.borrow_mut().push(path.to_path_buf());
    }

    fn did_unzip_entry(&self, index: usize, _path: &Path, info: &EntryInfo) {
        self.events
            .borrow_mut()
            .push(format!("did-entry {index} {}", info.name));
    }
}

#[test]
fn extracts_sample_archive() {
    let temp = TempDir::new().unwrap();
    let archive = temp.path().join("sample.zip");
    let out = temp.path().join("out");
    write_sample_zip(&archive);

    let report = unzip_file(&archive, &out).unwrap();

    assert_eq!(
        fs::read_to_string(out.join("readme.txt")).unwrap(),
        "hello world!"
    );
    assert!(out.join("assets").is_dir());
    assert_eq!(
        fs::read(out.join("assets/logo.png")).unwrap(),
        [0x89, 0x50, 0x4e, 0x47]
    );
    assert_eq!(report.files_written, 2);
    assert_eq!(report.directories_created, 1);
    assert_eq!(report.bytes_written, 16);
}

#[test]
fn observer_receives_ordered_lifecycle_events() {
    let temp = TempDir::new().unwrap();
    let archive = temp.path().join("sample.zip");
    let out = temp.path().join("out");
    write_sample_zip(&archive);

    let recorder = RecordingObserver::default();
    unzip_file_with_observer(&archive, &out, &recorder).unwrap();

    assert_eq!(
        *recorder.events.borrow(),
        vec![
            "will-archive 3",
            "will-entry 0 assets/",
            "did-entry 0 assets/",
            "will-entry 1 readme.txt",
            "did-entry 1 readme.txt",
            "will-entry 2 assets/logo.png",
            "did-entry 2 assets/logo.png",
            "did-archive 3",
        ]
    );
}

#[test]
fn observer_paths_are_rooted_in_destination() {
    let temp = TempDir::new().unwrap();
    let archive = temp.path().join("sample.zip");
    let out = temp.path().join("out");
    write_sample_zip(&archive);

    let recorder = RecordingObserver::default();
    unzip_file_with_observer(&archive, &out, &recorder).unwrap();

    let paths = recorder.entry_paths.borrow();
    assert_eq!(paths.len(), 3);
    for path in paths.iter() {
        assert!(path.starts_with(&out), "{} not under {}", path.display(), out.display());
    }
    assert_eq!(paths[1], out.join("readme.txt"));
}

#[test]
fn observer_still_notified_for_skipped_entries() {
    let temp = TempDir::new().unwrap();
    let archive = temp.path().join("sample.zip");
    let out = temp.path().join("out");
    write_sample_zip(&archive);

    fs::create_dir_all(&out).unwrap();
    fs::write(out.join("readme.txt"), b"keep me").unwrap();

    let recorder = RecordingObserver::default();
    let request = ExtractionRequest::new(&archive, &out).observer(&recorder);
    let report = extract(&request).unwrap();

    assert_eq!(report.files_skipped, 1);
    assert_eq!(fs::read_to_string(out.join("readme.txt")).unwrap(), "keep me");
    // The skipped entry still sees both callbacks.
    let events = recorder.events.borrow();
    assert!(events.contains(&"will-entry 1 readme.txt".to_string()));
    assert!(events.contains(&"did-entry 1 readme.txt".to_string()));
}

#[test]
fn extraction_request_combines_password_and_observer() {
    let temp = TempDir::new().unwrap();
    let archive = temp.path().join("locked.zip");
    let out = temp.path().join("out");
    write_encrypted_zip(&archive, "letmein");

    let recorder = RecordingObserver::default();
    let request = ExtractionRequest::new(&archive, &out)
        .options(UnzipOptions::default().password("letmein"))
        .observer(&recorder);
    let report = extract(&request).unwrap();

    assert_eq!(fs::read(out.join("secret.txt")).unwrap(), b"classified");
    assert_eq!(report.files_written, 1);
    assert_eq!(
        *recorder.events.borrow(),
        vec![
            "will-archive 1",
            "will-entry 0 secret.txt",
            "did-entry 0 secret.txt",
            "did-archive 1",
        ]
    );
}

#[test]
fn errors_name_the_failing_entry() {
    let temp = TempDir::new().unwrap();
    let archive = temp.path().join("locked.zip");
    let out = temp.path().join("out");
    write_encrypted_zip(&archive, "letmein");

    let err = unzip_file(&archive, &out).unwrap_err();
    let message = err.to_string();
    assert!(
        message.contains("secret.txt"),
        "error should identify the entry: {message}"
    );
}

#[test]
fn listing_reports_sizes_and_timestamps() {
    let temp = TempDir::new().unwrap();
    let archive = temp.path().join("dated.zip");

    let modified = zip::DateTime::from_date_and_time(2023, 1, 13, 9, 30, 58).unwrap();
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Stored)
        .last_modified_time(modified);
    let mut writer = ZipWriter::new(File::create(&archive).unwrap());
    writer.start_file("notes.txt", options).unwrap();
    writer.write_all(b"meeting at nine").unwrap();
    writer.finish().unwrap();

    let entries = list_entries(&archive).unwrap();
    assert_eq!(entries.len(), 1);

    let entry = &entries[0];
    assert_eq!(entry.name, "notes.txt");
    assert_eq!(entry.uncompressed_size, 15);
    assert_eq!(entry.compressed_size, 15);
    assert!(!entry.is_directory);
    assert_eq!(
        entry.modified,
        Some(ModTime {
            year: 2023,
            month: 1,
            day: 13,
            hour: 9,
            minute: 30,
            second: 58,
        })
    );
}
