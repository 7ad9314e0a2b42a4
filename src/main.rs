//! Main entry point for the fastunzip CLI application.
//!
//! This binary provides a command-line interface for listing and extracting
//! local ZIP archives.

use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

use fastunzip::{Cli, EntryInfo, ExtractionRequest, UnzipObserver, UnzipOptions};

/// Application entry point.
///
/// Parses command-line arguments and dispatches to listing or extraction
/// mode.
fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list || cli.verbose {
        return list_files(&cli);
    }
    run_extraction(&cli)
}

/// Prints per-entry progress lines while the engine works.
///
/// Files about to collide with an existing path are announced as skipped,
/// matching what the engine will do when overwriting is off.
struct ConsoleObserver {
    overwrite: bool,
}

impl UnzipObserver for ConsoleObserver {
    fn will_unzip_entry(&self, _index: usize, path: &Path, info: &EntryInfo) {
        if info.is_directory {
            return;
        }
        if !self.overwrite && path.exists() {
            eprintln!("Skipping: {} (use -o to overwrite)", info.name);
        } else {
            println!("  extracting: {}", info.name);
        }
    }
}

/// Extract the archive according to the CLI options.
///
/// Files land in the `-d` directory, or the current directory when none is
/// given. Progress lines go to stdout unless `-q` is set; the final summary
/// survives a single `-q` and disappears at `-qq`.
fn run_extraction(cli: &Cli) -> Result<()> {
    let destination = cli
        .extract_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));

    let mut options = UnzipOptions::default().overwrite(cli.overwrite);
    if let Some(password) = &cli.password {
        options = options.password(password.as_str());
    }

    let observer = ConsoleObserver {
        overwrite: cli.overwrite,
    };
    let mut request = ExtractionRequest::new(&cli.file, &destination).options(options);
    if !cli.is_quiet() {
        request = request.observer(&observer);
    }

    let report = fastunzip::extract(&request)?;

    if !cli.is_very_quiet() {
        eprintln!(
            "\nExtracted {} files ({}) to {}",
            report.files_written,
            format_size(report.bytes_written),
            destination.display()
        );
        if report.files_skipped > 0 {
            eprintln!(
                "Skipped {} existing files (use -o to overwrite)",
                report.files_skipped
            );
        }
    }

    Ok(())
}

/// List files in the ZIP archive.
///
/// Supports two output formats:
/// - Simple format (`-l`): Just file names, one per line
/// - Verbose format (`-v`): Detailed table with size, compression ratio, and timestamps
fn list_files(cli: &Cli) -> Result<()> {
    let entries = fastunzip::list_entries(&cli.file)?;

    if cli.verbose {
        let info = fastunzip::read_archive_info(&cli.file)?;
        println!("Archive: {} ({} entries)", cli.file.display(), info.entry_count);
        if let Some(comment) = &info.comment {
            println!("{comment}");
        }
        println!(
            "{:>10}  {:>10}  {:>5}  {:>10}  {:>5}  Name",
            "Length", "Size", "Cmpr", "Date", "Time"
        );
        println!("{}", "-".repeat(70));
    }

    // Track totals for summary line
    let mut total_uncompressed = 0u64;
    let mut total_compressed = 0u64;
    let mut file_count = 0usize;

    for entry in &entries {
        if cli.verbose {
            let (date, time) = match &entry.modified {
                Some(m) => (
                    format!("{:04}-{:02}-{:02}", m.year, m.month, m.day),
                    format!("{:02}:{:02}", m.hour, m.minute),
                ),
                None => ("----------".to_string(), "--:--".to_string()),
            };

            println!(
                "{:>10}  {:>10}  {}  {:>10}  {:>5}  {}",
                entry.uncompressed_size,
                entry.compressed_size,
                ratio(entry.compressed_size, entry.uncompressed_size),
                date,
                time,
                entry.name
            );

            // Accumulate totals (excluding directories)
            if !entry.is_directory {
                total_uncompressed += entry.uncompressed_size;
                total_compressed += entry.compressed_size;
                file_count += 1;
            }
        } else {
            println!("{}", entry.name);
        }
    }

    if cli.verbose {
        println!("{}", "-".repeat(70));
        println!(
            "{:>10}  {:>10}  {}  {:>21}  {} files",
            total_uncompressed,
            total_compressed,
            ratio(total_compressed, total_uncompressed),
            "",
            file_count
        );
    }

    Ok(())
}

/// Compression ratio as percentage saved, right-aligned to five columns.
/// Entries that grew under compression come out negative. Sizes come from
/// the archive's central directory, so the math must tolerate forged
/// values up to the full field range.
fn ratio(compressed: u64, uncompressed: u64) -> String {
    if uncompressed > 0 {
        let saved = 100 - (u128::from(compressed) * 100 / u128::from(uncompressed)) as i128;
        format!("{saved:>4}%")
    } else {
        "  0%".to_string()
    }
}

/// Format a byte size into a human-readable string.
///
/// Automatically selects the appropriate unit (bytes, KB, MB, GB)
/// based on the size magnitude.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_size(500), "500 bytes");
/// assert_eq!(format_size(1536), "1.50 KB");
/// assert_eq!(format_size(1048576), "1.00 MB");
/// ```
fn format_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}
