use std::path::Path;

use super::observer::UnzipObserver;

/// Extraction policy knobs: overwrite behavior and entry decryption.
#[derive(Debug, Clone, Default)]
pub struct UnzipOptions {
    /// Replace files that already exist at the destination. When false,
    /// colliding entries are skipped and counted, never overwritten.
    pub overwrite: bool,
    /// Password for encrypted entries.
    pub password: Option<String>,
}

impl UnzipOptions {
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }
}

/// Everything one extraction call needs: source archive, destination
/// directory, options, and an optional lifecycle observer.
///
/// The request is immutable for the duration of the call.
pub struct ExtractionRequest<'a> {
    pub archive: &'a Path,
    pub destination: &'a Path,
    pub options: UnzipOptions,
    pub observer: Option<&'a dyn UnzipObserver>,
}

impl<'a> ExtractionRequest<'a> {
    /// Build a request with default options and no observer.
    pub fn new(archive: &'a Path, destination: &'a Path) -> Self {
        Self {
            archive,
            destination,
            options: UnzipOptions::default(),
            observer: None,
        }
    }

    pub fn options(mut self, options: UnzipOptions) -> Self {
        self.options = options;
        self
    }

    pub fn observer(mut self, observer: &'a dyn UnzipObserver) -> Self {
        self.observer = Some(observer);
        self
    }
}
