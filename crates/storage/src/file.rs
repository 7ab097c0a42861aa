//! FileBackend: one JSON file per report
//!
//! ## Layout
//!
//! Each report is stored as `<root>/reporter-report-<id>.json` containing the
//! report's entries as a single JSON object. There is no envelope, version
//! field or trailing metadata. Characters the configured encoding cannot hold
//! are written as `\uXXXX` escapes, so every report that can be built can be
//! saved.
//!
//! ## Writes
//!
//! `save` writes a uniquely named temp file in the report directory, fsyncs
//! it and renames it over the report file, so a reader sees either some
//! complete previous content or the new content. There is no locking:
//! concurrent writers to the same id race and the last rename wins.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use reporter_core::{Backend, BoxedCause, ReportData, ReportId, ReporterError, Result};
use serde::Serialize;
use serde_json::ser::Formatter;
use tempfile::Builder;
use tracing::{debug, error};

use crate::config::ReporterConfig;
use crate::encoding::TextEncoding;
use crate::paths::ReportPaths;

/// Filesystem-backed report storage
///
/// # Example
///
/// ```ignore
/// use reporter_storage::FileBackend;
/// use reporter_core::{Backend, ReportData, ReportId};
///
/// let backend = FileBackend::open("/tmp/reports")?;
/// let id = ReportId::new();
/// backend.save(&id, &ReportData::new())?;
/// assert!(backend.report_exists(&id));
/// ```
#[derive(Debug, Clone)]
pub struct FileBackend {
    paths: ReportPaths,
    encoding: TextEncoding,
}

impl FileBackend {
    /// Create a backend rooted at `dir`, or at the environment-configured
    /// directory when `dir` is `None`.
    pub fn new(dir: Option<PathBuf>) -> Result<Self> {
        match dir {
            Some(dir) => Self::open(dir),
            None => Self::from_env(),
        }
    }

    /// Create a backend rooted at `dir` with default settings.
    ///
    /// The directory and any missing parents are created immediately.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        Self::from_config(&ReporterConfig::default().with_reporter_dir(dir))
    }

    /// Create a backend from `REPORTER_DIR` / `REPORTER_ENCODING`.
    pub fn from_env() -> Result<Self> {
        Self::from_config(&ReporterConfig::from_env()?)
    }

    /// Create a backend from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the root directory cannot be created.
    pub fn from_config(config: &ReporterConfig) -> Result<Self> {
        let paths = ReportPaths::from_root(&config.reporter_dir);
        if !paths.root().exists() {
            debug!(
                target: "reporter::storage",
                path = %paths.root().display(),
                "Creating report directory"
            );
        }
        paths
            .create_directories()
            .map_err(|e| ReporterError::io(paths.root().display().to_string(), e))?;

        Ok(Self {
            paths,
            encoding: config.encoding,
        })
    }

    /// Root directory holding the report files
    pub fn root(&self) -> &Path {
        self.paths.root()
    }

    /// Encoding of report file contents
    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    /// File name for a report id
    pub fn report_filename(id: &str) -> String {
        ReportPaths::report_filename(id)
    }

    /// Full path of the file holding report `id`
    pub fn report_path(&self, id: &ReportId) -> PathBuf {
        self.paths.report_file(id)
    }

    /// Whether a file for report `id` exists
    pub fn report_exists(&self, id: &ReportId) -> bool {
        self.paths.report_exists(id)
    }

    fn read_failure(path: &Path, cause: impl Into<BoxedCause>) -> ReporterError {
        let cause = cause.into();
        error!(
            target: "reporter::storage",
            path = %path.display(),
            error = %cause,
            "Failed to read report file"
        );
        ReporterError::unreadable(path.display().to_string(), cause)
    }
}

/// Compact JSON formatter that escapes characters `encoding` cannot hold
struct EscapingFormatter {
    encoding: TextEncoding,
}

impl Formatter for EscapingFormatter {
    fn write_string_fragment<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (offset, ch) in fragment.char_indices() {
            if self.encoding.can_encode(ch) {
                continue;
            }
            writer.write_all(fragment[start..offset].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = offset + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

/// Serialize `data` as compact JSON text representable in `encoding`
fn render(data: &ReportData, encoding: TextEncoding) -> std::result::Result<String, BoxedCause> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, EscapingFormatter { encoding });
    data.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf)?)
}

/// Write `bytes` to a fresh temp file in `dir`, fsync, then rename over `path`.
///
/// The temp file is removed if any step fails.
fn write_atomic(dir: &Path, path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut tmp = Builder::new()
        .prefix(".reporter-report-")
        .suffix(".tmp")
        .tempfile_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

impl Backend for FileBackend {
    fn name(&self) -> &str {
        "FileBackend"
    }

    fn load(&self, id: &ReportId) -> Result<ReportData> {
        let path = self.report_path(id);
        if !self.report_exists(id) {
            return Err(ReporterError::report_not_found(path.display().to_string()));
        }

        let bytes = fs::read(&path).map_err(|e| Self::read_failure(&path, e))?;
        let text = self
            .encoding
            .decode(&bytes)
            .map_err(|e| Self::read_failure(&path, e))?;
        let data: ReportData =
            serde_json::from_str(&text).map_err(|e| Self::read_failure(&path, e))?;

        debug!(
            target: "reporter::storage",
            report_id = %id,
            path = %path.display(),
            entries = data.len(),
            "Loaded report"
        );
        Ok(data)
    }

    fn save(&self, id: &ReportId, data: &ReportData) -> Result<()> {
        let path = self.report_path(id);
        let location = path.display().to_string();

        let text = render(data, self.encoding)
            .map_err(|e| ReporterError::unwritable(location.clone(), e))?;
        let bytes = self
            .encoding
            .encode(&text)
            .map_err(|e| ReporterError::unwritable(location.clone(), e))?;

        write_atomic(self.root(), &path, &bytes).map_err(|e| ReporterError::io(location, e))?;

        debug!(
            target: "reporter::storage",
            report_id = %id,
            path = %path.display(),
            entries = data.len(),
            "Saved report"
        );
        Ok(())
    }

    fn exists(&self, id: &ReportId) -> Result<bool> {
        Ok(self.report_exists(id))
    }
}
