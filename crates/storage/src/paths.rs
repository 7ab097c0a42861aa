//! Report directory layout
//!
//! A report directory is a flat directory of JSON files, one per report:
//!
//! ```text
//! reports/
//! ├── reporter-report-<id>.json
//! ├── reporter-report-<id>.json
//! └── ...
//! ```
//!
//! File names are a pure function of the report id, so external tooling can
//! locate a report without going through this crate.

use std::path::{Path, PathBuf};

use reporter_core::ReportId;

/// Prefix of every report file name
pub const REPORT_FILE_PREFIX: &str = "reporter-report-";

/// Extension of every report file name
pub const REPORT_FILE_EXTENSION: &str = "json";

/// Report directory paths
#[derive(Debug, Clone)]
pub struct ReportPaths {
    /// Root report directory
    root: PathBuf,
}

impl ReportPaths {
    /// Create paths from root directory
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        ReportPaths {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Get the root report directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File name for a report id: `reporter-report-<id>.json`
    pub fn report_filename(id: &str) -> String {
        format!("{}{}.{}", REPORT_FILE_PREFIX, id, REPORT_FILE_EXTENSION)
    }

    /// Full path of the report file for `id`
    pub fn report_file(&self, id: &ReportId) -> PathBuf {
        self.root.join(Self::report_filename(id.as_str()))
    }

    /// Check if a report file exists for `id`
    pub fn report_exists(&self, id: &ReportId) -> bool {
        self.report_file(id).is_file()
    }

    /// Create the root directory and any missing parents
    pub fn create_directories(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.root)
    }
}
