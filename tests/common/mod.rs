//! Shared test utilities for the integration suites.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from a test's main.rs.

#![allow(dead_code)]
#![allow(unused_imports)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

pub use reporter::{
    Backend, ErrorKind, FileBackend, InMemoryBackend, JsonValue, Report, ReportData, ReportId,
    ReporterConfig, ReporterError, TextEncoding,
};
pub use serde_json::json;
use tempfile::TempDir;

// ============================================================================
// TestDir - temporary report directory with a shared file backend
// ============================================================================

/// Temporary report directory and a file backend rooted in it.
pub struct TestDir {
    pub dir: TempDir,
    pub backend: Arc<FileBackend>,
}

impl TestDir {
    /// Create a fresh directory and backend.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let backend = Arc::new(FileBackend::open(dir.path()).expect("Failed to open backend"));
        TestDir { dir, backend }
    }

    /// Create a fresh directory whose backend uses `encoding`.
    pub fn with_encoding(encoding: TextEncoding) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = ReporterConfig::default()
            .with_reporter_dir(dir.path())
            .with_encoding(encoding);
        let backend =
            Arc::new(FileBackend::from_config(&config).expect("Failed to open backend"));
        TestDir { dir, backend }
    }

    /// Root of the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Expected file path for a report id.
    pub fn report_file(&self, id: &ReportId) -> PathBuf {
        self.dir
            .path()
            .join(format!("reporter-report-{}.json", id))
    }

    /// New report with a fresh id on this directory's backend.
    pub fn report(&self) -> Report {
        Report::with_backend(None, self.backend.clone()).expect("Failed to create report")
    }

    /// Report for an existing id on this directory's backend.
    pub fn reopen(&self, id: &ReportId) -> Report {
        Report::with_backend(Some(id.as_str()), self.backend.clone())
            .expect("Failed to create report")
    }
}

/// Collect a report's items as owned pairs.
pub fn owned_items(report: &Report) -> Vec<(String, JsonValue)> {
    report
        .items()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}
