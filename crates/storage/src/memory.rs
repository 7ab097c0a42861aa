//! InMemoryBackend: process-local report storage
//!
//! Keeps saved reports in a map guarded by a `parking_lot::RwLock`. Nothing
//! touches the filesystem and everything is lost when the backend is
//! dropped. Useful for tests and for runs whose reports are only handed
//! between reports in the same process.

use parking_lot::RwLock;
use std::collections::HashMap;

use reporter_core::{Backend, ReportData, ReportId, ReporterError, Result};
use tracing::debug;

/// Ephemeral backend holding reports in memory
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    reports: RwLock<HashMap<String, ReportData>>,
}

impl InMemoryBackend {
    /// Create an empty backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored reports
    pub fn len(&self) -> usize {
        self.reports.read().len()
    }

    /// True if no report has been saved
    pub fn is_empty(&self) -> bool {
        self.reports.read().is_empty()
    }

    /// Whether a report is stored under `id`
    pub fn contains(&self, id: &ReportId) -> bool {
        self.reports.read().contains_key(id.as_str())
    }
}

impl Backend for InMemoryBackend {
    fn name(&self) -> &str {
        "InMemoryBackend"
    }

    fn load(&self, id: &ReportId) -> Result<ReportData> {
        self.reports
            .read()
            .get(id.as_str())
            .cloned()
            .ok_or_else(|| ReporterError::report_not_found(id.as_str()))
    }

    fn save(&self, id: &ReportId, data: &ReportData) -> Result<()> {
        debug!(
            target: "reporter::storage",
            report_id = %id,
            entries = data.len(),
            "Saved report in memory"
        );
        self.reports
            .write()
            .insert(id.as_str().to_string(), data.clone());
        Ok(())
    }

    fn exists(&self, id: &ReportId) -> Result<bool> {
        Ok(self.contains(id))
    }
}
