//! Backend abstraction for report persistence
//!
//! This module defines the Backend trait that separates where reports are
//! stored from the in-memory report itself, so new storage variants can be
//! added without touching `Report`.

use crate::error::{ReporterError, Result};
use crate::types::{ReportData, ReportId};

/// Persistence strategy for reports
///
/// A backend maps a [`ReportId`] to the full [`ReportData`] of that report.
/// It stores whole reports only: `save` replaces whatever was stored before
/// and `load` returns exactly what the last `save` wrote.
///
/// Both operations have default implementations that fail with a
/// not-implemented error, so a partial backend (e.g. write-only export)
/// reports a clear error instead of silently doing nothing.
///
/// Thread safety: backends are shared between reports behind an `Arc`, so
/// implementations must be `Send + Sync`.
pub trait Backend: Send + Sync {
    /// Human-readable backend name used in diagnostics
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Load the stored data for `id`
    ///
    /// # Errors
    ///
    /// Returns a storage error when nothing is stored for `id` or the stored
    /// data cannot be decoded. Never returns empty data in place of an error.
    fn load(&self, id: &ReportId) -> Result<ReportData> {
        let _ = id;
        Err(ReporterError::not_implemented(self.name(), "load"))
    }

    /// Store `data` under `id`, replacing any previous data
    ///
    /// # Errors
    ///
    /// Returns a storage error when the data cannot be written.
    fn save(&self, id: &ReportId, data: &ReportData) -> Result<()> {
        let _ = (id, data);
        Err(ReporterError::not_implemented(self.name(), "save"))
    }

    /// Check whether data is stored for `id`
    ///
    /// The default probes with `load`, mapping not-found storage errors to
    /// `false`. Backends with a cheaper check should override it.
    fn exists(&self, id: &ReportId) -> Result<bool> {
        match self.load(id) {
            Ok(_) => Ok(true),
            Err(ReporterError::ReportNotFound { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
