//! Report builder for explicit construction
//!
//! Threads the id, backend and configuration into a [`Report`] instead of
//! reading ambient state.

use std::sync::Arc;

use reporter_core::{Backend, ReportId, Result};
use reporter_storage::{FileBackend, ReporterConfig};

use crate::report::Report;

/// Builder for Report construction
///
/// ```ignore
/// use reporter_report::Report;
/// use reporter_storage::ReporterConfig;
///
/// // 1. Fresh id, file backend from REPORTER_DIR
/// let report = Report::builder().build()?;
///
/// // 2. Known id, explicit directory
/// let report = Report::builder()
///     .id("67e5504410b1426f9247bb680e5fe0c8")
///     .config(ReporterConfig::default().with_reporter_dir("/data/reports"))
///     .build()?;
///
/// // 3. Shared backend
/// let report = Report::builder().backend(backend.clone()).build()?;
/// ```
///
/// An explicit backend wins over `config`; `config` only shapes the default
/// file backend.
#[derive(Default)]
pub struct ReportBuilder {
    id: Option<String>,
    backend: Option<Arc<dyn Backend>>,
    config: Option<ReporterConfig>,
}

impl ReportBuilder {
    /// Create new builder with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an existing report id (validated on `build`)
    pub fn id(mut self, id: impl AsRef<str>) -> Self {
        self.id = Some(id.as_ref().to_string());
        self
    }

    /// Use this backend instead of the default file backend
    pub fn backend(mut self, backend: Arc<dyn Backend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Configure the default file backend
    pub fn config(mut self, config: ReporterConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Validate the id, resolve the backend and create an empty report
    ///
    /// # Errors
    ///
    /// - validation error if the id is not a UUID string
    /// - validation error if the environment configuration is invalid
    /// - storage error if the default backend directory cannot be created
    pub fn build(self) -> Result<Report> {
        let id = match self.id {
            Some(text) => ReportId::parse(&text)?,
            None => ReportId::new(),
        };

        let backend = match self.backend {
            Some(backend) => backend,
            None => {
                let config = match self.config {
                    Some(config) => config,
                    None => ReporterConfig::from_env()?,
                };
                Arc::new(FileBackend::from_config(&config)?) as Arc<dyn Backend>
            }
        };

        Ok(Report::from_parts(id, backend))
    }
}
