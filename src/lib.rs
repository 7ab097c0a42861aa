//! Reporter - accumulate named JSON values and persist them by id
//!
//! A report is an ordered collection of named, JSON-serializable values.
//! Callers build one up piecemeal during a run, save it under a UUID, and
//! hand that id to whoever needs to read it back.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use reporter::{FileBackend, Report};
//!
//! let backend = Arc::new(FileBackend::open("/tmp/reports")?);
//!
//! let mut report = Report::with_backend(None, backend.clone())?;
//! report.add("foo", "bar")?;
//! let id = report.save()?;
//!
//! let mut again = Report::with_backend(Some(id.as_str()), backend)?;
//! again.load()?;
//! assert_eq!(again.get("foo")?, "bar");
//! ```
//!
//! # Architecture
//!
//! - `reporter-core`: ids, errors and the [`Backend`] trait
//! - `reporter-storage`: [`FileBackend`], [`InMemoryBackend`], configuration
//! - `reporter-report`: [`Report`] and [`ReportBuilder`]

pub use reporter_core::{
    Backend, BoxedCause, ErrorKind, JsonValue, ReportData, ReportId, ReporterError, Result,
};
pub use reporter_report::{split_pair, Report, ReportBuilder};
pub use reporter_storage::{
    EncodingError, FileBackend, InMemoryBackend, ReportPaths, ReporterConfig, TextEncoding,
    DEFAULT_REPORTER_DIR, REPORTER_DIR_ENV, REPORTER_ENCODING_ENV,
};
