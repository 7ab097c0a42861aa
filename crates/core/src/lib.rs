//! Core types and traits for reporter
//!
//! This crate defines the foundational types used throughout the system:
//! - ReportId: Unique identifier for a report
//! - ReportData: Ordered entry mapping persisted per report
//! - Error: Error type and kind classification
//! - Backend: Persistence trait implemented by storage variants

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod traits;
pub mod types;

pub use error::{BoxedCause, ErrorKind, ReporterError, Result};
pub use traits::Backend;
pub use types::{JsonValue, ReportData, ReportId};
