//! Storage layer for reporter
//!
//! This crate implements the report backends:
//! - FileBackend: one JSON file per report under a root directory
//! - InMemoryBackend: process-local map, for tests and ephemeral runs
//! - ReporterConfig: root directory and file encoding resolution
//! - ReportPaths: deterministic report file naming
//! - TextEncoding: byte encoding of report files

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod encoding;
pub mod file;
pub mod memory;
pub mod paths;

pub use config::{ReporterConfig, DEFAULT_REPORTER_DIR, REPORTER_DIR_ENV, REPORTER_ENCODING_ENV};
pub use encoding::{EncodingError, TextEncoding};
pub use file::FileBackend;
pub use memory::InMemoryBackend;
pub use paths::ReportPaths;
