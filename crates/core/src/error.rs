//! Error types for reporter
//!
//! Every domain failure surfaces as a single [`ReporterError`]. Variants are
//! grouped into coarse [`ErrorKind`]s so callers can branch on the category
//! (validation, lookup, storage, not implemented) while the message and the
//! `source()` chain carry the details.
//!
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::error::Error as StdError;
use std::io;
use thiserror::Error;

/// Boxed underlying cause for storage failures that are not plain I/O
pub type BoxedCause = Box<dyn StdError + Send + Sync + 'static>;

/// Result type alias for reporter operations
pub type Result<T> = std::result::Result<T, ReporterError>;

/// Coarse classification of a [`ReporterError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Caller supplied something malformed (id, value, pair, config)
    Validation,
    /// Requested entry is not in the report
    Lookup,
    /// Backend could not find, read, decode or write a report
    Storage,
    /// Backend variant does not provide the requested operation
    NotImplemented,
}

/// All reporter errors
#[derive(Debug, Error)]
pub enum ReporterError {
    /// Report id is not a valid UUID string
    #[error("Invalid report id '{id}': {source}")]
    InvalidId {
        /// Rejected id text
        id: String,
        /// Parse failure from the UUID parser
        #[source]
        source: uuid::Error,
    },

    /// Value could not be converted to JSON
    #[error("Value of '{name}' is not JSON serializable: {source}")]
    NotSerializable {
        /// Entry name the value was added under
        name: String,
        /// Serialization failure
        #[source]
        source: serde_json::Error,
    },

    /// Stored value does not match the type it was read as
    #[error("Value of '{name}' cannot be read as the requested type: {source}")]
    UnexpectedShape {
        /// Entry name
        name: String,
        /// Deserialization failure
        #[source]
        source: serde_json::Error,
    },

    /// Pair passed to `add_pair` has the wrong shape
    #[error("{0}")]
    InvalidPair(String),

    /// Configuration value could not be interpreted
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Entry name is absent
    #[error("{name} not in report.")]
    NotInReport {
        /// Missing entry name
        name: String,
    },

    /// Backend has no stored data for the id
    #[error("Report {location} doesn't exist.")]
    ReportNotFound {
        /// Backend-specific location (file path, id)
        location: String,
    },

    /// Stored data exists but cannot be decoded or parsed
    #[error("Can't read file {location}: {source}")]
    Unreadable {
        /// Backend-specific location
        location: String,
        /// Decode or parse failure
        #[source]
        source: BoxedCause,
    },

    /// Data could not be encoded for storage
    #[error("Can't write file {location}: {source}")]
    Unwritable {
        /// Backend-specific location
        location: String,
        /// Encode or serialize failure
        #[source]
        source: BoxedCause,
    },

    /// I/O error while touching backend storage
    #[error("I/O error at {location}: {source}")]
    Io {
        /// Path being accessed
        location: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Backend does not implement the operation
    #[error("{operation} method of {backend} not implemented.")]
    NotImplemented {
        /// Backend name
        backend: String,
        /// Operation name (`load`, `save`)
        operation: &'static str,
    },
}

impl ReporterError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReporterError::InvalidId { .. }
            | ReporterError::NotSerializable { .. }
            | ReporterError::UnexpectedShape { .. }
            | ReporterError::InvalidPair(_)
            | ReporterError::InvalidConfig(_) => ErrorKind::Validation,
            ReporterError::NotInReport { .. } => ErrorKind::Lookup,
            ReporterError::ReportNotFound { .. }
            | ReporterError::Unreadable { .. }
            | ReporterError::Unwritable { .. }
            | ReporterError::Io { .. } => ErrorKind::Storage,
            ReporterError::NotImplemented { .. } => ErrorKind::NotImplemented,
        }
    }

    /// Create a pair validation error
    pub fn invalid_pair(msg: impl Into<String>) -> Self {
        ReporterError::InvalidPair(msg.into())
    }

    /// Create a configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        ReporterError::InvalidConfig(msg.into())
    }

    /// Create a lookup error for a missing entry
    pub fn not_in_report(name: impl Into<String>) -> Self {
        ReporterError::NotInReport { name: name.into() }
    }

    /// Create a not-found storage error
    pub fn report_not_found(location: impl Into<String>) -> Self {
        ReporterError::ReportNotFound {
            location: location.into(),
        }
    }

    /// Create an unreadable-data storage error
    pub fn unreadable(location: impl Into<String>, source: impl Into<BoxedCause>) -> Self {
        ReporterError::Unreadable {
            location: location.into(),
            source: source.into(),
        }
    }

    /// Create an unwritable-data storage error
    pub fn unwritable(location: impl Into<String>, source: impl Into<BoxedCause>) -> Self {
        ReporterError::Unwritable {
            location: location.into(),
            source: source.into(),
        }
    }

    /// Create an I/O storage error tagged with the path involved
    pub fn io(location: impl Into<String>, source: io::Error) -> Self {
        ReporterError::Io {
            location: location.into(),
            source,
        }
    }

    /// Create a not-implemented error
    pub fn not_implemented(backend: impl Into<String>, operation: &'static str) -> Self {
        ReporterError::NotImplemented {
            backend: backend.into(),
            operation,
        }
    }

    /// True for [`ErrorKind::Validation`]
    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }

    /// True for [`ErrorKind::Lookup`]
    pub fn is_lookup(&self) -> bool {
        self.kind() == ErrorKind::Lookup
    }

    /// True for [`ErrorKind::Storage`]
    pub fn is_storage(&self) -> bool {
        self.kind() == ErrorKind::Storage
    }
}
