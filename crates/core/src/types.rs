//! Core types for reporter
//!
//! This module defines the foundational types:
//! - ReportId: Unique identifier for a report
//! - ReportData: Ordered name → JSON value mapping held by a report

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{ReporterError, Result};

/// JSON value stored in a report
pub type JsonValue = serde_json::Value;

/// Ordered mapping of entry name to JSON value
///
/// Backed by `serde_json::Map` with `preserve_order`, so iteration follows
/// insertion order and re-inserting a key keeps its original position.
pub type ReportData = serde_json::Map<String, JsonValue>;

/// Unique identifier for a report
///
/// A ReportId is a UUID in any textual form the `uuid` crate accepts
/// (hyphenated, simple, braced, urn). The text is kept exactly as given:
/// it is what callers hand to other processes and what file names embed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReportId {
    text: String,
    uuid: Uuid,
}

impl ReportId {
    /// Create a new random ReportId using UUID v4, in simple (hex) form
    pub fn new() -> Self {
        let uuid = Uuid::new_v4();
        Self {
            text: uuid.simple().to_string(),
            uuid,
        }
    }

    /// Parse a ReportId from a string
    ///
    /// # Errors
    /// Returns a validation error wrapping the UUID parse failure.
    pub fn parse(s: &str) -> Result<Self> {
        let uuid = Uuid::parse_str(s).map_err(|source| ReporterError::InvalidId {
            id: s.to_string(),
            source,
        })?;
        Ok(Self {
            text: s.to_string(),
            uuid,
        })
    }

    /// The id text as supplied (or generated)
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The parsed UUID
    pub fn uuid(&self) -> Uuid {
        self.uuid
    }
}

impl Default for ReportId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for ReportId {
    type Err = ReporterError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl AsRef<str> for ReportId {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<Uuid> for ReportId {
    fn from(uuid: Uuid) -> Self {
        Self {
            text: uuid.simple().to_string(),
            uuid,
        }
    }
}

impl Serialize for ReportId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for ReportId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        ReportId::parse(&text).map_err(serde::de::Error::custom)
    }
}
