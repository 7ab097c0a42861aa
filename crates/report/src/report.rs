//! Report: ordered collection of named JSON values
//!
//! ## Design
//!
//! A Report owns its entries and shares a backend. Entries are validated as
//! JSON when added, so a report can always be saved. Nothing is read from
//! the backend until `load` is called, and `load` replaces the entries
//! wholesale instead of merging.
//!
//! ## Ordering
//!
//! Entries iterate in insertion order. Re-adding an existing name overwrites
//! the value in place (the name keeps its original position) and logs a
//! warning. `pop` keeps the order of the remaining entries.
//!
//! ## Thread Safety
//!
//! Mutation goes through `&mut self`; share a report across threads only
//! behind external synchronization.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use reporter_core::{Backend, JsonValue, ReportData, ReportId, ReporterError, Result};
use serde_json::map::{Iter, Keys, Values};
use tracing::{debug, warn};

use crate::builder::ReportBuilder;
use crate::pair::split_pair;
use crate::value::to_json_value;

/// In-memory report bound to a backend
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use reporter_report::Report;
/// use reporter_storage::FileBackend;
///
/// let backend = Arc::new(FileBackend::open("/tmp/reports")?);
/// let mut report = Report::with_backend(None, backend.clone())?;
/// report.add("status", "ok")?.add("retries", 3)?;
/// let id = report.save()?;
///
/// let mut copy = Report::with_backend(Some(id.as_str()), backend)?;
/// copy.load()?;
/// assert_eq!(copy.get("status")?, "ok");
/// ```
pub struct Report {
    id: ReportId,
    backend: Arc<dyn Backend>,
    data: ReportData,
}

impl Report {
    /// Create a report with a fresh id and the default file backend
    ///
    /// The backend directory comes from `REPORTER_DIR`, falling back to the
    /// current directory.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a report with the given id and the default file backend
    ///
    /// # Errors
    ///
    /// Returns a validation error if `id` is not a UUID string.
    pub fn open(id: &str) -> Result<Self> {
        Self::builder().id(id).build()
    }

    /// Create a report on an explicit backend, with a fresh id when `id` is
    /// `None`
    pub fn with_backend(id: Option<&str>, backend: Arc<dyn Backend>) -> Result<Self> {
        let builder = Self::builder().backend(backend);
        match id {
            Some(id) => builder.id(id).build(),
            None => builder.build(),
        }
    }

    /// Start building a report
    pub fn builder() -> ReportBuilder {
        ReportBuilder::new()
    }

    pub(crate) fn from_parts(id: ReportId, backend: Arc<dyn Backend>) -> Self {
        Self {
            id,
            backend,
            data: ReportData::new(),
        }
    }

    /// Report id
    pub fn id(&self) -> &ReportId {
        &self.id
    }

    /// Backend this report loads from and saves to
    pub fn backend(&self) -> &Arc<dyn Backend> {
        &self.backend
    }

    /// All entries, in insertion order
    pub fn data(&self) -> &ReportData {
        &self.data
    }

    /// Consume the report, returning its entries
    pub fn into_data(self) -> ReportData {
        self.data
    }

    // ========== Accumulation ==========

    /// Add `value` under `name`
    ///
    /// Returns `&mut Self` so calls can be chained with `?`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `value` cannot be converted to JSON,
    /// including when it holds a NaN or infinite float; the report is left
    /// unchanged.
    pub fn add<T: Serialize>(&mut self, name: impl Into<String>, value: T) -> Result<&mut Self> {
        let name = name.into();
        let value = to_json_value(&name, value)?;
        self.insert(name, value);
        Ok(self)
    }

    /// Add a `(name, value)` pair
    ///
    /// The pair must serialize to a two-element array with a string first
    /// element, e.g. `("foo", "bar")` or `json!(["foo", 1])`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the pair cannot be serialized or has
    /// the wrong shape; the message names the failed check.
    pub fn add_pair<P: Serialize>(&mut self, pair: P) -> Result<&mut Self> {
        let pair = to_json_value("<pair>", pair)?;
        let (name, value) = split_pair(pair)?;
        self.insert(name, value);
        Ok(self)
    }

    fn insert(&mut self, name: String, value: JsonValue) {
        if self.data.contains_key(&name) {
            warn!(
                target: "reporter::report",
                report_id = %self.id,
                name = %name,
                "Overwrite existed variable {}.",
                name
            );
        }
        self.data.insert(name, value);
    }

    // ========== Lookup ==========

    /// Whether `name` is in the report
    pub fn contains(&self, name: &str) -> bool {
        self.data.contains_key(name)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the report has no entries
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Entry names in insertion order
    pub fn keys(&self) -> Keys<'_> {
        self.data.keys()
    }

    /// Entry values in insertion order, parallel to [`keys`](Self::keys)
    pub fn values(&self) -> Values<'_> {
        self.data.values()
    }

    /// `(name, value)` pairs in insertion order
    pub fn items(&self) -> Iter<'_> {
        self.data.iter()
    }

    /// Entry names in insertion order
    pub fn iter(&self) -> Keys<'_> {
        self.keys()
    }

    /// Value stored under `name`
    ///
    /// # Errors
    ///
    /// Returns a lookup error if `name` is absent.
    pub fn get(&self, name: &str) -> Result<&JsonValue> {
        self.data
            .get(name)
            .ok_or_else(|| ReporterError::not_in_report(name))
    }

    /// Value stored under `name`, deserialized as `T`
    ///
    /// # Errors
    ///
    /// Returns a lookup error if `name` is absent, or a validation error if
    /// the value does not fit `T`.
    pub fn get_as<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let value = self.get(name)?.clone();
        serde_json::from_value(value).map_err(|source| ReporterError::UnexpectedShape {
            name: name.to_string(),
            source,
        })
    }

    /// Remove and return the value stored under `name`
    ///
    /// # Errors
    ///
    /// Returns a lookup error if `name` is absent.
    pub fn pop(&mut self, name: &str) -> Result<JsonValue> {
        self.data
            .shift_remove(name)
            .ok_or_else(|| ReporterError::not_in_report(name))
    }

    // ========== Persistence ==========

    /// Replace all entries with the data stored for this report's id
    ///
    /// # Errors
    ///
    /// Returns the backend's storage error; entries are unchanged on error.
    pub fn load(&mut self) -> Result<()> {
        self.data = self.backend.load(&self.id)?;
        debug!(
            target: "reporter::report",
            report_id = %self.id,
            backend = self.backend.name(),
            entries = self.data.len(),
            "Loaded report"
        );
        Ok(())
    }

    /// Store all entries under this report's id, returning the id
    ///
    /// # Errors
    ///
    /// Returns the backend's storage error.
    pub fn save(&self) -> Result<ReportId> {
        self.backend.save(&self.id, &self.data)?;
        debug!(
            target: "reporter::report",
            report_id = %self.id,
            backend = self.backend.name(),
            entries = self.data.len(),
            "Saved report"
        );
        Ok(self.id.clone())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Report: {}>", self.id)
    }
}

impl fmt::Debug for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Report")
            .field("id", &self.id.as_str())
            .field("backend", &self.backend.name())
            .field("entries", &self.data.len())
            .finish()
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a String;
    type IntoIter = Keys<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys()
    }
}

/// Serializes as the bare entry object, the same shape backends persist
impl Serialize for Report {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.data.serialize(serializer)
    }
}
