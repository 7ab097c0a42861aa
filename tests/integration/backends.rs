//! Backend variant tests
//!
//! The report only depends on the Backend trait, so any variant can be
//! swapped in without changing report code.

use crate::common::*;
use parking_lot::Mutex;
use std::sync::Arc;

/// Backend that records saves and never loads
#[derive(Default)]
struct RecordingBackend {
    saved: Mutex<Vec<(String, ReportData)>>,
}

impl Backend for RecordingBackend {
    fn name(&self) -> &str {
        "recording"
    }

    fn save(&self, id: &ReportId, data: &ReportData) -> reporter::Result<()> {
        self.saved.lock().push((id.to_string(), data.clone()));
        Ok(())
    }
}

#[test]
fn test_in_memory_round_trip() {
    let backend = Arc::new(InMemoryBackend::new());

    let mut report = Report::with_backend(None, backend.clone()).unwrap();
    report.add("foo", "bar").unwrap();
    let rid = report.save().unwrap();
    assert!(backend.contains(&rid));

    let mut again = Report::with_backend(Some(rid.as_str()), backend).unwrap();
    again.load().unwrap();
    assert_eq!(owned_items(&again), owned_items(&report));
}

#[test]
fn test_custom_backend_receives_entries() {
    let backend = Arc::new(RecordingBackend::default());

    let mut report = Report::with_backend(None, backend.clone()).unwrap();
    report.add("k", 1).unwrap();
    let rid = report.save().unwrap();

    let saved = backend.saved.lock();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].0, rid.as_str());
    assert_eq!(saved[0].1["k"], json!(1));
}

#[test]
fn test_partial_backend_load_not_implemented() {
    let backend = Arc::new(RecordingBackend::default());
    let mut report = Report::with_backend(None, backend).unwrap();

    let err = report.load().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotImplemented);
    assert_eq!(err.to_string(), "load method of recording not implemented.");
}

#[test]
fn test_backend_shared_between_reports() {
    let backend: Arc<dyn Backend> = Arc::new(InMemoryBackend::new());

    let mut first = Report::with_backend(None, Arc::clone(&backend)).unwrap();
    let mut second = Report::with_backend(None, Arc::clone(&backend)).unwrap();
    first.add("who", "first").unwrap();
    second.add("who", "second").unwrap();
    let first_id = first.save().unwrap();
    let second_id = second.save().unwrap();

    let mut check = Report::with_backend(Some(first_id.as_str()), Arc::clone(&backend)).unwrap();
    check.load().unwrap();
    assert_eq!(check.get("who").unwrap(), "first");

    let mut check = Report::with_backend(Some(second_id.as_str()), backend).unwrap();
    check.load().unwrap();
    assert_eq!(check.get("who").unwrap(), "second");
}
