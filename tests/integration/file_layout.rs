//! File layout tests
//!
//! What the file backend puts on disk, as seen by external tooling.

use crate::common::*;
use std::fs;

#[test]
fn test_saved_file_is_plain_entry_object() {
    let t = TestDir::new();

    let mut report = t.report();
    report.add("foo", "bar").unwrap();
    let rid = report.save().unwrap();

    let raw = fs::read_to_string(t.report_file(&rid)).unwrap();
    let parsed: JsonValue = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed, json!({"foo": "bar"}));
}

#[test]
fn test_external_file_is_loadable() {
    let t = TestDir::new();
    let rid = ReportId::new();
    fs::write(t.report_file(&rid), r#"{"foo": "bar", "n": [1, 2]}"#).unwrap();

    let mut report = t.reopen(&rid);
    report.load().unwrap();
    assert_eq!(report.len(), 2);
    assert_eq!(report.get("n").unwrap(), &json!([1, 2]));
}

#[test]
fn test_report_exists_tracks_save() {
    let t = TestDir::new();
    let report = t.report();

    assert!(!t.backend.report_exists(report.id()));
    report.save().unwrap();
    assert!(t.backend.report_exists(report.id()));
}

#[test]
fn test_backend_creates_nested_directory() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("a").join("b").join("reporter");
    assert!(!root.exists());

    let backend = FileBackend::open(&root).unwrap();
    assert!(root.is_dir());
    assert_eq!(backend.root(), root.as_path());
}

#[test]
fn test_only_report_file_remains_after_save() {
    let t = TestDir::new();
    let mut report = t.report();
    report.add("x", 1).unwrap();
    let rid = report.save().unwrap();

    let names: Vec<String> = fs::read_dir(t.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, [format!("reporter-report-{}.json", rid)]);
}

#[test]
fn test_corrupt_file_is_storage_error() {
    let t = TestDir::new();
    let rid = ReportId::new();
    fs::write(t.report_file(&rid), "{\"foo\": [1, 2").unwrap();

    let mut report = t.reopen(&rid);
    let err = report.load().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Storage);
    assert!(err.to_string().contains("Can't read file"));
    assert!(report.is_empty());
}

#[test]
fn test_latin1_directory_round_trip() {
    let t = TestDir::with_encoding(TextEncoding::Latin1);

    let mut report = t.report();
    report.add("name", "Ångström").unwrap();
    let rid = report.save().unwrap();

    let raw = fs::read(t.report_file(&rid)).unwrap();
    assert!(std::str::from_utf8(&raw).is_err());

    let mut again = t.reopen(&rid);
    again.load().unwrap();
    assert_eq!(again.get("name").unwrap(), "Ångström");
}

#[test]
fn test_latin1_saves_anything_add_accepts() {
    let t = TestDir::with_encoding(TextEncoding::Latin1);

    let mut report = t.report();
    report.add("mood", "☕").unwrap().add("名前", vec!["Ω", "é"]).unwrap();
    let rid = report.save().unwrap();

    let raw = fs::read(t.report_file(&rid)).unwrap();
    assert!(raw.windows(6).any(|w| w == b"\\u2615"));

    let mut again = t.reopen(&rid);
    again.load().unwrap();
    assert_eq!(again.get("mood").unwrap(), "☕");
    assert_eq!(again.get("名前").unwrap(), &json!(["Ω", "é"]));
}

#[test]
fn test_default_config_resolution() {
    let unset = ReporterConfig::resolve(None, None).unwrap();
    assert_eq!(unset.reporter_dir, std::path::PathBuf::from("."));

    let set = ReporterConfig::resolve(Some("/srv/reports".into()), None).unwrap();
    assert_eq!(set.reporter_dir, std::path::PathBuf::from("/srv/reports"));
}
