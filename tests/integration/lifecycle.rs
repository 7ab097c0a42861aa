//! Report lifecycle tests
//!
//! Create → accumulate → save → reload, across fresh report instances.

use crate::common::*;

#[test]
fn test_save_then_load_in_fresh_report() {
    let t = TestDir::new();

    let mut report = t.report();
    report.add("foo", "bar").unwrap();
    let rid = report.save().unwrap();

    let mut again = t.reopen(&rid);
    assert!(again.is_empty());
    again.load().unwrap();
    assert_eq!(again.get("foo").unwrap(), "bar");
}

#[test]
fn test_round_trip_preserves_items_and_order() {
    let t = TestDir::new();

    let mut report = t.report();
    report
        .add("zeta", 1)
        .unwrap()
        .add("alpha", json!({"nested": [1, 2, 3]}))
        .unwrap()
        .add("mid", Option::<u8>::None)
        .unwrap()
        .add_pair(("last", 2.5))
        .unwrap();
    let rid = report.save().unwrap();

    let mut again = t.reopen(&rid);
    again.load().unwrap();
    assert_eq!(owned_items(&again), owned_items(&report));
}

#[test]
fn test_load_replaces_rather_than_merges() {
    let t = TestDir::new();

    let mut report = t.report();
    report.add("saved", true).unwrap();
    let rid = report.save().unwrap();

    let mut again = t.reopen(&rid);
    again.add("unsaved", true).unwrap();
    again.load().unwrap();

    assert_eq!(again.keys().collect::<Vec<_>>(), ["saved"]);
}

#[test]
fn test_resave_overwrites_stored_report() {
    let t = TestDir::new();

    let mut report = t.report();
    report.add("a", 1).unwrap();
    report.add("b", 2).unwrap();
    let rid = report.save().unwrap();

    report.pop("a").unwrap();
    report.save().unwrap();

    let mut again = t.reopen(&rid);
    again.load().unwrap();
    assert_eq!(again.len(), 1);
    assert!(again.get("a").unwrap_err().is_lookup());
}

#[test]
fn test_hyphenated_id_round_trip() {
    let t = TestDir::new();
    let text = "f47ac10b-58cc-4372-a567-0e02b2c3d479";

    let mut report = Report::with_backend(Some(text), t.backend.clone()).unwrap();
    assert_eq!(report.id().as_str(), text);
    report.add("k", "v").unwrap();
    let rid = report.save().unwrap();
    assert_eq!(rid.as_str(), text);

    assert!(t.report_file(&rid).is_file());
}

#[test]
fn test_load_unknown_id_is_storage_error() {
    let t = TestDir::new();
    let mut report = t.report();
    let err = report.load().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Storage);
}

#[test]
fn test_builder_with_config_shares_directory() {
    let t = TestDir::new();
    let config = ReporterConfig::default().with_reporter_dir(t.path());

    let mut report = Report::builder().config(config.clone()).build().unwrap();
    report.add("via", "builder").unwrap();
    let rid = report.save().unwrap();

    let mut again = Report::builder()
        .id(&rid)
        .config(config)
        .build()
        .unwrap();
    again.load().unwrap();
    assert_eq!(again.get("via").unwrap(), "builder");
}
