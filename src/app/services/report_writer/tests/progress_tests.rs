//! Tests for progress reporting

use super::super::progress::ProgressReporter;

#[test]
fn test_status_line_without_total() {
    let mut reporter = ProgressReporter::new("records reviewed", 2);
    reporter.increment();
    reporter.increment();
    reporter.increment();

    assert_eq!(reporter.processed(), 3);
    assert_eq!(reporter.status_line(), "3 records reviewed");
    assert!(!reporter.is_enabled());
}

#[test]
fn test_status_line_with_total() {
    let mut reporter = ProgressReporter::new("records matched", 500).with_total(10);
    reporter.increment();

    assert_eq!(reporter.status_line(), "1 of 10 records matched");
}

#[test]
fn test_zero_interval_is_clamped() {
    let mut reporter = ProgressReporter::new("records", 0);
    reporter.increment();
    assert_eq!(reporter.processed(), 1);
}

#[test]
fn test_disabled_reporter_runs_suspended_closure() {
    let reporter = ProgressReporter::disabled();
    assert_eq!(reporter.suspend(|| 42), 42);
    reporter.finish("done");
}
