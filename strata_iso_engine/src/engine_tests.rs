//! Unit tests for engine.rs
//!
//! The logger slot and the severity filter are process-wide: these tests
//! run serialized, restore the defaults afterwards, and filter captured
//! entries by their own source tag because tests in other modules may
//! log concurrently.

use std::sync::{Arc, Mutex};
use serial_test::serial;

use super::*;
use crate::log::{LogEntry, LogSeverity, Logger};

/// Source tag unique to this file
const SOURCE: &str = "strata::EngineTests";

/// Logger that captures entries for inspection
struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

fn install_capture() -> Arc<Mutex<Vec<LogEntry>>> {
    let entries = Arc::new(Mutex::new(Vec::new()));
    Engine::set_logger(CaptureLogger {
        entries: entries.clone(),
    });
    entries
}

fn own_entries(entries: &Arc<Mutex<Vec<LogEntry>>>) -> Vec<LogEntry> {
    entries
        .lock()
        .unwrap()
        .iter()
        .filter(|entry| entry.source == SOURCE)
        .cloned()
        .collect()
}

fn restore_defaults() {
    Engine::reset_logger();
    Engine::set_log_filter(LogSeverity::Trace);
}

// ============================================================================
// Logger swap
// ============================================================================

#[test]
#[serial]
fn test_set_logger_captures_entries() {
    let entries = install_capture();

    Engine::log(LogSeverity::Info, SOURCE, "hello".to_string());

    let captured = own_entries(&entries);
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].severity, LogSeverity::Info);
    assert_eq!(captured[0].message, "hello");
    assert!(captured[0].file.is_none());

    restore_defaults();
}

#[test]
#[serial]
fn test_log_detailed_carries_location() {
    let entries = install_capture();

    Engine::log_detailed(
        LogSeverity::Error,
        SOURCE,
        "broken".to_string(),
        "engine_tests.rs",
        7,
    );

    let captured = own_entries(&entries);
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].file, Some("engine_tests.rs"));
    assert_eq!(captured[0].line, Some(7));

    restore_defaults();
}

#[test]
#[serial]
fn test_error_macro_goes_through_engine() {
    let entries = install_capture();

    crate::engine_error!(SOURCE, "value was {}", 3);

    let captured = own_entries(&entries);
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].severity, LogSeverity::Error);
    assert_eq!(captured[0].message, "value was 3");
    assert!(captured[0].file.is_some());

    restore_defaults();
}

// ============================================================================
// Severity filter
// ============================================================================

#[test]
#[serial]
fn test_filter_drops_lower_severities() {
    let entries = install_capture();
    Engine::set_log_filter(LogSeverity::Warn);

    Engine::log(LogSeverity::Debug, SOURCE, "dropped".to_string());
    Engine::log(LogSeverity::Warn, SOURCE, "kept".to_string());
    Engine::log(LogSeverity::Error, SOURCE, "kept too".to_string());

    let captured = own_entries(&entries);
    assert_eq!(captured.len(), 2);
    assert_eq!(captured[0].message, "kept");
    assert_eq!(captured[1].message, "kept too");

    restore_defaults();
}

#[test]
#[serial]
fn test_filter_accessor() {
    Engine::set_log_filter(LogSeverity::Info);
    assert_eq!(Engine::log_filter(), LogSeverity::Info);
    restore_defaults();
}
