#![expect(missing_docs)]

use cloudlog::sink::MemorySink;
use cloudlog::{LogEntry, Logger, Severity};
use log::Log;
use pretty_assertions::assert_eq;
use test_case::test_case;

#[test_case(log::Level::Error, Severity::Error)]
#[test_case(log::Level::Warn, Severity::Warning)]
#[test_case(log::Level::Info, Severity::Info)]
#[test_case(log::Level::Debug, Severity::Debug)]
#[test_case(log::Level::Trace, Severity::Debug)]
fn records_become_entries(level: log::Level, severity: Severity) {
    let (sink, lines) = MemorySink::new();
    let logger = Logger::builder().sink(sink).build();

    Log::log(
        &logger,
        &log::Record::builder()
            .level(level)
            .target("bridge")
            .args(format_args!("{} jobs queued", 3))
            .build(),
    );

    let lines = lines.lock().unwrap();
    assert_eq!(lines.len(), 1);
    let entry: LogEntry = serde_json::from_str(&lines[0]).unwrap();
    assert_eq!(entry, LogEntry::new(severity, "3 jobs queued"));
}

#[test]
fn every_level_is_enabled() {
    let logger = Logger::new();
    let metadata = log::Metadata::builder().level(log::Level::Trace).build();

    assert!(logger.enabled(&metadata));
}
