#![expect(missing_docs)]

use std::sync::{Arc, Mutex};

use cloudlog::diagnostics::MemoryDiagnostics;
use cloudlog::sink::{MemorySink, WriterSink};
use cloudlog::{LogEntry, Logger, Severity, Value};
use indoc::indoc;
use pretty_assertions::assert_eq;
use test_case::test_case;

type Plain = fn(&Logger, &[Value<'_>]);
type Formatted = fn(&Logger, &str, &[Value<'_>]);

fn capture() -> (Logger, Arc<Mutex<Vec<String>>>) {
    let (sink, lines) = MemorySink::new();
    let (diagnostics, _) = MemoryDiagnostics::new();
    let logger = Logger::builder()
        .sink(sink)
        .diagnostics(diagnostics)
        .build();
    (logger, lines)
}

fn parse(line: &str) -> serde_json::Map<String, serde_json::Value> {
    serde_json::from_str(line).unwrap()
}

#[test_case(Logger::default, Logger::defaultf, "DEFAULT")]
#[test_case(Logger::debug, Logger::debugf, "DEBUG")]
#[test_case(Logger::info, Logger::infof, "INFO")]
#[test_case(Logger::notice, Logger::noticef, "NOTICE")]
#[test_case(Logger::warning, Logger::warningf, "WARNING")]
#[test_case(Logger::error, Logger::errorf, "ERROR")]
#[test_case(Logger::critical, Logger::criticalf, "CRITICAL")]
#[test_case(Logger::alert, Logger::alertf, "ALERT")]
#[test_case(Logger::emergency, Logger::emergencyf, "EMERGENCY")]
fn every_severity(plain: Plain, formatted: Formatted, label: &str) {
    let (logger, lines) = capture();

    plain(&logger, &["a".into(), 1.into()]);
    plain(&logger, &[1.into(), 2.into()]);
    formatted(&logger, "count=%d", &[5.into()]);

    let lines = lines.lock().unwrap();
    assert_eq!(
        *lines,
        [
            format!(r#"{{"message":"a1","severity":"{label}"}}"#),
            format!(r#"{{"message":"1 2","severity":"{label}"}}"#),
            format!(r#"{{"message":"count=5","severity":"{label}"}}"#),
        ]
    );

    for line in lines.iter() {
        let object = parse(line);
        let keys: Vec<&str> = object.keys().map(String::as_str).collect();
        assert_eq!(keys, ["message", "severity"]);
        assert_eq!(object["severity"], label);

        let entry: LogEntry = serde_json::from_str(line).unwrap();
        assert_eq!(entry.severity().map(|severity| severity.as_str()), Some(label));
    }
}

#[test]
fn labels_are_exactly_the_nine() {
    let labels: Vec<String> = Severity::ALL.iter().map(ToString::to_string).collect();
    assert_eq!(
        labels,
        [
            "DEFAULT",
            "DEBUG",
            "INFO",
            "NOTICE",
            "WARNING",
            "ERROR",
            "CRITICAL",
            "ALERT",
            "EMERGENCY",
        ]
    );
    for severity in Severity::ALL {
        assert_eq!(severity.to_string().parse::<Severity>().unwrap(), severity);
    }
}

#[test]
fn messages_round_trip_through_escaping() {
    let (logger, lines) = capture();
    let message = "he said \"hi\"\nand left\t\\";

    logger.warning(&[message.into()]);
    logger.warningf("%s", &[message.into()]);

    let lines = lines.lock().unwrap();
    assert_eq!(lines.len(), 2);
    for line in lines.iter() {
        assert!(!line.contains('\n'));
        let entry: LogEntry = serde_json::from_str(line).unwrap();
        assert_eq!(entry.message(), message);
        assert_eq!(entry.severity(), Some(Severity::Warning));
    }
}

#[test]
fn lines_are_newline_terminated() {
    let sink = Arc::new(WriterSink::new(Vec::new()));
    let logger = Logger::builder().shared_sink(sink.clone()).build();

    logger.notice(&["starting".into()]);
    logger.errorf("%d of %d workers failed", &[2.into(), 8.into()]);
    logger.log_entry(&LogEntry::without_severity("bare"));
    drop(logger);

    let output = Arc::into_inner(sink).unwrap().into_inner();
    assert_eq!(
        String::from_utf8(output).unwrap(),
        indoc! {r#"
            {"message":"starting","severity":"NOTICE"}
            {"message":"2 of 8 workers failed","severity":"ERROR"}
            {"message":"bare"}
        "#}
    );
}

#[test]
fn construction_ignores_context() {
    struct RequestContext {
        _deadline_ms: u64,
    }

    let (sink, lines) = MemorySink::new();
    let from_context = Logger::with_context(&RequestContext { _deadline_ms: 500 });
    let from_str = Logger::with_context("request-1");
    let configured = Logger::builder().sink(sink).build();

    drop((from_context, from_str));
    configured.info(&["ok".into()]);

    assert_eq!(*lines.lock().unwrap(), [r#"{"message":"ok","severity":"INFO"}"#]);
}

#[test]
fn printf_errors_are_logged_not_raised() {
    let (logger, lines) = capture();

    logger.infof("%d %d", &[1.into()]);
    logger.infof("%d", &["hi".into()]);
    logger.infof("done", &[1.into()]);

    let messages: Vec<String> = lines
        .lock()
        .unwrap()
        .iter()
        .map(|line| serde_json::from_str::<LogEntry>(line).unwrap().message().to_owned())
        .collect();
    assert_eq!(
        messages,
        ["1 %!d(MISSING)", "%!d(&str=hi)", "done%!(EXTRA i64=1)"]
    );
}
