#![expect(missing_docs)]

use std::sync::{Arc, Mutex};

use cloudlog::sink::MemorySink;
use cloudlog::{Logger, Severity, Value};
use pretty_assertions::assert_eq;

fn capture() -> (Logger, Arc<Mutex<Vec<String>>>) {
    let (sink, lines) = MemorySink::new();
    (Logger::builder().sink(sink).build(), lines)
}

#[test]
fn concatenating_macros() {
    let (logger, lines) = capture();
    let owned = String::from("owned");

    cloudlog::default!(logger);
    cloudlog::debug!(logger, "a", 1);
    cloudlog::info!(logger, 1, 2);
    cloudlog::notice!(logger, &owned, 1.5_f32);
    cloudlog::warning!(logger, true, 'x',);
    cloudlog::error!(logger, "code=", -7_i8);
    cloudlog::critical!(logger, u64::MAX);
    cloudlog::alert!(logger, Value::display(&std::net::Ipv4Addr::LOCALHOST));
    cloudlog::emergency!(logger, "down");
    cloudlog::log!(logger, Severity::Info, 3, "x");

    assert_eq!(
        *lines.lock().unwrap(),
        [
            r#"{"message":"","severity":"DEFAULT"}"#,
            r#"{"message":"a1","severity":"DEBUG"}"#,
            r#"{"message":"1 2","severity":"INFO"}"#,
            r#"{"message":"owned1.5","severity":"NOTICE"}"#,
            r#"{"message":"true x","severity":"WARNING"}"#,
            r#"{"message":"code=-7","severity":"ERROR"}"#,
            r#"{"message":"18446744073709551615","severity":"CRITICAL"}"#,
            r#"{"message":"127.0.0.1","severity":"ALERT"}"#,
            r#"{"message":"down","severity":"EMERGENCY"}"#,
            r#"{"message":"3x","severity":"INFO"}"#,
        ]
    );
}

#[test]
fn formatting_macros() {
    let (logger, lines) = capture();

    cloudlog::defaultf!(logger, "plain");
    cloudlog::debugf!(logger, "%v|%v", "a", 1);
    cloudlog::infof!(logger, "count=%d", 5);
    cloudlog::noticef!(logger, "%5.1f", 2.375);
    cloudlog::warningf!(logger, "%q", "quoted");
    cloudlog::errorf!(logger, "%x", 255_u8,);
    cloudlog::criticalf!(logger, "%-4s|", "ab");
    cloudlog::alertf!(logger, "%t", false);
    cloudlog::emergencyf!(logger, "%c%c", 'o', 'k');
    cloudlog::logf!(logger, Severity::Debug, "%03d", 7);

    assert_eq!(
        *lines.lock().unwrap(),
        [
            r#"{"message":"plain","severity":"DEFAULT"}"#,
            r#"{"message":"a|1","severity":"DEBUG"}"#,
            r#"{"message":"count=5","severity":"INFO"}"#,
            r#"{"message":"  2.4","severity":"NOTICE"}"#,
            r#"{"message":"\"quoted\"","severity":"WARNING"}"#,
            r#"{"message":"ff","severity":"ERROR"}"#,
            r#"{"message":"ab  |","severity":"CRITICAL"}"#,
            r#"{"message":"false","severity":"ALERT"}"#,
            r#"{"message":"ok","severity":"EMERGENCY"}"#,
            r#"{"message":"007","severity":"DEBUG"}"#,
        ]
    );
}
