//! Writes one entry per severity to standard output.
//!
//! ```text
//! cargo run -p cloudlog --example basic --features log
//! ```

use cloudlog::{Logger, Severity, Value};

fn main() {
    let logger = Logger::new();

    let port = 8080;
    cloudlog::notice!(logger, "listening on port ", port);
    cloudlog::infof!(logger, "%d requests served in %.3fs", 1200, 4.25);

    let address = std::net::Ipv4Addr::LOCALHOST;
    logger.warning(&["slow client ".into(), Value::display(&address)]);

    for severity in Severity::ALL {
        logger.logf(severity, "severity %s has level %d", &[
            severity.as_str().into(),
            severity.level().into(),
        ]);
    }

    #[cfg(feature = "log")]
    {
        if logger.clone().install(log::LevelFilter::Debug).is_ok() {
            log::info!("routed through the log facade");
        }
    }
}
