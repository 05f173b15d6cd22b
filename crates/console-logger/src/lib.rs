//! Console Logger
//!
//! A `log` backend for WASM frontends. Every record becomes one console line
//! of the form `HH:MM:SS.mmm LEVEL [target] message`, routed to the matching
//! `console.*` method so browser devtools can filter by severity.

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Install the console logger as the global `log` backend.
///
/// Fails if another logger was installed first.
pub fn init_logger(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_line(
            &Local::now(),
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        let line = JsValue::from_str(&line);

        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Format a single console line
pub fn format_line<Tz>(time: &DateTime<Tz>, level: Level, target: &str, message: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!("{} {:<5} [{}] {}", time.format("%H:%M:%S%.3f"), level, target, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_format_line_pads_level() {
        let time = Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap();

        let line = format_line(&time, Level::Info, "tasks::sync", "loaded 2 tasks");
        assert_eq!(line, "10:00:00.000 INFO  [tasks::sync] loaded 2 tasks");

        let line = format_line(&time, Level::Error, "tasks::api", "boom");
        assert_eq!(line, "10:00:00.000 ERROR [tasks::api] boom");
    }

    #[test]
    fn test_format_line_keeps_milliseconds() {
        let time = Utc.with_ymd_and_hms(2025, 1, 1, 23, 59, 58).unwrap()
            + chrono::Duration::milliseconds(42);

        let line = format_line(&time, Level::Debug, "tasks", "tick");
        assert!(line.starts_with("23:59:58.042 DEBUG"));
    }
}
