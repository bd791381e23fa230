//! Console Logger
//!
//! Routes the `log` facade to the browser console.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

#[derive(Debug, Clone, Copy, PartialEq)]
enum ConsoleMethod {
    Error,
    Warn,
    Info,
    Debug,
}

fn console_method(level: Level) -> ConsoleMethod {
    match level {
        Level::Error => ConsoleMethod::Error,
        Level::Warn => ConsoleMethod::Warn,
        Level::Info => ConsoleMethod::Info,
        Level::Debug | Level::Trace => ConsoleMethod::Debug,
    }
}

/// `goal_board_ui::commands::todo` -> `TODO`, `goal_board_api::client` -> `API`
fn tag(target: &str) -> String {
    if target.starts_with("goal_board_api") {
        return "API".to_string();
    }
    target
        .rsplit("::")
        .next()
        .unwrap_or(target)
        .to_uppercase()
}

fn format_line(record: &Record) -> String {
    format!("[{}] {}", tag(record.target()), record.args())
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from(format_line(record));
        match console_method(record.level()) {
            ConsoleMethod::Error => web_sys::console::error_1(&line),
            ConsoleMethod::Warn => web_sys::console::warn_1(&line),
            ConsoleMethod::Info => web_sys::console::info_1(&line),
            ConsoleMethod::Debug => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger. Safe to call more than once.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_map_to_console_methods() {
        assert_eq!(console_method(Level::Error), ConsoleMethod::Error);
        assert_eq!(console_method(Level::Warn), ConsoleMethod::Warn);
        assert_eq!(console_method(Level::Info), ConsoleMethod::Info);
        assert_eq!(console_method(Level::Trace), ConsoleMethod::Debug);
    }

    #[test]
    fn test_tag_uses_last_module_segment() {
        assert_eq!(tag("goal_board_ui::app"), "APP");
        assert_eq!(tag("goal_board_ui::commands::target"), "TARGET");
        assert_eq!(tag("goal_board_api::client"), "API");
        assert_eq!(tag("plain"), "PLAIN");
    }
}
