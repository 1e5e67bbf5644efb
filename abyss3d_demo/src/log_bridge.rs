//! Forwards engine log entries to the `log` facade so `RUST_LOG` controls
//! engine and demo output alike.

use abyss_3d_engine::abyss3d::log::{LogEntry, LogSeverity, Logger};

pub struct LogBridge;

pub fn level_for(severity: LogSeverity) -> log::Level {
    match severity {
        LogSeverity::Trace => log::Level::Trace,
        LogSeverity::Debug => log::Level::Debug,
        LogSeverity::Info => log::Level::Info,
        LogSeverity::Warn => log::Level::Warn,
        LogSeverity::Error => log::Level::Error,
    }
}

impl Logger for LogBridge {
    fn log(&self, entry: &LogEntry) {
        let level = level_for(entry.severity);
        match (entry.file, entry.line) {
            (Some(file), Some(line)) => {
                log::log!(target: entry.source.as_str(), level, "{} ({}:{})", entry.message, file, line)
            }
            _ => log::log!(target: entry.source.as_str(), level, "{}", entry.message),
        }
    }
}

#[cfg(test)]
#[path = "log_bridge_tests.rs"]
mod tests;
