//! Minimal stderr logger
//!
//! Library code logs through the `log` facade; binaries install this logger
//! once at startup. The level filter comes from `RUST_LOG` and defaults to
//! `warn` so command output stays uncluttered.

use std::io::Write;
use std::time::Instant;

use log::{LevelFilter, Log, Metadata, Record};

struct StderrLogger {
    filter: LevelFilter,
    start: Instant,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.filter
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let elapsed = self.start.elapsed().as_secs_f64();
        eprintln!(
            "[{elapsed:.3}s] {:>5} {}: {}",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Install the global logger. Call once, before any logging.
///
/// # Panics
///
/// Panics if a logger is already installed.
pub fn init() {
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(LevelFilter::Warn);
    let logger = StderrLogger {
        filter,
        start: Instant::now(),
    };
    log::set_boxed_logger(Box::new(logger)).expect("logger already initialized");
    log::set_max_level(filter);
}
