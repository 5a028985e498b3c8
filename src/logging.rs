#![cfg(feature = "std")]

use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

use log::{LevelFilter, Log, Metadata, Record};

/// Writes `<elapsed> <LEVEL> <target> - <message>` lines to stderr, keeping
/// stdout free for the simulator's JSON output.
struct StderrLogger {
    started: OnceLock<Instant>,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let elapsed = self.started.get_or_init(Instant::now).elapsed();
        let mut err = std::io::stderr().lock();
        let _ = writeln!(
            err,
            "{:>4}.{:03} {:<5} {} - {}",
            elapsed.as_secs(),
            elapsed.subsec_millis(),
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger {
    started: OnceLock::new(),
};

fn level_from_env() -> LevelFilter {
    std::env::var("SEABATTLE_LOG")
        .ok()
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger at the level named by `SEABATTLE_LOG`
/// (`off`, `error` .. `trace`; `info` when unset or unparsable).
///
/// Safe to call more than once; only the first call installs the logger.
/// Returns the level now in effect.
pub fn init_logging() -> LevelFilter {
    let level = level_from_env();
    if log::set_logger(&LOGGER).is_ok() {
        LOGGER.started.get_or_init(Instant::now);
        log::set_max_level(level);
    }
    log::max_level()
}
