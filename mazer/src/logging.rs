use std::{
    io::{self, Write as _},
    sync::{OnceLock, PoisonError, RwLock},
};

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

static LOGGER: OnceLock<CliLogger> = OnceLock::new();

pub fn get_logger() -> &'static CliLogger {
    LOGGER.get_or_init(|| CliLogger::new(DEFAULT_LEVEL))
}

/// Installs the stderr logger. Fails if another logger was installed before.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = get_logger();
    logger.set_min_level(level);

    log::set_logger(logger)?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}

/// Level picked by repeated `-v` and `-q` flags, starting at warnings.
pub fn level_from_flags(verbose: u8, quiet: u8) -> LevelFilter {
    const LEVELS: [LevelFilter; 6] = [
        LevelFilter::Off,
        LevelFilter::Error,
        LevelFilter::Warn,
        LevelFilter::Info,
        LevelFilter::Debug,
        LevelFilter::Trace,
    ];

    let index = (DEFAULT_LEVEL as i32 + verbose as i32 - quiet as i32).clamp(0, 5);
    LEVELS[index as usize]
}

/// Writes `LEVEL source: message` lines to stderr.
pub struct CliLogger {
    min_level: RwLock<LevelFilter>,
}

impl CliLogger {
    fn new(min_level: LevelFilter) -> Self {
        Self {
            min_level: RwLock::new(min_level),
        }
    }

    pub fn min_level(&self) -> LevelFilter {
        *self.min_level.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_min_level(&self, level: LevelFilter) {
        *self.min_level.write().unwrap_or_else(PoisonError::into_inner) = level;
    }
}

impl Log for CliLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // nowhere to report a failing stderr
            let _ = writeln!(
                io::stderr().lock(),
                "{:<5} {}: {}",
                record.level(),
                record.module_path().unwrap_or("unknown"),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}
