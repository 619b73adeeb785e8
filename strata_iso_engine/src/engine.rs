/// Strata Engine - process-wide logger host
///
/// The camera core deliberately has no renderer or world singletons:
/// every collaborator is handed to the camera per frame. The only global
/// state is the logger the engine_*! macros write through, stored in
/// thread-safe statics so diagnostics work before any camera exists.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

// ===== INTERNAL STATE =====

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Minimum severity rank that passes the filter (see LogSeverity::rank)
static LOG_FILTER: AtomicU8 = AtomicU8::new(0);

// ===== PUBLIC API =====

/// Engine entry point for global concerns.
///
/// # Example
///
/// ```no_run
/// use strata_iso_engine::strata::{Engine, log::LogSeverity};
///
/// // Silence everything below warnings
/// Engine::set_log_filter(LogSeverity::Warn);
/// ```
pub struct Engine;

impl Engine {
    /// Set a custom logger
    ///
    /// Replace the default logger with a custom implementation
    /// (file logger, in-game console, test capture, ...).
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(mut lock) = logger_lock.write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to default (DefaultLogger)
    pub fn reset_logger() {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(mut lock) = logger_lock.write() {
            *lock = Box::new(DefaultLogger);
        }
    }

    /// Drop every entry below `minimum` before it reaches the logger
    pub fn set_log_filter(minimum: LogSeverity) {
        LOG_FILTER.store(minimum.rank(), Ordering::Relaxed);
    }

    /// Current minimum severity accepted by the filter
    pub fn log_filter() -> LogSeverity {
        LogSeverity::from_rank(LOG_FILTER.load(Ordering::Relaxed))
    }

    /// Internal logging method (for simple logs without file:line)
    ///
    /// Used by macros like engine_info!, engine_warn!, etc.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        if severity.rank() < LOG_FILTER.load(Ordering::Relaxed) {
            return;
        }
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(lock) = logger_lock.read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: None,
                line: None,
            });
        }
    }

    /// Internal logging method with file:line information (for ERROR logs)
    ///
    /// Used by the engine_error! macro to include the source location.
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        if severity.rank() < LOG_FILTER.load(Ordering::Relaxed) {
            return;
        }
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(lock) = logger_lock.read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: Some(file),
                line: Some(line),
            });
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
