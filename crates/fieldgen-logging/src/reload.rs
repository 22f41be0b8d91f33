//! Dynamic log level reloading support

use fieldgen_core::LogLevel;
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::reload;

/// Handle for dynamically reloading the log level filter
pub struct ReloadHandle {
    handle: Mutex<Option<reload::Handle<LevelFilter, tracing_subscriber::Registry>>>,
}

impl ReloadHandle {
    /// Create a new reload handle
    pub fn new() -> Self {
        Self {
            handle: Mutex::new(None),
        }
    }

    /// Get the global reload handle
    pub fn global() -> &'static ReloadHandle {
        static INSTANCE: OnceCell<ReloadHandle> = OnceCell::new();
        INSTANCE.get_or_init(ReloadHandle::new)
    }

    /// Set the reload handle (called during initialization)
    pub fn set_handle(&self, handle: reload::Handle<LevelFilter, tracing_subscriber::Registry>) {
        *self.handle.lock() = Some(handle);
    }

    /// Whether a subscriber has been installed through this handle
    pub fn is_initialized(&self) -> bool {
        self.handle.lock().is_some()
    }

    /// Reload the filter to use a new log level
    pub fn reload_level(&self, level: LogLevel) -> Result<(), String> {
        let guard = self.handle.lock();
        if let Some(handle) = guard.as_ref() {
            handle
                .reload(level_filter(level))
                .map_err(|e| format!("Failed to reload filter: {}", e))?;
            Ok(())
        } else {
            Err("Reload handle not initialized".to_string())
        }
    }
}

impl Default for ReloadHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert LogLevel to tracing LevelFilter
pub fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Trace => LevelFilter::TRACE,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Off => LevelFilter::OFF,
    }
}

#[cfg(test)]
#[path = "reload/reload_tests.rs"]
mod reload_tests;
