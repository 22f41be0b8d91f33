//! fieldgen-logging - Tracing subscriber setup for the fieldgen tools
//!
//! This crate provides:
//! - [`init_logging`] to install a stderr subscriber once per process
//! - [`ReloadHandle`] to change the level filter after installation

mod reload;
mod subscriber;

pub use fieldgen_core::LogLevel;
pub use reload::{ReloadHandle, level_filter};
pub use subscriber::{build_subscriber, init_logging};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{LogLevel, ReloadHandle, init_logging};
}
