//! Subscriber construction and process-wide installation

use crate::reload::{ReloadHandle, level_filter};
use fieldgen_core::LogLevel;
use tracing::Subscriber;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{Registry, reload};

/// Build a formatting subscriber whose level can be changed through the returned handle
pub fn build_subscriber<W>(
    level: LogLevel,
    writer: W,
) -> (
    impl Subscriber + Send + Sync + 'static,
    reload::Handle<LevelFilter, Registry>,
)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let (filter, handle) = reload::Layer::new(level_filter(level));
    let subscriber = tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .with_writer(writer)
            .with_target(false)
            .with_ansi(false),
    );
    (subscriber, handle)
}

/// Install the global stderr subscriber.
///
/// Returns `false` when a global subscriber already exists; the level of a
/// subscriber installed earlier by this function is updated instead.
pub fn init_logging(level: LogLevel) -> bool {
    let (subscriber, handle) = build_subscriber(level, std::io::stderr);

    match tracing::subscriber::set_global_default(subscriber) {
        Ok(()) => {
            ReloadHandle::global().set_handle(handle);
            tracing::debug!(%level, "logging initialized");
            true
        }
        Err(_) => {
            // Already set by an earlier call or by the embedding application
            reload_installed(ReloadHandle::global(), level);
            false
        }
    }
}

/// Apply `level` through `handle`, warning when no reloadable subscriber is behind it
fn reload_installed(handle: &ReloadHandle, level: LogLevel) -> bool {
    match handle.reload_level(level) {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(%level, error = %err, "could not update log level");
            false
        }
    }
}
