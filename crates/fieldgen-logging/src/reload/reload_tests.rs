#![allow(non_snake_case)]

use super::*;

#[test]
fn ReloadHandle___new___not_initialized() {
    let handle = ReloadHandle::new();

    assert!(!handle.is_initialized());
}

#[test]
fn ReloadHandle___reload_without_handle___returns_error() {
    let handle = ReloadHandle::new();

    let result = handle.reload_level(LogLevel::Debug);

    assert_eq!(result, Err("Reload handle not initialized".to_string()));
}

#[test]
fn ReloadHandle___reload_with_handle___succeeds() {
    let (_layer, inner) = reload::Layer::<LevelFilter, tracing_subscriber::Registry>::new(
        LevelFilter::WARN,
    );
    let handle = ReloadHandle::new();
    handle.set_handle(inner.clone());

    handle.reload_level(LogLevel::Trace).unwrap();

    assert!(handle.is_initialized());
    assert_eq!(inner.clone_current(), Some(LevelFilter::TRACE));
}

#[test]
fn level_filter___maps_every_level() {
    assert_eq!(level_filter(LogLevel::Trace), LevelFilter::TRACE);
    assert_eq!(level_filter(LogLevel::Debug), LevelFilter::DEBUG);
    assert_eq!(level_filter(LogLevel::Info), LevelFilter::INFO);
    assert_eq!(level_filter(LogLevel::Warn), LevelFilter::WARN);
    assert_eq!(level_filter(LogLevel::Error), LevelFilter::ERROR);
    assert_eq!(level_filter(LogLevel::Off), LevelFilter::OFF);
}
