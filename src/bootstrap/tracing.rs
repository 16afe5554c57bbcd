//! Tracing configuration for Recipebook
//!
//! Log lines go to stderr so they never interleave with the terminal screen
//! on stdout.

use std::io;

use tracing_subscriber::{fmt, prelude::*, registry};

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
///
/// - **Development**: debug level for the workspace crates
/// - **Production**: info level
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let level = if is_dev { "debug" } else { "info" };
    vec![
        if is_dev { "info" } else { "warn" }.to_string(),
        format!("recipebook={level}"),
        format!("rb_core={level}"),
        format!("rb_app={level}"),
        format!("rb_infra={level}"),
    ]
}

/// Initialize the tracing subscriber.
///
/// Respects `RUST_LOG`; otherwise falls back to [`build_filter_directives`].
///
/// # Errors
///
/// Returns `Err` if a global subscriber is already registered.
pub fn init_tracing_subscriber() -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    // "2025-01-15 10:30:45.123 INFO [file.rs:42] [target] message"
    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(io::stderr);

    registry().with(env_filter).with(stderr_layer).try_init()?;

    Ok(())
}
