/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/10/25
******************************************************************************/
use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Installs the global `tracing` subscriber once per process
///
/// The level comes from the `LOGLEVEL` environment variable
/// (`TRACE`, `DEBUG`, `INFO`, `WARN`, `ERROR`) and defaults to `INFO`.
/// Later calls are no-ops, so tests may call it freely.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = env::var("LOGLEVEL")
            .map(|value| parse_level(&value))
            .unwrap_or(Level::INFO);

        let subscriber = FmtSubscriber::builder().with_max_level(level).finish();

        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            tracing::debug!("Log level set to: {}", level);
        }
    });
}

/// Maps a case-insensitive level name to a `tracing` level, defaulting to `INFO`
#[must_use]
pub fn parse_level(value: &str) -> Level {
    match value.trim().to_uppercase().as_str() {
        "TRACE" => Level::TRACE,
        "DEBUG" => Level::DEBUG,
        "WARN" | "WARNING" => Level::WARN,
        "ERROR" => Level::ERROR,
        _ => Level::INFO,
    }
}
