//! Kunai iCalendar - integration test support.
//!
//! Re-exports the workspace crates and provides fixture loading and logging
//! setup for the tests under `tests/`.

use std::path::PathBuf;

use anyhow::Context as _;
use kunai_core::config::LoggingConfig;
use tokio::fs::File;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

pub use kunai_core::config;
pub use kunai_ical as ical;

/// Normalizes bare LF line endings to CRLF.
#[must_use]
pub fn to_crlf(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 32);
    for line in text.split_inclusive('\n') {
        let body = line.strip_suffix('\n').unwrap_or(line);
        let body = body.strip_suffix('\r').unwrap_or(body);
        out.push_str(body);
        if line.ends_with('\n') {
            out.push_str("\r\n");
        }
    }
    out
}

/// Path of a file under this crate's `fixtures/` directory.
#[must_use]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

/// Opens a fixture for streaming.
///
/// ## Errors
/// Returns an error if the fixture cannot be opened.
pub async fn open_fixture(name: &str) -> anyhow::Result<BufReader<File>> {
    let path = fixture_path(name);
    tracing::debug!(path = %path.display(), "Opening fixture");
    let file = File::open(&path)
        .await
        .with_context(|| format!("failed to open fixture {}", path.display()))?;
    Ok(BufReader::new(file))
}

/// Reads a fixture into memory.
///
/// ## Errors
/// Returns an error if the fixture cannot be read or is not UTF-8.
pub async fn read_fixture(name: &str) -> anyhow::Result<String> {
    let path = fixture_path(name);
    tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("failed to read fixture {}", path.display()))
}

/// Installs a global subscriber filtered by the configured level.
///
/// Later calls are no-ops, so every test may call it.
pub fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_new(&logging.level).unwrap_or_else(|_| EnvFilter::new("info"));
    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init()
        .is_err()
    {
        tracing::trace!("Subscriber already installed");
    }
}
