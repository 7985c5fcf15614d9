//! Log setup for the CLI.
//!
//! Diagnostics raised while building URLs (unparseable `Version` or
//! `ContentUrl` metadata) are `tracing` events, so the subscriber installed
//! here decides where they surface. Both initializers are safe to call more
//! than once: only the first subscriber is installed.

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const APP_NAME: &str = "gitlab-sourcelink";
const LOG_FILE_NAME: &str = "gitlab-sourcelink.log";
const DEFAULT_FILTER: &str = "info,sourcelink_core=debug";

/// Appends to the log file; writes to stderr when the handle cannot be cloned.
enum LogSink {
    File(fs::File),
    Stderr,
}

impl io::Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogSink::File(f) => f.write(buf),
            LogSink::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogSink::File(f) => f.flush(),
            LogSink::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct LogFile(fs::File);

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = LogSink;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(LogSink::File)
            .unwrap_or(LogSink::Stderr)
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// `~/.local/state/gitlab-sourcelink`.
pub fn log_dir() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_NAME)?;
    Ok(xdg_dirs.get_state_home())
}

/// Log to `gitlab-sourcelink.log` inside `dir`, creating the directory.
///
/// Returns the log file path. Fails if the file cannot be opened or a global
/// subscriber is already installed.
pub fn init_logging_at(dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("create log dir: {}", dir.display()))?;
    let path = dir.join(LOG_FILE_NAME);
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file: {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(BoxMakeWriter::new(LogFile(file)))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install log subscriber: {e}"))?;

    tracing::info!("logging initialized at {}", path.display());
    Ok(path)
}

/// Log to the XDG state dir. On failure the caller falls back to
/// [`init_logging_stderr`].
pub fn init_logging() -> Result<PathBuf> {
    init_logging_at(&log_dir()?)
}

/// Log to stderr. Returns `false` when a subscriber was already installed.
pub fn init_logging_stderr() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init()
        .is_ok()
}
