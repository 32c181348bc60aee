//! File-based logging setup.
//!
//! The TUI owns the terminal, so log output goes to a file. Keep the
//! returned guard alive for the lifetime of the process or buffered lines
//! are lost.

use std::path::Path;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub fn init(log_file: &Path) -> Result<WorkerGuard> {
    let directory = log_file.parent().filter(|p| !p.as_os_str().is_empty());
    let file_name = log_file
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("log path {} has no file name", log_file.display()))?;

    let appender = tracing_appender::rolling::never(
        directory.unwrap_or_else(|| Path::new(".")),
        file_name,
    );
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
