// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Liftlog-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Liftlog and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Tracing setup.
//!
//! The TUI owns the terminal, so interactive runs log to `liftlog.log` in the data directory.
//! `RUST_LOG`, when set, takes precedence over the configured filter.

use std::io;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_NAME: &str = "liftlog.log";

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("cannot create log directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot install tracing subscriber: {0}")]
    Install(String),
}

/// Routes tracing output to a non-blocking file writer.
///
/// The returned guard flushes buffered lines on drop and must outlive the UI loop.
pub fn init_file_logging(log_dir: &Path, filter: &str) -> Result<WorkerGuard, LoggingError> {
    std::fs::create_dir_all(log_dir).map_err(|source| LoggingError::CreateDir {
        path: log_dir.to_path_buf(),
        source,
    })?;
    let appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_env_filter(env_filter(filter))
        .try_init()
        .map_err(|err| LoggingError::Install(err.to_string()))?;
    Ok(guard)
}

/// Logs to stderr, keeping stdout clean for command output.
pub fn init_stderr_logging(filter: &str) -> Result<(), LoggingError> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(env_filter(filter))
        .try_init()
        .map_err(|err| LoggingError::Install(err.to_string()))
}

fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_FILTER))
}

#[cfg(test)]
mod tests {
    use super::env_filter;

    #[test]
    fn invalid_filter_falls_back_to_default() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        assert_eq!(env_filter("liftlog=debug").to_string(), "liftlog=debug");
        assert_eq!(env_filter("liftlog=notalevel").to_string(), "info");
    }
}
