//! Tracing subscriber setup for the binary
//!
//! Logs go to stderr so command output on stdout stays machine readable.
//! `RUST_LOG` overrides the configured level.

use std::io;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{LOG_FILE_NAME, LogConfig, LogFormat, data_dir};

/// Keeps the non-blocking file writer alive; drop it to flush.
pub struct LoggingGuard {
    _file: Option<WorkerGuard>,
}

pub fn init_logging(config: &LogConfig) -> anyhow::Result<LoggingGuard> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let (writer, guard) = if config.file {
        let dir = data_dir();
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create data directory {:?}", dir))?;
        let appender = tracing_appender::rolling::never(&dir, LOG_FILE_NAME);
        let (file, guard) = tracing_appender::non_blocking(appender);
        (BoxMakeWriter::new(io::stderr.and(file)), Some(guard))
    } else {
        (BoxMakeWriter::new(io::stderr), None)
    };

    let builder = fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(guard.is_none());

    let result = match config.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    result.map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    tracing::debug!("Logging initialized with level: {}", config.level);
    Ok(LoggingGuard { _file: guard })
}
