use std::{fs::OpenOptions, io, path::Path};

use tracing_subscriber::{fmt::writer::BoxMakeWriter, EnvFilter};

use crate::infra::{config::LogConfig, error::AppError};

/// Where log lines go when no log file is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    /// Terminal UI owns the screen: drop log output.
    Discard,
    Stderr,
}

pub fn init(config: &LogConfig, fallback: LogOutput) -> Result<(), AppError> {
    let writer = match &config.file {
        Some(path) => file_writer(path)?,
        None => match fallback {
            LogOutput::Discard => BoxMakeWriter::new(io::sink),
            LogOutput::Stderr => BoxMakeWriter::new(io::stderr),
        },
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level)),
        )
        .with_target(true)
        .with_ansi(config.file.is_none() && fallback == LogOutput::Stderr)
        .with_writer(writer)
        .try_init()
        .map_err(AppError::LoggingInit)
}

fn file_writer(path: &Path) -> Result<BoxMakeWriter, AppError> {
    let directory = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let Some(file_name) = path.file_name() else {
        return Err(AppError::LogFileOpen {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "log path has no file name"),
        });
    };

    // Fail early with a readable error; the appender itself only reports
    // open failures on the first write.
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| AppError::LogFileOpen {
            path: path.to_path_buf(),
            source,
        })?;

    let appender = tracing_appender::rolling::never(directory, file_name);
    Ok(BoxMakeWriter::new(appender))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_writer_creates_the_log_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("focus.log");

        file_writer(&path).expect("writer must open");

        assert!(path.exists());
    }

    #[test]
    fn file_writer_reports_unopenable_paths() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("missing-dir").join("focus.log");

        let error = file_writer(&path).expect_err("must fail");

        assert!(matches!(error, AppError::LogFileOpen { .. }));
    }
}
