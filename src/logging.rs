use crate::config::LogConfig;
use log::{LevelFilter, SetLoggerError};
use simplelog::{ConfigBuilder, WriteLogger};
use std::path::PathBuf;
use thiserror::Error;

/// Install a global logger that appends to the log file described by
/// `config`.  Nothing is installed if the configured level is `Off`.
///
/// The terminal belongs to the game while it's running, so messages only ever
/// go to the file.
pub(crate) fn init(config: &LogConfig) -> Result<Option<PathBuf>, LogError> {
    if config.level == LevelFilter::Off {
        return Ok(None);
    }
    let path = config.file_path().ok_or(LogError::NoPath)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent).map_err(LogError::Mkdir)?;
    }
    let file = fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(LogError::Open)?;
    let logcfg = ConfigBuilder::new()
        .set_thread_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build();
    WriteLogger::init(config.level, logcfg, file)?;
    Ok(Some(path))
}

#[derive(Debug, Error)]
pub(crate) enum LogError {
    #[error("failed to determine path to local data directory")]
    NoPath,
    #[error("failed to create log directory")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to open log file")]
    Open(#[source] std::io::Error),
    #[error("failed to install logger")]
    Install(#[from] SetLoggerError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn off_installs_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("gridsnake.log");
        let config = LogConfig {
            file: Some(path.clone()),
            level: LevelFilter::Off,
        };
        assert!(init(&config).unwrap().is_none());
        assert!(!path.exists());
    }
}
