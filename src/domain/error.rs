use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for taku operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure outside of the env file write.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The configuration module could not be resolved, parsed, or evaluated.
    #[error("Failed to load {}: {}", .path.display(), .details)]
    ConfigLoad { path: PathBuf, details: String },

    /// The env file could not be written.
    #[error("Failed to write {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The build script could not be started.
    #[error("Failed to launch build script {}: {}", .script.display(), .details)]
    ScriptLaunch { script: PathBuf, details: String },
}

impl AppError {
    pub fn config_load<P: Into<PathBuf>, S: Into<String>>(path: P, details: S) -> Self {
        AppError::ConfigLoad { path: path.into(), details: details.into() }
    }

    /// Provide an `io::ErrorKind`-like view of the failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Write { source, .. } => source.kind(),
            AppError::ConfigLoad { .. } => io::ErrorKind::InvalidInput,
            AppError::ScriptLaunch { .. } => io::ErrorKind::NotFound,
        }
    }
}
