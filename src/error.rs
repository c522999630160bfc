use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures of the clear action. The `Display` text is what the caller sees.
#[derive(Debug, Error)]
pub enum ClearError {
    #[error("Log file not found: {0}")]
    NotFound(String),
    #[error("Path is not a file: {0}")]
    NotAFile(String),
    #[error("Path is outside the allowed directories: {0}")]
    NotAllowed(String),
    #[error("Permission denied: unable to clear log file {0}")]
    PermissionDenied(String),
    #[error("Error clearing log file: {0}")]
    Io(#[source] io::Error),
}

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("Failed to create parent directory: {0}")]
    CreateParent(String, #[source] io::Error),
    #[error("Path is outside the allowed directories: {0}")]
    NotAllowed(String),
    #[error("Permission denied: unable to write file {0}")]
    PermissionDenied(String),
    #[error("Error writing file: {0}")]
    Io(#[source] io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Error loading configuration: failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Error loading configuration: failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
