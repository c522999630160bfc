use std::fs;
use std::io;
use tracing::{info, warn};

use crate::config::Settings;
use crate::error::ClearError;
use crate::fs::{is_within, normalize_path};

/// Truncates the file at `path` to zero length. Returns the confirmation message.
pub(crate) fn execute(path: &str, settings: &Settings) -> Result<String, ClearError> {
    let normalized = normalize_path(path);
    let shown = normalized.display().to_string();

    if !is_within(&normalized, &settings.allowed_roots) {
        warn!(path = %shown, "refusing to clear file outside allowed roots");
        return Err(ClearError::NotAllowed(shown));
    }

    // Any lookup failure means there is no file to clear at this path.
    let metadata = fs::metadata(&normalized).map_err(|_| ClearError::NotFound(shown.clone()))?;
    if !metadata.is_file() {
        return Err(ClearError::NotAFile(shown));
    }

    // Opened and dropped: nothing is written, the truncate does the work.
    fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(&normalized)
        .map_err(|e| map_io_error(e, &shown))?;

    info!(path = %shown, "log file cleared");
    Ok(format!("Log file cleared successfully: {}", shown))
}

fn map_io_error(err: io::Error, shown: &str) -> ClearError {
    match err.kind() {
        io::ErrorKind::NotFound => ClearError::NotFound(shown.to_string()),
        io::ErrorKind::PermissionDenied => ClearError::PermissionDenied(shown.to_string()),
        _ => ClearError::Io(err),
    }
}
