use std::fs;
use std::io;
use tracing::{info, warn};

use crate::config::Settings;
use crate::error::WriteError;
use crate::fs::{is_within, normalize_path};

/// Replaces the contents of the file at `path`, creating it if needed.
pub(crate) fn execute(path: &str, content: &str, settings: &Settings) -> Result<String, WriteError> {
    let normalized = normalize_path(path);
    let shown = normalized.display().to_string();

    if !is_within(&normalized, &settings.allowed_roots) {
        warn!(path = %shown, "refusing to write file outside allowed roots");
        return Err(WriteError::NotAllowed(shown));
    }

    if settings.create_parent_dirs {
        if let Some(parent_dir) = normalized.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent_dir.is_dir() {
                fs::create_dir_all(parent_dir)
                    .map_err(|e| WriteError::CreateParent(parent_dir.display().to_string(), e))?;
            }
        }
    }

    fs::write(&normalized, content).map_err(|e| match e.kind() {
        io::ErrorKind::PermissionDenied => WriteError::PermissionDenied(shown.clone()),
        _ => WriteError::Io(e),
    })?;

    info!(path = %shown, bytes = content.len(), "file written");
    Ok(format!("File written successfully: {}", shown))
}
