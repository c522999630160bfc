use std::path::{Path, PathBuf, MAIN_SEPARATOR};

fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Lexically normalizes a path, accepting both `/` and `\` as separators and
/// joining the result with the host separator. Nothing touches the disk.
pub fn normalize_path(raw: &str) -> PathBuf {
    let absolute = raw.starts_with(is_separator);
    let mut parts: Vec<&str> = Vec::new();
    for part in raw.split(is_separator) {
        match part {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                // `..` directly under the root stays at the root
                _ if absolute => {}
                _ => parts.push(part),
            },
            _ => parts.push(part),
        }
    }

    let joined = parts.join(&MAIN_SEPARATOR.to_string());
    let normalized = match (absolute, joined.is_empty()) {
        (true, _) => format!("{}{}", MAIN_SEPARATOR, joined),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    };
    PathBuf::from(normalized)
}

/// An empty `roots` list means every path is allowed.
pub fn is_within<S: AsRef<str>>(path: &Path, roots: &[S]) -> bool {
    roots.is_empty()
        || roots
            .iter()
            .any(|root| path.starts_with(normalize_path(root.as_ref())))
}
