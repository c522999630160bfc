use url::form_urlencoded;

use crate::helper::FileOps;
use crate::result::ClearResult;

pub const MISSING_LOG: &str = "Missing 'log' parameter";
pub const MISSING_FILE: &str = "Missing 'file' parameter";

/// A decoded request. Blank parameters are kept as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Clear { log: Option<String> },
    Write { file: Option<String>, content: String },
}

/// First non-blank value of `key`, if any.
fn param(pairs: &str, key: &str) -> Option<String> {
    form_urlencoded::parse(pairs.as_bytes())
        .find(|(k, v)| k == key && !v.is_empty())
        .map(|(_, v)| v.into_owned())
}

impl Request {
    /// `body` is the form-encoded POST body, empty for other methods.
    pub fn parse(query: &str, body: &str) -> Self {
        match param(query, "action").as_deref() {
            Some("write") => Request::Write {
                file: param(body, "file"),
                content: param(body, "content").unwrap_or_default(),
            },
            _ => Request::Clear {
                log: param(query, "log"),
            },
        }
    }

    pub fn dispatch<F: FileOps + ?Sized>(&self, ops: &F) -> ClearResult {
        match self {
            Request::Clear { log: Some(log) } => ops.clear(log),
            Request::Clear { log: None } => ClearResult::failure(MISSING_LOG),
            Request::Write {
                file: Some(file),
                content,
            } => ops.write(file, content),
            Request::Write { file: None, .. } => ClearResult::failure(MISSING_FILE),
        }
    }
}
