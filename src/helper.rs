use crate::actions::{clear_log, write_file};
use crate::config::Settings;
use crate::result::ClearResult;

/// File operations a request can trigger. Every failure is folded into the
/// returned `ClearResult`.
pub trait FileOps {
    fn clear(&self, path: &str) -> ClearResult;
    fn write(&self, path: &str, content: &str) -> ClearResult;
}

#[derive(Debug, Clone, Default)]
pub struct LogClearer {
    settings: Settings,
}

impl LogClearer {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
}

impl FileOps for LogClearer {
    fn clear(&self, path: &str) -> ClearResult {
        clear_log::execute(path, &self.settings).into()
    }

    fn write(&self, path: &str, content: &str) -> ClearResult {
        write_file::execute(path, content, &self.settings).into()
    }
}
