pub(crate) mod clear_log;
pub(crate) mod write_file;
