mod actions;
pub mod cgi;
pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod helper;
pub mod logging;
pub mod request;
pub mod result;

pub use config::Settings;
pub use helper::{FileOps, LogClearer};
pub use request::Request;
pub use result::ClearResult;
