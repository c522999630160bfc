use clap::Parser;
use colored::*;
use std::path::PathBuf;

use crate::request::Request;
use crate::result::ClearResult;

/// Clears or writes debug log files. Without `--log` or `--file` it answers a
/// CGI request described by `QUERY_STRING` and friends.
#[derive(Parser, Debug, Default)]
#[command(name = "debug-log-helper", version, about)]
pub struct Cli {
    /// Configuration file (defaults to $DEBUG_LOG_HELPER_CONFIG or the user config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Truncate this log file
    #[arg(long, value_name = "PATH", conflicts_with = "file")]
    pub log: Option<String>,

    /// Replace the contents of this file
    #[arg(long, value_name = "PATH")]
    pub file: Option<String>,

    /// Contents written by --file
    #[arg(long, requires = "file")]
    pub content: Option<String>,

    /// Print a colored summary instead of JSON
    #[arg(long)]
    pub pretty: bool,
}

impl Cli {
    /// The request given on the command line, if any.
    pub fn request(&self) -> Option<Request> {
        if let Some(log) = &self.log {
            return Some(Request::Clear {
                log: Some(log.clone()).filter(|l| !l.is_empty()),
            });
        }
        self.file.as_ref().map(|file| Request::Write {
            file: Some(file.clone()).filter(|f| !f.is_empty()),
            content: self.content.clone().unwrap_or_default(),
        })
    }
}

pub fn print_result(result: &ClearResult, pretty: bool) {
    if !pretty {
        println!("{}", result.to_json());
    } else if result.success {
        println!("{} {}", "OK".green().bold(), result.message);
    } else {
        println!("{} {}", "FAILED".red().bold(), result.message.red());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_flag_builds_clear_request() {
        let cli = Cli::parse_from(["debug-log-helper", "--log", "/var/log/app.log"]);
        assert_eq!(
            cli.request(),
            Some(Request::Clear {
                log: Some("/var/log/app.log".to_string())
            })
        );
    }

    #[test]
    fn test_file_flag_builds_write_request() {
        let cli = Cli::parse_from(["debug-log-helper", "--file", "out.txt", "--content", "hi"]);
        assert_eq!(
            cli.request(),
            Some(Request::Write {
                file: Some("out.txt".to_string()),
                content: "hi".to_string()
            })
        );
    }

    #[test]
    fn test_no_flags_means_cgi() {
        let cli = Cli::parse_from(["debug-log-helper"]);
        assert_eq!(cli.request(), None);
    }

    #[test]
    fn test_log_and_file_conflict() {
        let parsed = Cli::try_parse_from(["debug-log-helper", "--log", "a", "--file", "b"]);
        assert!(parsed.is_err());
    }
}
