use anyhow::{Context, Result};
use std::env;
use std::io::{self, Read, Write};
use tracing::{debug, warn};

use crate::helper::FileOps;
use crate::request::Request;
use crate::result::ClearResult;

/// The part of the CGI environment this program reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CgiEnv {
    pub request_method: String,
    pub query_string: String,
    pub content_length: Option<u64>,
}

impl CgiEnv {
    pub fn from_env() -> Self {
        Self {
            request_method: env::var("REQUEST_METHOD").unwrap_or_else(|_| "GET".to_string()),
            query_string: env::var("QUERY_STRING").unwrap_or_default(),
            content_length: env::var("CONTENT_LENGTH")
                .ok()
                .and_then(|raw| raw.trim().parse().ok()),
        }
    }

    pub fn is_post(&self) -> bool {
        self.request_method.eq_ignore_ascii_case("POST")
    }
}

pub fn is_cgi() -> bool {
    env::var_os("GATEWAY_INTERFACE").is_some()
}

/// Reads the form body of a POST request. Other methods have no body.
pub fn read_body<R: Read>(input: R, cgi_env: &CgiEnv) -> Result<String> {
    if !cgi_env.is_post() {
        return Ok(String::new());
    }
    let mut raw = Vec::new();
    input
        .take(cgi_env.content_length.unwrap_or(u64::MAX))
        .read_to_end(&mut raw)
        .context("Failed to read request body")?;
    String::from_utf8(raw).context("Request body is not valid UTF-8")
}

pub fn write_response<W: Write>(mut out: W, result: &ClearResult) -> Result<()> {
    write!(
        out,
        "Content-Type: application/json\r\nAccess-Control-Allow-Origin: *\r\n\r\n{}\n",
        result.to_json()
    )
    .context("Failed to write response")?;
    out.flush().context("Failed to flush response")?;
    Ok(())
}

/// Answers one request. Every outcome, including a broken body, becomes a JSON result.
pub fn handle<R: Read, F: FileOps>(cgi_env: &CgiEnv, input: R, ops: &F) -> ClearResult {
    debug!(method = %cgi_env.request_method, query = %cgi_env.query_string, "handling request");
    let body = match read_body(input, cgi_env) {
        Ok(body) => body,
        Err(e) => {
            warn!("{:#}", e);
            return ClearResult::failure(format!("Error reading request body: {:#}", e));
        }
    };
    let result = Request::parse(&cgi_env.query_string, &body).dispatch(ops);
    if !result.success {
        warn!(message = %result.message, "request failed");
    }
    result
}

pub fn respond(result: &ClearResult) {
    if let Err(e) = write_response(io::stdout().lock(), result) {
        warn!("{:#}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helper::LogClearer;
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    fn get(query: &str) -> CgiEnv {
        CgiEnv {
            request_method: "GET".to_string(),
            query_string: query.to_string(),
            content_length: None,
        }
    }

    #[test]
    fn test_response_has_headers_then_json() -> Result<()> {
        let mut out = Vec::new();
        write_response(&mut out, &ClearResult::failure("Missing 'log' parameter"))?;
        let text = String::from_utf8(out)?;
        let (headers, body) = text.split_once("\r\n\r\n").context("no header terminator")?;
        assert!(headers.lines().any(|l| l == "Content-Type: application/json"));
        assert!(headers.lines().any(|l| l == "Access-Control-Allow-Origin: *"));
        assert_eq!(body.trim_end(), r#"{"success":false,"message":"Missing 'log' parameter"}"#);
        Ok(())
    }

    #[test]
    fn test_get_body_is_not_read() -> Result<()> {
        let body = read_body(&b"file=/etc/passwd"[..], &get("action=write"))?;
        assert!(body.is_empty());
        Ok(())
    }

    #[test]
    fn test_post_body_respects_content_length() -> Result<()> {
        let cgi_env = CgiEnv {
            request_method: "post".to_string(),
            query_string: "action=write".to_string(),
            content_length: Some(6),
        };
        let body = read_body(&b"file=xTRAILING"[..], &cgi_env)?;
        assert_eq!(body, "file=x");
        Ok(())
    }

    #[test]
    fn test_invalid_utf8_body_becomes_failure() {
        let cgi_env = CgiEnv {
            request_method: "POST".to_string(),
            query_string: "action=write".to_string(),
            content_length: None,
        };
        let result = handle(&cgi_env, &b"\xff\xfe"[..], &LogClearer::default());
        assert!(!result.success);
        assert!(result.message.starts_with("Error reading request body"));
    }

    #[test]
    fn test_handle_clears_file_from_query() -> Result<()> {
        let dir = tempdir()?;
        let log = dir.path().join("error_log");
        fs::write(&log, "stack trace")?;
        let query = format!("log={}", urlencoding::encode(&log.display().to_string()));

        let result = handle(&get(&query), io::empty(), &LogClearer::default());

        assert!(result.success, "{}", result.message);
        assert_eq!(fs::metadata(&log)?.len(), 0);
        Ok(())
    }

    #[test]
    fn test_handle_writes_file_from_post_body() -> Result<()> {
        let dir = tempdir()?;
        let target = dir.path().join("nested").join("combined_debug.txt");
        let body = format!(
            "file={}&content={}",
            urlencoding::encode(&target.display().to_string()),
            urlencoding::encode("line one\nline two")
        );
        let cgi_env = CgiEnv {
            request_method: "POST".to_string(),
            query_string: "action=write".to_string(),
            content_length: Some(body.len() as u64),
        };

        let result = handle(&cgi_env, body.as_bytes(), &LogClearer::default());

        assert!(result.success, "{}", result.message);
        assert_eq!(fs::read_to_string(&target)?, "line one\nline two");
        Ok(())
    }
}
