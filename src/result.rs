use serde::{Deserialize, Serialize};
use serde_json::json;

/// Outcome of a single request, serialized verbatim as the response body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearResult {
    pub success: bool,
    pub message: String,
}

impl ClearResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            json!({ "success": self.success, "message": self.message }).to_string()
        })
    }
}

impl<E: std::error::Error> From<Result<String, E>> for ClearResult {
    fn from(outcome: Result<String, E>) -> Self {
        match outcome {
            Ok(message) => ClearResult::ok(message),
            Err(err) => ClearResult::failure(err.to_string()),
        }
    }
}
