//! Common error types used across the chart hook crates
//! Provides consistent error handling and reporting

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base error type for all chart hook operations
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum HookError {
    // Payload errors
    #[error("No chart data found in {attribute} attribute")]
    MissingData { attribute: String },

    #[error("Failed to parse chart data JSON: {message}")]
    MalformedData {
        message: String,
        line: usize,
        column: usize,
    },

    #[error("Invalid chart data structure: {message}")]
    InvalidShape {
        message: String,
        field: Option<String>,
    },

    // Rendering library errors
    #[error("Chart backend failed: {message}")]
    Backend { message: String },

    // Configuration errors
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        message: String,
        field: Option<String>,
    },

    // Bootstrap errors
    #[error("No csrf-token meta tag found in document")]
    MissingCsrfToken,

    #[error("JavaScript interop error: {message}")]
    JsInterop { message: String },
}

/// Result type alias for chart hook operations
pub type HookResult<T> = Result<T, HookError>;

impl HookError {
    /// Stable short name used in log lines
    pub fn kind(&self) -> &'static str {
        match self {
            HookError::MissingData { .. } => "missing_data",
            HookError::MalformedData { .. } => "malformed_data",
            HookError::InvalidShape { .. } => "invalid_shape",
            HookError::Backend { .. } => "backend",
            HookError::InvalidConfig { .. } => "invalid_config",
            HookError::MissingCsrfToken => "missing_csrf_token",
            HookError::JsInterop { .. } => "js_interop",
        }
    }

    /// Whether the error came from the payload carried on the element
    pub fn is_payload_error(&self) -> bool {
        matches!(
            self,
            HookError::MissingData { .. }
                | HookError::MalformedData { .. }
                | HookError::InvalidShape { .. }
        )
    }

    pub(crate) fn shape(message: impl Into<String>, field: Option<&str>) -> Self {
        HookError::InvalidShape {
            message: message.into(),
            field: field.map(str::to_string),
        }
    }

    pub(crate) fn config(message: impl Into<String>, field: &str) -> Self {
        HookError::InvalidConfig {
            message: message.into(),
            field: Some(field.to_string()),
        }
    }

    /// Convert to JSON string for JavaScript
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(
                r#"{{"type":"JsInterop","details":{{"message":"{}"}}}}"#,
                self.kind()
            )
        })
    }
}

impl From<serde_json::Error> for HookError {
    fn from(err: serde_json::Error) -> Self {
        HookError::MalformedData {
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }
}
