//! Custom error types for ec2-audit.

use thiserror::Error;

/// Errors that can occur during an audit run.
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("[{0}] {1}")]
    AwsSdk(String, String),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

impl AuditError {
    /// Create an AWS SDK error from any error type, tagged with the
    /// originating component (usually `module_path!()`).
    pub fn aws<E: std::fmt::Debug + std::fmt::Display>(component: &str, err: E) -> Self {
        let err_debug = format!("{:?}", err);
        let err_display = err.to_string();

        AuditError::AwsSdk(
            component.to_string(),
            Self::extract_error_details(&err_debug, &err_display),
        )
    }

    /// Extract a single-line message from an AWS SDK error.
    ///
    /// SDK service errors carry the useful text in a nested `message` field
    /// that the Display impl often hides behind "service error".
    fn extract_error_details(debug_str: &str, display_str: &str) -> String {
        // Pattern: message: Some("actual error message")
        if let Some(pos) = debug_str.find("message: Some(\"") {
            let start = pos + "message: Some(\"".len();
            let rest = &debug_str[start..];
            if let Some(end) = rest.find('"') {
                return rest[..end].to_string();
            }
        }

        if !display_str.to_lowercase().contains("service error") {
            return display_str.to_string();
        }

        "AWS API request failed".to_string()
    }
}
