//! API response envelope
//!
//! Error responses share one JSON shape across every endpoint:
//!
//! ```json
//! {
//!   "code": "E2001",
//!   "message": "Access denied"
//! }
//! ```
//!
//! Successful handlers return their payload directly; the envelope is only
//! used for the error path and for endpoints that have no natural payload.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Machine-readable code ("E0000" means success)
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Optional payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: "E0000".to_string(),
            message: "Success".to_string(),
            data: Some(data),
        }
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            data: None,
        }
    }
}
