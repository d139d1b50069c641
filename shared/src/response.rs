//! API Response types
//!
//! Every inventory endpoint wraps its payload in the same envelope:
//! ```json
//! {
//!     "success": true,
//!     "data": { ... },
//!     "error": null
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Unified API response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the backend considers the call successful
    pub success: bool,
    /// Response data (absent for mutations that return nothing)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable error reported by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }

    /// Split the envelope into its payload or the backend's error message.
    ///
    /// A failed envelope without a message yields `Err(None)` so the caller
    /// can substitute its own fallback text.
    pub fn into_result(self) -> Result<Option<T>, Option<String>> {
        if self.success {
            Ok(self.data)
        } else {
            Err(self.error.filter(|e| !e.trim().is_empty()))
        }
    }
}

impl ApiResponse<()> {
    /// Create a successful response without data
    pub fn empty() -> Self {
        Self {
            success: true,
            data: None,
            error: None,
        }
    }
}
