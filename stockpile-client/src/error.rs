//! Client error types

use shared::Capability;
use thiserror::Error;

use crate::form::ProductFormError;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (connection refused, timeout, unreadable body)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with `success: false`
    #[error("{0}")]
    Api(String),

    /// Backend answered with `success: false` and no message
    #[error("Request rejected by the server")]
    Rejected,

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Backend refused the request
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Non-success status without an envelope
    #[error("Server error ({status}): {body}")]
    Status { status: u16, body: String },

    /// Client-side form validation failed
    #[error("{0}")]
    Validation(#[from] ProductFormError),

    /// Client-side capability guard refused the action
    #[error("{}", permission_message(.0))]
    PermissionDenied(Capability),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Text for the error banner.
    ///
    /// Backend, validation and permission messages are shown as they are;
    /// anything else is replaced by the operation's fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Api(_) | Self::Validation(_) | Self::PermissionDenied(_) => self.to_string(),
            _ => fallback.to_string(),
        }
    }
}

fn permission_message(capability: &Capability) -> &'static str {
    match capability {
        Capability::AddProduct => "You do not have permission to add products",
        Capability::EditProduct => "You do not have permission to edit products",
        Capability::DeleteProduct => "You do not have permission to delete products",
        _ => "You do not have permission to perform this action",
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_backend_text() {
        let err = ClientError::Api("Duplicate product name".into());
        assert_eq!(err.user_message("Error saving product"), "Duplicate product name");
    }

    #[test]
    fn test_user_message_falls_back() {
        let err = ClientError::InvalidResponse("Missing product data".into());
        assert_eq!(err.user_message("Error loading product"), "Error loading product");
        assert_eq!(ClientError::Rejected.user_message("Error loading stats"), "Error loading stats");
    }

    #[test]
    fn test_permission_denied_message() {
        let err = ClientError::PermissionDenied(Capability::DeleteProduct);
        assert_eq!(
            err.user_message("ignored"),
            "You do not have permission to delete products"
        );
    }
}
