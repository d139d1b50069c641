//! Client-related types shared between server and client
//!
//! Session user information used by the inventory screen.

use serde::{Deserialize, Serialize};

use crate::permissions::{self, Capability};

// Re-export ApiResponse from response module
pub use crate::response::ApiResponse;

/// User information held by an authenticated session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub role: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl UserInfo {
    /// Whether the user's role is admin
    pub fn is_admin(&self) -> bool {
        self.role == permissions::ADMIN_ROLE
    }

    /// Check a single capability
    pub fn has_permission(&self, capability: Capability) -> bool {
        permissions::role_grants(&self.role, &self.permissions, capability)
    }

    /// Check whether any of the capabilities is held
    pub fn has_any_permission(&self, capabilities: &[Capability]) -> bool {
        capabilities.iter().any(|c| self.has_permission(*c))
    }
}
