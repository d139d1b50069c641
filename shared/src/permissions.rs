//! Permission Definitions
//!
//! Capabilities checked by the inventory screen. These checks only decide
//! what the client shows and attempts; the backend enforces authorization
//! on every request independently.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role that implicitly holds every capability
pub const ADMIN_ROLE: &str = "admin";

/// Permission string that grants every capability
pub const ALL_PERMISSION: &str = "all";

/// Named capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Capability {
    ViewInventory,
    AddProduct,
    EditProduct,
    DeleteProduct,
    ViewReports,
    ManageUsers,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ViewInventory => "VIEW_INVENTORY",
            Self::AddProduct => "ADD_PRODUCT",
            Self::EditProduct => "EDIT_PRODUCT",
            Self::DeleteProduct => "DELETE_PRODUCT",
            Self::ViewReports => "VIEW_REPORTS",
            Self::ManageUsers => "MANAGE_USERS",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Capability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "VIEW_INVENTORY" => Ok(Self::ViewInventory),
            "ADD_PRODUCT" => Ok(Self::AddProduct),
            "EDIT_PRODUCT" => Ok(Self::EditProduct),
            "DELETE_PRODUCT" => Ok(Self::DeleteProduct),
            "VIEW_REPORTS" => Ok(Self::ViewReports),
            "MANAGE_USERS" => Ok(Self::ManageUsers),
            other => Err(format!("unknown capability: {other}")),
        }
    }
}

/// Check a capability against a role and its granted permission strings
///
/// 1. The admin role holds every capability
/// 2. The `all` permission holds every capability
/// 3. Otherwise the capability name must be listed exactly
pub fn role_grants(role: &str, permissions: &[String], capability: Capability) -> bool {
    if role == ADMIN_ROLE {
        return true;
    }
    permissions
        .iter()
        .any(|p| p == ALL_PERMISSION || p == capability.as_str())
}
