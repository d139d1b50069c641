//! Shared types for the Stockpile inventory screen
//!
//! Wire types used by both the inventory backend and its clients:
//! the response envelope, product/category models and capabilities.

pub mod client;
pub mod models;
pub mod permissions;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use client::UserInfo;
pub use models::{Category, InventoryStats, Product, ProductPayload, ProductStatus};
pub use permissions::Capability;
pub use response::ApiResponse;
