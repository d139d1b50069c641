//! Data models
//!
//! Shared between the inventory backend and its clients (via API).
//! All IDs are `i64`.

pub mod category;
pub mod product;
pub mod stats;

// Re-exports
pub use category::*;
pub use product::*;
pub use stats::*;
