//! Inventory Statistics Model

use serde::{Deserialize, Serialize};

/// Aggregates shown above the inventory table (`GET /api/inventory/stats`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryStats {
    pub total_products: u64,
    pub low_stock: u64,
    pub categories: u64,
}
