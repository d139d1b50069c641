//! Product Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Product entity as returned by `GET /api/products`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Category reference
    pub category_id: i64,
    /// Joined category name (absent for orphaned products)
    #[serde(default)]
    pub category_name: Option<String>,
    pub quantity: i64,
    pub minimum_stock: i64,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Product {
    /// Stock state derived from quantity vs minimum stock
    pub fn status(&self) -> ProductStatus {
        ProductStatus::derive(self.quantity, self.minimum_stock)
    }
}

/// Derived stock status, never persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    OutStock,
    LowStock,
    InStock,
}

impl ProductStatus {
    pub const ALL: [ProductStatus; 3] = [Self::InStock, Self::LowStock, Self::OutStock];

    /// `out_stock` when nothing is left, `low_stock` under the minimum,
    /// `in_stock` otherwise.
    pub fn derive(quantity: i64, minimum_stock: i64) -> Self {
        if quantity <= 0 {
            Self::OutStock
        } else if quantity < minimum_stock {
            Self::LowStock
        } else {
            Self::InStock
        }
    }

    /// Wire / select-option value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OutStock => "out_stock",
            Self::LowStock => "low_stock",
            Self::InStock => "in_stock",
        }
    }

    /// Badge css modifier
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::OutStock => "danger",
            Self::LowStock => "warning",
            Self::InStock => "success",
        }
    }

    /// Badge label
    pub fn label(&self) -> &'static str {
        match self {
            Self::OutStock => "Out of stock",
            Self::LowStock => "Low stock",
            Self::InStock => "In stock",
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "out_stock" => Ok(Self::OutStock),
            "low_stock" => Ok(Self::LowStock),
            "in_stock" => Ok(Self::InStock),
            other => Err(format!("unknown product status: {other}")),
        }
    }
}

/// Create / update product payload (`POST /api/products`, `PUT /api/products/{id}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    pub category_id: i64,
    pub quantity: i64,
    pub minimum_stock: i64,
    /// Sent as `null` when empty so an update clears the stored value
    pub location: Option<String>,
    pub description: Option<String>,
}
