//! Product form and its client-side validation
//!
//! Values arrive exactly as typed in the modal; validation turns them into
//! a [`ProductPayload`] or the first problem found, checked in form order.

use shared::{Product, ProductPayload};
use thiserror::Error;

// ── Text length limits ──────────────────────────────────────────────

/// Product names
pub const MAX_NAME_LEN: usize = 200;

/// Storage location labels
pub const MAX_LOCATION_LEN: usize = 100;

/// Free-form descriptions
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Validation failure, worded for the error banner
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductFormError {
    #[error("Product name is required")]
    NameRequired,
    #[error("A category must be selected")]
    CategoryRequired,
    #[error("{field} must be a whole number")]
    NotANumber { field: &'static str },
    #[error("Quantity cannot be negative")]
    NegativeQuantity,
    #[error("Minimum stock cannot be negative")]
    NegativeMinimumStock,
    #[error("{field} is too long ({len} chars, max {max})")]
    TooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },
}

/// Raw contents of the product modal form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub category_id: String,
    pub quantity: String,
    pub minimum_stock: String,
    pub location: String,
    pub description: String,
}

impl ProductForm {
    /// Form pre-filled for editing
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            category_id: product.category_id.to_string(),
            quantity: product.quantity.to_string(),
            minimum_stock: product.minimum_stock.to_string(),
            location: product.location.clone().unwrap_or_default(),
            description: product.description.clone().unwrap_or_default(),
        }
    }

    /// Validate and convert into the request body
    pub fn validate(&self) -> Result<ProductPayload, ProductFormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ProductFormError::NameRequired);
        }
        check_length(name, "Name", MAX_NAME_LEN)?;

        let category = self.category_id.trim();
        if category.is_empty() {
            return Err(ProductFormError::CategoryRequired);
        }
        let category_id = category
            .parse::<i64>()
            .map_err(|_| ProductFormError::CategoryRequired)?;

        let quantity = parse_count(&self.quantity, "Quantity")?;
        if quantity < 0 {
            return Err(ProductFormError::NegativeQuantity);
        }
        let minimum_stock = parse_count(&self.minimum_stock, "Minimum stock")?;
        if minimum_stock < 0 {
            return Err(ProductFormError::NegativeMinimumStock);
        }

        let location = optional_text(&self.location);
        if let Some(location) = &location {
            check_length(location, "Location", MAX_LOCATION_LEN)?;
        }
        let description = optional_text(&self.description);
        if let Some(description) = &description {
            check_length(description, "Description", MAX_DESCRIPTION_LEN)?;
        }

        Ok(ProductPayload {
            name: name.to_string(),
            category_id,
            quantity,
            minimum_stock,
            location,
            description,
        })
    }
}

/// Blank counts are read as zero
fn parse_count(value: &str, field: &'static str) -> Result<i64, ProductFormError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(0);
    }
    value
        .parse()
        .map_err(|_| ProductFormError::NotANumber { field })
}

fn optional_text(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn check_length(value: &str, field: &'static str, max: usize) -> Result<(), ProductFormError> {
    let len = value.chars().count();
    if len > max {
        return Err(ProductFormError::TooLong { field, len, max });
    }
    Ok(())
}
