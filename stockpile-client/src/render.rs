//! HTML rendering of the inventory screen
//!
//! Every user-supplied string goes through [`escape_html`]. Interactive
//! elements carry `data-action` / `data-value` attributes that decode into
//! [`PageEvent`](crate::page::PageEvent)s instead of inline handlers.

use std::fmt::Write;

use shared::{Category, InventoryStats, Product, ProductStatus};

use crate::filter::PageControl;

/// Escape `& < > " '` for HTML text and attribute values
pub fn escape_html(unsafe_text: &str) -> String {
    let mut out = String::with_capacity(unsafe_text.len());
    for c in unsafe_text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Group digits by thousands: `1234567` -> `1,234,567`
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Which row actions the session may use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowActions {
    pub can_edit: bool,
    pub can_delete: bool,
}

impl RowActions {
    /// Whether the actions column header is shown
    pub fn any(&self) -> bool {
        self.can_edit || self.can_delete
    }
}

pub fn status_badge(status: ProductStatus) -> String {
    format!(
        r#"<span class="status-badge {}">{}</span>"#,
        status.css_class(),
        status.label()
    )
}

/// View is always offered; edit and delete follow the session's capabilities
pub fn action_buttons(product: &Product, actions: RowActions) -> String {
    let mut html = format!(
        r#"<button class="btn btn-icon" title="View details" data-action="view" data-value="{}">👁️</button>"#,
        product.id
    );
    if actions.can_edit {
        let _ = write!(
            html,
            r#"<button class="btn btn-icon" title="Edit" data-action="edit" data-value="{}">✏️</button>"#,
            product.id
        );
    }
    if actions.can_delete {
        let _ = write!(
            html,
            r#"<button class="btn btn-icon" title="Delete" data-action="delete" data-value="{}">🗑️</button>"#,
            product.id
        );
    }
    html
}

pub fn product_row(product: &Product, actions: RowActions) -> String {
    format!(
        r#"<tr><td>{id}</td><td>{name}</td><td>{category}</td><td>{quantity}</td><td>{badge}</td><td>{location}</td><td class="actions-cell">{buttons}</td></tr>"#,
        id = product.id,
        name = escape_html(&product.name),
        category = escape_html(product.category_name.as_deref().unwrap_or("Uncategorized")),
        quantity = product.quantity,
        badge = status_badge(product.status()),
        location = escape_html(product.location.as_deref().unwrap_or("-")),
        buttons = action_buttons(product, actions),
    )
}

/// Table body for one page of products
pub fn product_rows(products: &[Product], actions: RowActions) -> String {
    products.iter().map(|p| product_row(p, actions)).collect()
}

/// `<option>` list led by a placeholder with an empty value
pub fn category_options(categories: &[Category], placeholder: &str) -> String {
    let mut html = format!(r#"<option value="">{}</option>"#, escape_html(placeholder));
    for category in categories {
        let _ = write!(
            html,
            r#"<option value="{}">{}</option>"#,
            category.id,
            escape_html(&category.name)
        );
    }
    html
}

pub fn stats_panel(stats: &InventoryStats) -> String {
    format!(
        r#"<div class="stats"><span id="totalProducts">{}</span><span id="lowStock">{}</span><span id="categories">{}</span></div>"#,
        format_count(stats.total_products),
        format_count(stats.low_stock),
        format_count(stats.categories),
    )
}

/// Read-only detail block of the view modal
pub fn product_details(product: &Product) -> String {
    let status = product.status();
    format!(
        concat!(
            r#"<div class="product-details">"#,
            "<p><strong>Name:</strong> {name}</p>",
            "<p><strong>Category:</strong> {category}</p>",
            "<p><strong>Quantity:</strong> {quantity}</p>",
            "<p><strong>Minimum stock:</strong> {minimum}</p>",
            "<p><strong>Location:</strong> {location}</p>",
            "<p><strong>Description:</strong> {description}</p>",
            r#"<p><strong>Status:</strong> <span class="badge badge-{class}">{label}</span></p>"#,
            "</div>"
        ),
        name = escape_html(&product.name),
        category = escape_html(product.category_name.as_deref().unwrap_or("-")),
        quantity = product.quantity,
        minimum = product.minimum_stock,
        location = escape_html(product.location.as_deref().unwrap_or("-")),
        description = escape_html(product.description.as_deref().unwrap_or("-")),
        class = status.css_class(),
        label = status.label(),
    )
}

fn page_button(label: &str, target: usize, disabled: bool, active: bool) -> String {
    format!(
        r#"<button data-action="page" data-value="{target}"{class}{disabled}>{label}</button>"#,
        class = if active { r#" class="active""# } else { "" },
        disabled = if disabled { " disabled" } else { "" },
    )
}

/// Pagination bar markup; empty when there is nothing to page through
pub fn pagination(controls: &[PageControl]) -> String {
    controls
        .iter()
        .map(|control| match *control {
            PageControl::First { disabled } => page_button("First", 1, disabled, false),
            PageControl::Prev { target, disabled } => page_button("Previous", target, disabled, false),
            PageControl::Page { number, active } => {
                page_button(&number.to_string(), number, false, active)
            }
            PageControl::Ellipsis => "<span>...</span>".to_string(),
            PageControl::Next { target, disabled } => page_button("Next", target, disabled, false),
            PageControl::Last { target, disabled } => page_button("Last", target, disabled, false),
        })
        .collect()
}
