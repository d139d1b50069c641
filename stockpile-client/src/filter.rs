//! Filtering and pagination over the in-memory product list

use shared::{Product, ProductStatus};

/// Current values of the search box and the two select filters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Free text, matched case-insensitively against name or location
    pub search: String,
    /// Exact category id, `None` for all categories
    pub category_id: Option<i64>,
    /// Derived status, `None` for any status
    pub status: Option<ProductStatus>,
}

impl ProductFilter {
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.category_id.is_none() && self.status.is_none()
    }

    /// Whether a product passes all three predicates
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_search(product)
            && self.category_id.is_none_or(|id| product.category_id == id)
            && self.status.is_none_or(|status| product.status() == status)
    }

    fn matches_search(&self, product: &Product) -> bool {
        let term = self.search.to_lowercase();
        product.name.to_lowercase().contains(&term)
            || product
                .location
                .as_deref()
                .is_some_and(|location| location.to_lowercase().contains(&term))
    }

    /// Products passing the filter, in list order
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        products.iter().filter(|p| self.matches(p)).cloned().collect()
    }
}

/// Number of pages needed for `total` items
pub fn page_count(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        0
    } else {
        total.div_ceil(per_page)
    }
}

/// Items shown on a 1-based page; out-of-range pages are empty
pub fn page_slice<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(per_page);
    if page == 0 || start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}

/// One element of the pagination bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    First { disabled: bool },
    Prev { target: usize, disabled: bool },
    Page { number: usize, active: bool },
    Ellipsis,
    Next { target: usize, disabled: bool },
    Last { target: usize, disabled: bool },
}

/// Pagination bar for `current` out of `total_pages`.
///
/// Empty when there is a single page or none. Pages 1 and `total_pages`
/// are always listed, as are the two neighbours on either side of the
/// current page; a gap right outside that window becomes an ellipsis.
pub fn page_controls(current: usize, total_pages: usize) -> Vec<PageControl> {
    if total_pages <= 1 {
        return Vec::new();
    }
    let on_first = current <= 1;
    let on_last = current >= total_pages;
    let mut controls = vec![
        PageControl::First { disabled: on_first },
        PageControl::Prev {
            target: current.saturating_sub(1).max(1),
            disabled: on_first,
        },
    ];
    for number in 1..=total_pages {
        let in_window = number + 2 >= current && number <= current + 2;
        if number == 1 || number == total_pages || in_window {
            controls.push(PageControl::Page {
                number,
                active: number == current,
            });
        } else if number + 3 == current || number == current + 3 {
            controls.push(PageControl::Ellipsis);
        }
    }
    controls.push(PageControl::Next {
        target: (current + 1).min(total_pages),
        disabled: on_last,
    });
    controls.push(PageControl::Last {
        target: total_pages,
        disabled: on_last,
    });
    controls
}
