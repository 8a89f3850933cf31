//! Inventory list filtering and pagination.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::product::model::ProductRecord;

/// Default number of products per inventory page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Maximum number of products per inventory page.
pub const MAX_PAGE_SIZE: usize = 100;

/// Maximum number of page buttons offered around the current page.
pub const PAGE_WINDOW_LEN: usize = 5;

/// Filters applied to the inventory list. Unset or empty filters match
/// everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryFilter {
    /// Case-insensitive substring of the product name.
    pub search: Option<String>,
    /// Exact category.
    pub category: Option<String>,
    /// Exact brand.
    pub brand: Option<String>,
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl InventoryFilter {
    pub fn matches(&self, product: &ProductRecord) -> bool {
        let name_matches = active(&self.search).is_none_or(|search| {
            product
                .name
                .to_lowercase()
                .contains(&search.to_lowercase())
        });
        let category_matches = active(&self.category).is_none_or(|c| product.category == c);
        let brand_matches = active(&self.brand).is_none_or(|b| product.brand == b);

        name_matches && category_matches && brand_matches
    }
}

/// Products matching `filter`, in inventory order.
pub fn filter_products<'a>(
    products: &'a [ProductRecord],
    filter: &InventoryFilter,
) -> Vec<&'a ProductRecord> {
    products.iter().filter(|p| filter.matches(p)).collect()
}

/// One page of a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number actually served.
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    /// Always at least 1, even for an empty list.
    pub total_pages: usize,
}

/// Slice `items` into the requested 1-based page.
///
/// Out-of-range page numbers are clamped to the first or last page.
/// `per_page` must be between 1 and [`MAX_PAGE_SIZE`].
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Result<Page<T>, CoreError> {
    if !(1..=MAX_PAGE_SIZE).contains(&per_page) {
        return Err(CoreError::Validation(format!(
            "per_page must be between 1 and {MAX_PAGE_SIZE}, got {per_page}"
        )));
    }

    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page).max(1);
    let page = page.clamp(1, total_pages);

    let start = (page - 1) * per_page;
    let end = (start + per_page).min(total_items);

    Ok(Page {
        items: items[start..end].to_vec(),
        page,
        per_page,
        total_items,
        total_pages,
    })
}

/// Page numbers to offer as buttons: up to [`PAGE_WINDOW_LEN`] consecutive
/// pages, centred on `page` where possible.
pub fn page_window(page: usize, total_pages: usize) -> Vec<usize> {
    let total_pages = total_pages.max(1);
    let page = page.clamp(1, total_pages);
    let span = PAGE_WINDOW_LEN - 1;

    let mut start = page.saturating_sub(2).max(1);
    let end = (start + span).min(total_pages);
    if end - start < span {
        start = end.saturating_sub(span).max(1);
    }

    (start..=end).collect()
}
