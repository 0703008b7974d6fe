//! View selection and category address handling.

use ganha_core::{is_all_categories, Product, ViewKind, ALL_CATEGORIES_SLUG};
use reqwest::Url;

/// Query parameter carrying the selected category slug.
pub const CATEGORY_PARAM: &str = "id";

/// Why a category filter is being applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterTrigger {
    /// First render after the catalog loads. The address already holds the
    /// category, so it is left alone.
    InitialLoad,
    /// Same view drawn again, e.g. after a sort change. The category did not
    /// move, so neither does the address.
    Redraw,
    /// In-page navigation. The address is rewritten so the view can be shared.
    Navigation,
}

impl FilterTrigger {
    #[must_use]
    pub fn syncs_address(self) -> bool {
        matches!(self, FilterTrigger::Navigation)
    }
}

/// Products shown for a view, in catalog order.
///
/// - [`ViewKind::Home`]: popular offers only; `category` is ignored.
/// - [`ViewKind::Category`]: everything when `category` is absent or `todos`,
///   otherwise offers whose slug equals `category` exactly.
#[must_use]
pub fn select_view(catalog: &[Product], kind: ViewKind, category: Option<&str>) -> Vec<Product> {
    match kind {
        ViewKind::Home => catalog.iter().filter(|p| p.is_popular).cloned().collect(),
        ViewKind::Category => match category {
            Some(slug) if !is_all_categories(Some(slug)) => catalog
                .iter()
                .filter(|p| p.category == slug)
                .cloned()
                .collect(),
            _ => catalog.to_vec(),
        },
    }
}

/// Category slug from the address's `id` query parameter, if any.
#[must_use]
pub fn category_from_address(address: &Url) -> Option<String> {
    address
        .query_pairs()
        .find(|(key, _)| key == CATEGORY_PARAM)
        .map(|(_, value)| value.into_owned())
}

/// Returns `address` with its `id` parameter set to `category`.
///
/// Other parameters keep their order; `id` is appended when missing.
/// Clearing the selection writes the `todos` sentinel.
#[must_use]
pub fn sync_category_address(address: &Url, category: Option<&str>) -> Url {
    let slug = category
        .filter(|s| !s.is_empty())
        .unwrap_or(ALL_CATEGORIES_SLUG);

    let mut found = false;
    let pairs: Vec<(String, String)> = address
        .query_pairs()
        .map(|(key, value)| {
            if key == CATEGORY_PARAM {
                found = true;
                (key.into_owned(), slug.to_owned())
            } else {
                (key.into_owned(), value.into_owned())
            }
        })
        .collect();

    let mut synced = address.clone();
    {
        let mut query = synced.query_pairs_mut();
        query.clear();
        for (key, value) in &pairs {
            query.append_pair(key, value);
        }
        if !found {
            query.append_pair(CATEGORY_PARAM, slug);
        }
    }
    synced
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
