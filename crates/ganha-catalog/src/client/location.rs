//! Resolving the manifest location from the page address.

use reqwest::Url;

use crate::error::CatalogError;

/// Resolves `manifest_name` relative to the page address, the way a
/// relative `fetch` would.
///
/// `https://site.pt/category.html?id=casa` + `products.json` gives
/// `https://site.pt/products.json`.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidUrl`] if the join fails, e.g. when the page
/// address cannot be a base.
pub fn manifest_url(page: &Url, manifest_name: &str) -> Result<Url, CatalogError> {
    page.join(manifest_name)
        .map_err(|e| CatalogError::InvalidUrl {
            url: format!("{page} + {manifest_name}"),
            reason: e.to_string(),
        })
}

/// Returns `true` when the page was opened straight from disk.
#[must_use]
pub fn is_local_page(page: &Url) -> bool {
    page.scheme() == "file"
}
