//! Manifest loading with fallback to the embedded catalog.
//!
//! Every failure (transport error, non-2xx status, unparseable body, or
//! a manifest with no products) ends in the same place: the embedded
//! fallback list. Nothing is retried.

use ganha_core::Product;
use reqwest::Url;

use crate::client::{is_local_page, manifest_url, ManifestClient};
use crate::error::CatalogError;
use crate::fallback::fallback_products;

/// Where the loaded products came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    Remote,
    Fallback(FallbackReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// The manifest could not be fetched or parsed.
    LoadFailed,
    /// The manifest parsed but held no products.
    EmptyManifest,
}

/// User-facing notice shown when the manifest could not be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadNotice {
    /// The page was opened from disk, where browsers refuse local JSON.
    LocalFile,
    Generic,
}

impl LoadNotice {
    #[must_use]
    pub fn for_page(page: &Url) -> Self {
        if is_local_page(page) {
            LoadNotice::LocalFile
        } else {
            LoadNotice::Generic
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadOutcome {
    pub products: Vec<Product>,
    pub source: CatalogSource,
    pub notice: Option<LoadNotice>,
}

/// Loads the catalog for the page at `page`.
///
/// The manifest is `manifest_name` resolved against `page`. Always returns
/// a usable, non-empty product list.
pub async fn load_catalog(client: &ManifestClient, page: &Url, manifest_name: &str) -> LoadOutcome {
    let fetched = match manifest_url(page, manifest_name) {
        Ok(url) => client.fetch_manifest(&url).await,
        Err(e) => Err(e),
    };

    let outcome = match fetched {
        Ok(products) => {
            tracing::info!(count = products.len(), "loaded product manifest");
            LoadOutcome {
                products,
                source: CatalogSource::Remote,
                notice: None,
            }
        }
        Err(err) => fallback_after_error(page, &err),
    };

    substitute_if_empty(outcome)
}

fn fallback_after_error(page: &Url, err: &CatalogError) -> LoadOutcome {
    let notice = LoadNotice::for_page(page);
    tracing::warn!(
        error = %err,
        ?notice,
        "product manifest unavailable, using embedded fallback catalog"
    );
    LoadOutcome {
        products: fallback_products(),
        source: CatalogSource::Fallback(FallbackReason::LoadFailed),
        notice: Some(notice),
    }
}

/// Swaps an empty remote catalog for the fallback list.
///
/// Outcomes that already came from the fallback are returned as they are,
/// so substitution happens at most once per load.
#[must_use]
pub fn substitute_if_empty(outcome: LoadOutcome) -> LoadOutcome {
    if !outcome.products.is_empty() || outcome.source != CatalogSource::Remote {
        return outcome;
    }

    tracing::warn!("product manifest is empty, using embedded fallback catalog");
    LoadOutcome {
        products: fallback_products(),
        source: CatalogSource::Fallback(FallbackReason::EmptyManifest),
        notice: outcome.notice,
    }
}
