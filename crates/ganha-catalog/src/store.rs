//! In-memory catalog and the view state the page mutates.

use ganha_core::{is_all_categories, Product, SortKey};

/// Sort and category currently selected on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub sort: SortKey,
    /// `None` selects every category.
    pub category: Option<String>,
}

/// Sole owner of the loaded product collection.
///
/// The collection is only ever replaced wholesale; readers get a shared
/// slice and derive their own copies from it.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
    view: ViewState,
}

impl CatalogStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole collection. Nothing is merged.
    pub fn replace(&mut self, products: Vec<Product>) {
        tracing::debug!(count = products.len(), "catalog replaced");
        self.products = products;
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.view.sort = sort;
    }

    /// Selects a category. The `todos` sentinel and empty slugs clear the
    /// selection.
    pub fn set_category(&mut self, category: Option<&str>) {
        self.view.category = if is_all_categories(category) {
            None
        } else {
            category.map(str::to_owned)
        };
    }

    /// Distinct category slugs with their product counts, in first-seen order.
    #[must_use]
    pub fn category_counts(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for product in &self.products {
            let position = counts
                .iter()
                .position(|(slug, _)| *slug == product.category);
            match position {
                Some(idx) => counts[idx].1 += 1,
                None => counts.push((product.category.clone(), 1)),
            }
        }
        counts
    }
}
