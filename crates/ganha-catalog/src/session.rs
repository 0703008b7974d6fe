//! A page session: one address, one catalog, one render target.
//!
//! Drives the load → filter → sort → render pipeline and owns all mutation
//! of the view state. Everything after the manifest fetch is synchronous.

use ganha_core::{category_heading, Product, SortKey, ViewKind};
use reqwest::Url;

use crate::client::ManifestClient;
use crate::filter::{category_from_address, select_view, sync_category_address, FilterTrigger};
use crate::loader::{load_catalog, CatalogSource};
use crate::render::{notice_html, render, RenderTarget};
use crate::sort::sort_products;
use crate::store::CatalogStore;

pub struct PageSession {
    address: Url,
    view_kind: ViewKind,
    store: CatalogStore,
}

impl PageSession {
    /// Starts a session for `address`. The view kind comes from the path and
    /// the category from the `id` query parameter.
    #[must_use]
    pub fn new(address: Url) -> Self {
        let view_kind = ViewKind::from_path(address.path());
        let mut store = CatalogStore::new();
        store.set_category(category_from_address(&address).as_deref());
        Self {
            address,
            view_kind,
            store,
        }
    }

    #[must_use]
    pub fn address(&self) -> &Url {
        &self.address
    }

    #[must_use]
    pub fn view_kind(&self) -> ViewKind {
        self.view_kind
    }

    #[must_use]
    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    /// Loads the catalog and draws the first view.
    ///
    /// The loading indicator is raised for the duration of the fetch and
    /// cleared afterwards whichever way the load went. Failures leave a
    /// notice in the grid and render the fallback catalog.
    pub async fn boot<T: RenderTarget + ?Sized>(
        &mut self,
        client: &ManifestClient,
        manifest_name: &str,
        target: &mut T,
    ) -> CatalogSource {
        target.set_loading(true);

        let outcome = load_catalog(client, &self.address, manifest_name).await;
        self.store.replace(outcome.products);
        if let Some(notice) = outcome.notice {
            target.show_notice(notice_html(notice));
        }

        self.refresh(target, FilterTrigger::InitialLoad);
        target.set_loading(false);

        tracing::info!(
            source = ?outcome.source,
            view = ?self.view_kind,
            category = ?self.store.view().category,
            "page rendered"
        );
        outcome.source
    }

    /// In-page category navigation: filters, rewrites the address and redraws.
    pub fn select_category<T: RenderTarget + ?Sized>(
        &mut self,
        category: Option<&str>,
        target: &mut T,
    ) {
        self.store.set_category(category);
        self.refresh(target, FilterTrigger::Navigation);
    }

    /// Changes the sort order and redraws.
    pub fn select_sort<T: RenderTarget + ?Sized>(&mut self, sort: SortKey, target: &mut T) {
        self.store.set_sort(sort);
        self.refresh(target, FilterTrigger::Redraw);
    }

    /// The products currently on screen, in display order.
    #[must_use]
    pub fn visible_products(&self) -> Vec<Product> {
        let view = self.store.view();
        let selected = select_view(
            self.store.products(),
            self.view_kind,
            view.category.as_deref(),
        );
        sort_products(&selected, view.sort)
    }

    fn refresh<T: RenderTarget + ?Sized>(&mut self, target: &mut T, trigger: FilterTrigger) {
        let category = self.store.view().category.clone();

        if self.view_kind == ViewKind::Category {
            target.set_heading(&category_heading(category.as_deref()));
            if trigger.syncs_address() {
                self.address = sync_category_address(&self.address, category.as_deref());
                tracing::debug!(address = %self.address, "category written to address");
            }
        }

        render(&self.visible_products(), target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::HtmlPage;

    fn session(address: &str, products: Vec<Product>) -> PageSession {
        let mut session = PageSession::new(Url::parse(address).expect("valid test URL"));
        session.store.replace(products);
        session
    }

    fn offer(title: &str, category: &str, price: &str, is_popular: bool) -> Product {
        Product {
            category: category.to_string(),
            title: title.to_string(),
            price: price.to_string(),
            is_popular,
            ..Product::default()
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            offer("Forno", "eletrodomesticos", "249,00€", true),
            offer("Colunas", "eletronica", "59,00€", true),
            offer("Batedeira", "eletrodomesticos", "39,00€", false),
        ]
    }

    fn titles(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn new_reads_view_and_category_from_address() {
        let s = PageSession::new(
            Url::parse("https://regista.example/category.html?id=eletronica").unwrap(),
        );
        assert_eq!(s.view_kind(), ViewKind::Category);
        assert_eq!(s.store().view().category.as_deref(), Some("eletronica"));
    }

    #[test]
    fn new_treats_todos_as_all() {
        let s = PageSession::new(
            Url::parse("https://regista.example/category.html?id=todos").unwrap(),
        );
        assert!(s.store().view().category.is_none());
    }

    #[test]
    fn home_shows_popular_only() {
        let s = session("https://regista.example/", catalog());
        assert_eq!(titles(&s.visible_products()), vec!["Forno", "Colunas"]);
    }

    #[test]
    fn sort_applies_after_filter() {
        let mut s = session(
            "https://regista.example/category.html?id=eletrodomesticos",
            catalog(),
        );
        let mut page = HtmlPage::new();
        s.select_sort(SortKey::PriceAsc, &mut page);
        assert_eq!(titles(&s.visible_products()), vec!["Batedeira", "Forno"]);
        assert_eq!(page.card_count(), 2);
    }

    #[test]
    fn sort_does_not_touch_address() {
        let mut s = session("https://regista.example/category.html", catalog());
        let mut page = HtmlPage::new();
        s.select_sort(SortKey::Alpha, &mut page);
        assert_eq!(s.address().as_str(), "https://regista.example/category.html");
    }

    #[test]
    fn navigation_rewrites_address_and_heading() {
        let mut s = session("https://regista.example/category.html", catalog());
        let mut page = HtmlPage::new();
        s.select_category(Some("eletronica"), &mut page);
        assert_eq!(
            s.address().as_str(),
            "https://regista.example/category.html?id=eletronica"
        );
        assert_eq!(page.heading(), Some("Eletronica"));
        assert_eq!(page.card_count(), 1);
    }

    #[test]
    fn navigation_to_unknown_category_shows_empty() {
        let mut s = session("https://regista.example/category.html", catalog());
        let mut page = HtmlPage::new();
        s.select_category(Some("jardim"), &mut page);
        assert!(page.is_placeholder_visible());
        assert!(!page.is_grid_visible());
    }

    #[test]
    fn navigation_on_home_page_leaves_address_alone() {
        let mut s = session("https://regista.example/index.html", catalog());
        let mut page = HtmlPage::new();
        s.select_category(Some("eletronica"), &mut page);
        assert_eq!(s.address().as_str(), "https://regista.example/index.html");
        assert!(page.heading().is_none());
    }
}
