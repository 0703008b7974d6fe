//! End-to-end tests for `PageSession` against a local `wiremock` server.

use reqwest::Url;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ganha_catalog::{
    fallback_products, CatalogSource, FallbackReason, HtmlPage, ManifestClient, PageSession,
};
use ganha_core::{SortKey, ViewKind};

fn test_client() -> ManifestClient {
    ManifestClient::new("ganha-test/0.1", Some(5)).expect("failed to build test ManifestClient")
}

fn offer(title: &str, cat: &str, price: &str, discount: &str, popular: bool) -> serde_json::Value {
    json!({
        "cat": cat,
        "title": title,
        "description": "",
        "price": price,
        "oldPrice": "",
        "discount": discount,
        "img": "",
        "link": "https://amzn.example/x",
        "coupon": "X",
        "isPopular": popular
    })
}

async fn server_with_catalog() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "products": [
                offer("Micro-ondas", "eletrodomesticos", "99,00€", "-20% OFF", true),
                offer("Portátil", "eletronica", "649,00€", "-15% OFF", true),
                offer("Torradeira", "eletrodomesticos", "24,90€", "-50% OFF", false),
                offer("Auscultadores", "eletronica", "39,90€", "-35% OFF", false)
            ]
        })))
        .mount(&server)
        .await;
    server
}

fn titles(session: &PageSession) -> Vec<String> {
    session
        .visible_products()
        .into_iter()
        .map(|p| p.title)
        .collect()
}

#[tokio::test]
async fn home_page_renders_popular_offers() {
    let server = server_with_catalog().await;
    let address = Url::parse(&format!("{}/index.html", server.uri())).unwrap();
    let mut session = PageSession::new(address);
    let mut page = HtmlPage::new();

    let source = session.boot(&test_client(), "products.json", &mut page).await;

    assert_eq!(source, CatalogSource::Remote);
    assert_eq!(session.view_kind(), ViewKind::Home);
    assert_eq!(titles(&session), vec!["Micro-ondas", "Portátil"]);
    assert_eq!(page.card_count(), 2);
    assert!(!page.is_loading());
    assert!(page.heading().is_none());
}

#[tokio::test]
async fn category_page_filters_by_address_and_keeps_it() {
    let server = server_with_catalog().await;
    let address =
        Url::parse(&format!("{}/category.html?id=eletrodomesticos", server.uri())).unwrap();
    let mut session = PageSession::new(address.clone());
    let mut page = HtmlPage::new();

    session.boot(&test_client(), "products.json", &mut page).await;

    assert_eq!(titles(&session), vec!["Micro-ondas", "Torradeira"]);
    assert_eq!(page.heading(), Some("Eletrodomesticos"));
    assert_eq!(session.address(), &address);
}

#[tokio::test]
async fn category_page_sorts_and_navigates() {
    let server = server_with_catalog().await;
    let address = Url::parse(&format!("{}/category.html", server.uri())).unwrap();
    let mut session = PageSession::new(address);
    let mut page = HtmlPage::new();

    session.boot(&test_client(), "products.json", &mut page).await;
    assert_eq!(page.heading(), Some("Todos os Cupões"));
    assert_eq!(page.card_count(), 4);

    session.select_sort(SortKey::Discount, &mut page);
    assert_eq!(
        titles(&session),
        vec!["Torradeira", "Auscultadores", "Micro-ondas", "Portátil"]
    );

    session.select_category(Some("eletronica"), &mut page);
    assert_eq!(titles(&session), vec!["Auscultadores", "Portátil"]);
    assert_eq!(session.address().query(), Some("id=eletronica"));
    assert_eq!(page.card_count(), 2);
}

#[tokio::test]
async fn failed_load_renders_fallback_with_notice() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products.json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    let address = Url::parse(&format!("{}/category.html", server.uri())).unwrap();
    let mut session = PageSession::new(address);
    let mut page = HtmlPage::new();

    let source = session.boot(&test_client(), "products.json", &mut page).await;

    assert_eq!(source, CatalogSource::Fallback(FallbackReason::LoadFailed));
    assert_eq!(session.store().products(), fallback_products().as_slice());
    assert_eq!(page.card_count(), fallback_products().len());
    let notice = page.notice().expect("notice shown");
    assert!(notice.contains("Tente novamente mais tarde."));
    assert!(!page.is_loading());
}

#[tokio::test]
async fn local_page_renders_fallback_with_local_hint() {
    let address = Url::parse("file:///home/ana/site/index.html").unwrap();
    let mut session = PageSession::new(address);
    let mut page = HtmlPage::new();

    session.boot(&test_client(), "products.json", &mut page).await;

    let notice = page.notice().expect("notice shown");
    assert!(notice.contains("servidor local"));
    let popular = fallback_products().iter().filter(|p| p.is_popular).count();
    assert_eq!(page.card_count(), popular);
}
