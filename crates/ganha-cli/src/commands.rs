//! Command handlers for the CLI.
//!
//! Each command boots one page session, applies the requested sort and
//! category navigation, then prints from the resulting state.

use std::path::Path;

use ganha_catalog::{HtmlPage, ManifestClient, PageSession};
use ganha_core::{category_label, AppConfig, Product, SortKey};
use reqwest::Url;

#[derive(Debug, Clone, Copy)]
pub(crate) struct SessionOptions<'a> {
    pub page: Option<&'a str>,
    pub sort: SortKey,
    pub category: Option<&'a str>,
}

/// Resolve the page address: the CLI flag wins over configuration.
pub(crate) fn resolve_address(config: &AppConfig, page: Option<&str>) -> anyhow::Result<Url> {
    let raw = page.unwrap_or(&config.site_url);
    Url::parse(raw).map_err(|e| anyhow::anyhow!("invalid page address '{raw}': {e}"))
}

/// Boot a session and apply the requested interactions.
///
/// # Errors
///
/// Returns an error if the page address is invalid or the HTTP client cannot
/// be built. Manifest failures are not errors; they render the fallback.
pub(crate) async fn run_session(
    config: &AppConfig,
    options: &SessionOptions<'_>,
) -> anyhow::Result<(PageSession, HtmlPage)> {
    let address = resolve_address(config, options.page)?;
    let client = ManifestClient::new(&config.user_agent, config.request_timeout_secs)
        .map_err(|e| anyhow::anyhow!("failed to build manifest client: {e}"))?;

    let mut session = PageSession::new(address);
    let mut page = HtmlPage::new();
    session.boot(&client, &config.manifest_name, &mut page).await;

    if options.sort != SortKey::Featured {
        session.select_sort(options.sort, &mut page);
    }
    if let Some(category) = options.category {
        session.select_category(Some(category), &mut page);
    }

    Ok((session, page))
}

pub(crate) async fn run_render(
    config: &AppConfig,
    options: &SessionOptions<'_>,
    out: Option<&Path>,
) -> anyhow::Result<()> {
    let (session, page) = run_session(config, options).await?;
    let document = page.document();

    match out {
        Some(path) => {
            std::fs::write(path, &document)
                .map_err(|e| anyhow::anyhow!("failed to write {}: {e}", path.display()))?;
            tracing::info!(path = %path.display(), address = %session.address(), "page written");
        }
        None => print!("{document}"),
    }

    Ok(())
}

pub(crate) async fn run_list(config: &AppConfig, options: &SessionOptions<'_>) -> anyhow::Result<()> {
    let (session, _) = run_session(config, options).await?;
    let products = session.visible_products();

    if products.is_empty() {
        println!("no offers for {}", session.address());
        return Ok(());
    }

    for product in &products {
        println!("{}", format_offer_line(product));
    }
    Ok(())
}

pub(crate) async fn run_categories(
    config: &AppConfig,
    options: &SessionOptions<'_>,
) -> anyhow::Result<()> {
    let (session, _) = run_session(config, options).await?;

    for (slug, count) in session.store().category_counts() {
        println!("{slug}\t{}\t{count}", category_label(&slug));
    }
    Ok(())
}

/// One tab-separated line per offer: title, price, original price, discount, coupon.
pub(crate) fn format_offer_line(product: &Product) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}",
        product.title, product.price, product.original_price, product.discount, product.coupon
    )
}
