//! Card markup and the display-region abstraction it is drawn into.

use ganha_core::{badge_label, Product};

use crate::loader::LoadNotice;

const COPY_ICON: &str = r#"<svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><rect x="9" y="9" width="13" height="13" rx="2" ry="2"></rect><path d="M5 15H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2h9a2 2 0 0 1 2 2v1"></path></svg>"#;

/// A display region that can show a product grid or an empty placeholder.
///
/// Implementors own the actual UI binding; [`render`] only decides which
/// state to show and produces the markup.
pub trait RenderTarget {
    /// Hide the grid and show the "no results" placeholder.
    fn show_empty(&mut self);

    /// Show the grid with `cards_html` as its content and hide the placeholder.
    fn show_results(&mut self, cards_html: String);

    /// Inline notice rendered inside the grid container, above the cards.
    fn show_notice(&mut self, _notice_html: String) {}

    fn set_heading(&mut self, _heading: &str) {}

    fn set_loading(&mut self, _loading: bool) {}
}

/// Draws `products` into `target` in the order given. Never re-sorts.
pub fn render<T: RenderTarget + ?Sized>(products: &[Product], target: &mut T) {
    if products.is_empty() {
        tracing::debug!("no products to render");
        target.show_empty();
        return;
    }

    let cards: String = products.iter().map(render_card).collect();
    tracing::debug!(count = products.len(), "rendered product cards");
    target.show_results(cards);
}

/// Markup for a single offer card.
#[must_use]
pub fn render_card(product: &Product) -> String {
    let coupon = escape_html(&product.coupon);
    format!(
        r#"<article class="card">
  <span class="badge">{badge}</span>
  <img class="product-image" src="{img}" alt="{title}" loading="lazy">
  <div>
    <h3>{title}</h3>
    <p class="tagline">{description}</p>
  </div>
  <div class="price-tag">
    <div class="price-info">
      <span class="discount-price">{price}</span>
      <del class="original-price">{original_price}</del>
    </div>
    <span class="discount-badge">{discount}</span>
  </div>
  <div class="cta">
    <a class="btn primary" href="{link}" target="_blank" rel="nofollow">Ver Oferta Amazon</a>
    <button class="btn secondary btn-copy" type="button" data-copy="{coupon}" aria-label="Copiar cupão">{icon}</button>
  </div>
</article>
"#,
        badge = escape_html(&badge_label(&product.category)),
        img = escape_html(&product.image_url),
        title = escape_html(&product.title),
        description = escape_html(&product.description),
        price = escape_html(&product.price),
        original_price = escape_html(&product.original_price),
        discount = escape_html(&product.discount),
        link = escape_html(&product.link),
        icon = COPY_ICON,
    )
}

/// Markup for a load-failure notice.
#[must_use]
pub fn notice_html(notice: LoadNotice) -> String {
    let hint = match notice {
        LoadNotice::LocalFile => {
            r#"<p class="notice-hint">Nota: O carregamento de JSON local é bloqueado pelos browsers por segurança. Por favor, use um servidor local ou faça deploy no Netlify.</p>"#
        }
        LoadNotice::Generic => "<p>Tente novamente mais tarde.</p>",
    };
    format!(
        r#"<div class="load-notice" role="status"><p>Erro ao carregar ofertas.</p>{hint}</div>"#
    )
}

pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
