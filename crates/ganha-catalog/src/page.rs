//! Headless [`RenderTarget`] that assembles a complete HTML document.

use chrono::Datelike;

use crate::render::{escape_html, RenderTarget};

const LOADING_TEXT: &str = "A carregar ofertas...";
const EMPTY_TEXT: &str = "Nenhuma oferta encontrada nesta categoria.";

/// In-memory page state: grid, placeholder, heading and load notice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlPage {
    heading: Option<String>,
    notice: Option<String>,
    cards: String,
    grid_visible: bool,
    placeholder_visible: bool,
    loading: bool,
}

impl HtmlPage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn heading(&self) -> Option<&str> {
        self.heading.as_deref()
    }

    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    #[must_use]
    pub fn cards(&self) -> &str {
        &self.cards
    }

    #[must_use]
    pub fn is_grid_visible(&self) -> bool {
        self.grid_visible
    }

    #[must_use]
    pub fn is_placeholder_visible(&self) -> bool {
        self.placeholder_visible || self.loading
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Number of cards currently in the grid.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.matches("<article class=\"card\">").count()
    }

    /// Full document with the current year in the footer.
    #[must_use]
    pub fn document(&self) -> String {
        self.document_for_year(chrono::Local::now().year())
    }

    #[must_use]
    pub fn document_for_year(&self, year: i32) -> String {
        let heading = self
            .heading
            .as_deref()
            .map(|h| format!("<h1 id=\"category-title\">{}</h1>\n", escape_html(h)))
            .unwrap_or_default();
        let grid_display = if self.grid_visible || self.notice.is_some() {
            "grid"
        } else {
            "none"
        };
        let placeholder_display = if self.is_placeholder_visible() {
            "block"
        } else {
            "none"
        };
        let placeholder_text = if self.loading { LOADING_TEXT } else { EMPTY_TEXT };
        let notice = self.notice.as_deref().unwrap_or_default();

        format!(
            r#"<!DOCTYPE html>
<html lang="pt">
<head>
<meta charset="utf-8">
<title>Regista &amp; Ganha</title>
</head>
<body>
<main>
{heading}<section id="grid" class="grid" style="display: {grid_display}">
{notice}{cards}</section>
<p id="no-products" style="display: {placeholder_display}">{placeholder_text}</p>
</main>
<footer>&copy; <span id="year">{year}</span> Regista &amp; Ganha</footer>
</body>
</html>
"#,
            cards = self.cards,
        )
    }
}

impl RenderTarget for HtmlPage {
    fn show_empty(&mut self) {
        self.grid_visible = false;
        self.placeholder_visible = true;
        self.cards.clear();
    }

    fn show_results(&mut self, cards_html: String) {
        self.grid_visible = true;
        self.placeholder_visible = false;
        self.cards = cards_html;
    }

    fn show_notice(&mut self, notice_html: String) {
        self.notice = Some(notice_html);
    }

    fn set_heading(&mut self, heading: &str) {
        self.heading = Some(heading.to_owned());
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }
}
