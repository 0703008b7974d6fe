//! Category slug helpers.
//!
//! Slugs are lowercase and hyphen-separated (`casa-cozinha`). The labels
//! derived here are for display only; filtering always compares raw slugs.

/// Slug meaning "every category".
pub const ALL_CATEGORIES_SLUG: &str = "todos";

/// Heading shown on the category page when no single category is selected.
pub const ALL_CATEGORIES_TITLE: &str = "Todos os Cupões";

/// Returns `true` when `category` selects the whole catalog: absent, or the
/// [`ALL_CATEGORIES_SLUG`] sentinel.
#[must_use]
pub fn is_all_categories(category: Option<&str>) -> bool {
    category.is_none_or(|slug| slug.is_empty() || slug == ALL_CATEGORIES_SLUG)
}

/// Title-cased label for a slug: hyphens become spaces and the first letter
/// of every word is uppercased. `casa-cozinha` becomes `Casa Cozinha`.
#[must_use]
pub fn category_label(slug: &str) -> String {
    let mut label = String::with_capacity(slug.len());
    let mut at_word_start = true;

    for c in slug.chars() {
        if c == '-' || c.is_whitespace() {
            label.push(' ');
            at_word_start = true;
        } else if at_word_start {
            label.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            label.push(c);
        }
    }

    label
}

/// Badge text on a product card: the slug with hyphens as spaces, case kept.
#[must_use]
pub fn badge_label(slug: &str) -> String {
    slug.replace('-', " ")
}

/// Heading for the category page.
#[must_use]
pub fn category_heading(category: Option<&str>) -> String {
    match category {
        Some(slug) if !is_all_categories(Some(slug)) => category_label(slug),
        _ => ALL_CATEGORIES_TITLE.to_string(),
    }
}
