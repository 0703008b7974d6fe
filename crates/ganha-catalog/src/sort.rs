//! Sort dispatcher for catalog views.

use std::cmp::Ordering;

use ganha_core::{Product, SortKey};

use crate::parse::{discount_percent, price_value, CollationKey};

/// Returns `products` ordered by `key`. The input is never modified.
///
/// All orderings are stable: offers with equal sort values keep their
/// manifest order, so sorting twice with the same key changes nothing.
#[must_use]
pub fn sort_products(products: &[Product], key: SortKey) -> Vec<Product> {
    match key {
        SortKey::Featured => products.to_vec(),
        SortKey::Discount => {
            sorted_by(products, |p| discount_percent(&p.discount), |a, b| b.cmp(a))
        }
        SortKey::PriceAsc => sorted_by(
            products,
            |p| price_value(&p.price),
            |a, b| compare_prices(*a, *b, false),
        ),
        SortKey::PriceDesc => sorted_by(
            products,
            |p| price_value(&p.price),
            |a, b| compare_prices(*a, *b, true),
        ),
        SortKey::Alpha => sorted_by(products, |p| CollationKey::new(&p.title), |a, b| a.cmp(b)),
    }
}

/// Extracts each key once, then stable-sorts on it.
fn sorted_by<K, E, C>(products: &[Product], extract: E, compare: C) -> Vec<Product>
where
    E: Fn(&Product) -> K,
    C: Fn(&K, &K) -> Ordering,
{
    let mut keyed: Vec<(K, &Product)> = products.iter().map(|p| (extract(p), p)).collect();
    keyed.sort_by(|(a, _), (b, _)| compare(a, b));
    keyed.into_iter().map(|(_, p)| p.clone()).collect()
}

/// Unparseable prices (infinite) go last in both directions.
fn compare_prices(a: f64, b: f64, descending: bool) -> Ordering {
    match (a.is_finite(), b.is_finite()) {
        (true, true) => {
            let ordering = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
            if descending {
                ordering.reverse()
            } else {
                ordering
            }
        }
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => Ordering::Equal,
    }
}
