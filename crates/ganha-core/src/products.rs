use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One coupon offer as published in the product manifest.
///
/// Prices and discounts are localized display strings (`"29,90€"`,
/// `"-35% OFF"`). Numeric ordering is always derived from them at sort time,
/// never stored. The manifest's `id` key is accepted but not kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    /// Lowercase hyphenated category slug, e.g. `"casa-cozinha"`.
    #[serde(rename = "cat", deserialize_with = "loose_text")]
    pub category: String,
    #[serde(deserialize_with = "loose_text")]
    pub title: String,
    #[serde(deserialize_with = "loose_text")]
    pub description: String,
    #[serde(deserialize_with = "loose_text")]
    pub price: String,
    #[serde(rename = "oldPrice", deserialize_with = "loose_text")]
    pub original_price: String,
    /// Discount badge text, e.g. `"-50% OFF"`.
    #[serde(deserialize_with = "loose_text")]
    pub discount: String,
    #[serde(rename = "img", deserialize_with = "loose_text")]
    pub image_url: String,
    /// Outbound affiliate link.
    #[serde(deserialize_with = "loose_text")]
    pub link: String,
    #[serde(deserialize_with = "loose_text")]
    pub coupon: String,
    #[serde(rename = "isPopular", deserialize_with = "loose_flag")]
    pub is_popular: bool,
}

// Manifests are hand-edited, so a field of the wrong JSON type degrades to a
// usable value instead of rejecting the whole offer.

/// Text field: numbers and booleans keep their JSON spelling, `null` and
/// containers read as empty.
fn loose_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    })
}

/// Flag field: truthy the way the page script reads it.
fn loose_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::Null => false,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() > 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

/// Ordering applied to a view before rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Manifest order, untouched.
    #[default]
    Featured,
    Discount,
    PriceAsc,
    PriceDesc,
    Alpha,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Featured,
        SortKey::Discount,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::Alpha,
    ];

    /// Wire name used by the sort selector and the CLI.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::Discount => "discount",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::Alpha => "alpha",
        }
    }

    /// Resolves a wire name. Unrecognized keys fall back to [`SortKey::Featured`].
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == key.trim())
            .unwrap_or_default()
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_key(s))
    }
}

/// Which page the catalog is displayed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    /// Landing page: popular offers only.
    Home,
    /// `category.html`: one category, or everything.
    Category,
}

impl ViewKind {
    /// Derives the view from an address path. Any path naming
    /// `category.html` is the category page; everything else is home.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        if path.contains("category.html") {
            ViewKind::Category
        } else {
            ViewKind::Home
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_deserializes_manifest_keys() {
        let json = r#"{
            "id": 7,
            "cat": "casa-cozinha",
            "title": "Air Fryer XL",
            "description": "5,5 litros",
            "price": "79,99€",
            "oldPrice": "129,99€",
            "discount": "-38% OFF",
            "img": "https://img.example/airfryer.jpg",
            "link": "https://amzn.example/airfryer",
            "coupon": "FRY38",
            "isPopular": true
        }"#;
        let product: Product = serde_json::from_str(json).expect("valid product");
        assert_eq!(product.category, "casa-cozinha");
        assert_eq!(product.original_price, "129,99€");
        assert_eq!(product.image_url, "https://img.example/airfryer.jpg");
        assert!(product.is_popular);
    }

    #[test]
    fn product_missing_keys_take_defaults() {
        let product: Product =
            serde_json::from_str(r#"{"title": "Sem categoria"}"#).expect("valid product");
        assert_eq!(product.title, "Sem categoria");
        assert!(product.category.is_empty());
        assert!(!product.is_popular);
    }

    #[test]
    fn product_tolerates_mistyped_fields() {
        let json = r#"{
            "title": "Garrafa",
            "price": 14.99,
            "oldPrice": null,
            "coupon": 2024,
            "isPopular": null
        }"#;
        let product: Product = serde_json::from_str(json).expect("lenient product");
        assert_eq!(product.price, "14.99");
        assert!(product.original_price.is_empty());
        assert_eq!(product.coupon, "2024");
        assert!(!product.is_popular);
    }

    #[test]
    fn popular_flag_reads_truthy_values() {
        let flag = |raw: &str| {
            serde_json::from_str::<Product>(&format!(r#"{{"isPopular": {raw}}}"#))
                .expect("lenient product")
                .is_popular
        };
        assert!(flag("true"));
        assert!(flag("1"));
        assert!(flag(r#""sim""#));
        assert!(!flag("0"));
        assert!(!flag(r#""""#));
        assert!(!flag("false"));
    }

    #[test]
    fn product_serializes_back_to_manifest_keys() {
        let product = Product {
            category: "eletronica".to_string(),
            original_price: "10,00€".to_string(),
            is_popular: true,
            ..Product::default()
        };
        let value = serde_json::to_value(&product).expect("serializable");
        assert_eq!(value["cat"], "eletronica");
        assert_eq!(value["oldPrice"], "10,00€");
        assert_eq!(value["isPopular"], true);
    }

    #[test]
    fn sort_key_wire_names_resolve() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::from_key(key.as_str()), key);
        }
    }

    #[test]
    fn sort_key_unknown_is_featured() {
        assert_eq!(SortKey::from_key("cheapest"), SortKey::Featured);
        assert_eq!(SortKey::from_key(""), SortKey::Featured);
        assert_eq!("nope".parse::<SortKey>().unwrap(), SortKey::Featured);
    }

    #[test]
    fn view_kind_from_path() {
        assert_eq!(ViewKind::from_path("/category.html"), ViewKind::Category);
        assert_eq!(ViewKind::from_path("/site/category.html"), ViewKind::Category);
        assert_eq!(ViewKind::from_path("/index.html"), ViewKind::Home);
        assert_eq!(ViewKind::from_path("/"), ViewKind::Home);
    }
}
