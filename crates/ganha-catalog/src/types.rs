//! Accepted shapes of the product manifest.
//!
//! Two layouts are in the wild:
//!
//! - a bare JSON array of products (older sites),
//! - an object whose `products` key holds that array.
//!
//! Once the body has one of these shapes, the product array must decode:
//! an element that is not an object fails the whole manifest. Anything else
//! that is still valid JSON (`{}`, `{"products": null}`, a string) is read as
//! an empty catalog rather than an error.

use ganha_core::Product;
use serde_json::Value;

/// Parses a manifest body into its product list.
///
/// # Errors
///
/// Returns the underlying [`serde_json::Error`] when `body` is not JSON, or
/// when its product array holds something other than product objects.
pub fn parse_manifest(body: &str) -> Result<Vec<Product>, serde_json::Error> {
    let document: Value = serde_json::from_str(body)?;
    match document {
        list @ Value::Array(_) => serde_json::from_value(list),
        Value::Object(mut fields) => match fields.remove("products") {
            Some(list @ Value::Array(_)) => serde_json::from_value(list),
            _ => {
                tracing::debug!("manifest object has no product list");
                Ok(Vec::new())
            }
        },
        other => {
            tracing::debug!(kind = json_kind(&other), "manifest has no product list");
            Ok(Vec::new())
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
