//! Product catalog types.
//!
//! These are both the domain types and the wire types: field names follow the
//! established JSON surface of the storefront API (camelCase).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ProductId;

/// A perfume in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Opaque store-assigned ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// House or brand name.
    pub brand: String,
    /// Current price. Invariant: >= 0 (enforced at the store).
    pub price: Decimal,
    /// Pre-discount price, when the product is on sale. Typically >=
    /// `price`, but not enforced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Decimal>,
    /// Marketing description.
    pub description: String,
    /// Catalog category (e.g. "floral", "woody"). Matched case-sensitively.
    pub category: String,
    /// Image URI or filename.
    pub image: String,
    /// Average review rating.
    #[serde(default = "default_rating")]
    pub rating: Decimal,
    /// Review count.
    #[serde(default)]
    pub reviews: i32,
    /// Whether the product can currently be ordered.
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    /// Bottle size.
    #[serde(default = "default_size")]
    pub size: String,
    /// Fragrance pyramid.
    #[serde(default)]
    pub notes: FragranceNotes,
    /// Shown on the featured shelf.
    #[serde(default)]
    pub featured: bool,
}

/// The fragrance pyramid: ordered note sequences from first impression to
/// dry-down.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FragranceNotes {
    pub top: Vec<String>,
    pub heart: Vec<String>,
    pub base: Vec<String>,
}

/// A partial update to a product.
///
/// Absent fields are left unchanged; present fields overwrite. There is no
/// field-level validation on update - callers may overwrite required fields
/// with empty values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub price: Option<Decimal>,
    pub original_price: Option<Decimal>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub rating: Option<Decimal>,
    pub reviews: Option<i32>,
    pub in_stock: Option<bool>,
    pub size: Option<String>,
    pub notes: Option<FragranceNotes>,
    pub featured: Option<bool>,
}

fn default_rating() -> Decimal {
    // 4.5
    Decimal::new(45, 1)
}

const fn default_in_stock() -> bool {
    true
}

fn default_size() -> String {
    "100ml".to_owned()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_applies_defaults() {
        let json = r#"{
            "id": "5f6e4a0a-58a4-4c3f-9d7a-111111111111",
            "name": "Nuit de Velours",
            "brand": "Maison Ambre",
            "price": "129.00",
            "description": "Dark rose over smoked oud.",
            "category": "oriental",
            "image": "nuit-de-velours.jpg"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.rating, Decimal::new(45, 1));
        assert_eq!(product.reviews, 0);
        assert!(product.in_stock);
        assert_eq!(product.size, "100ml");
        assert!(product.notes.top.is_empty());
        assert!(!product.featured);
        assert!(product.original_price.is_none());
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let json = r#"{
            "id": "5f6e4a0a-58a4-4c3f-9d7a-111111111111",
            "name": "Nuit de Velours",
            "brand": "Maison Ambre",
            "price": "129.00",
            "originalPrice": "149.00",
            "description": "Dark rose over smoked oud.",
            "category": "oriental",
            "image": "nuit-de-velours.jpg"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        let out = serde_json::to_value(&product).unwrap();
        assert!(out.get("inStock").is_some());
        assert!(out.get("originalPrice").is_some());
        assert!(out.get("original_price").is_none());
    }

    #[test]
    fn test_patch_tolerates_partial_body() {
        let patch: ProductPatch = serde_json::from_str(r#"{"price": "89.50"}"#).unwrap();
        assert_eq!(patch.price, Some(Decimal::new(8950, 2)));
        assert!(patch.name.is_none());
        assert!(patch.notes.is_none());
    }
}
