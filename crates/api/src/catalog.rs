//! Catalog search.
//!
//! Search is an explicit case-folded substring predicate evaluated in the
//! service layer - no pattern compilation, no tokenization, no relevance
//! ranking. The catalog is small enough that scanning it per request is the
//! simplest correct thing.

use flacon_core::Product;

/// Whether a product matches a free-text query.
///
/// Case-insensitive substring match over name, brand, description, and
/// category. The empty query matches everything.
#[must_use]
pub fn matches_query(product: &Product, query: &str) -> bool {
    let needle = query.to_lowercase();

    [
        &product.name,
        &product.brand,
        &product.description,
        &product.category,
    ]
    .into_iter()
    .any(|field| field.to_lowercase().contains(&needle))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use flacon_core::{FragranceNotes, ProductId};

    use super::*;

    fn product() -> Product {
        Product {
            id: ProductId::generate(),
            name: "Nuit de Velours".to_owned(),
            brand: "Maison Ambre".to_owned(),
            price: Decimal::new(12900, 2),
            original_price: None,
            description: "Dark rose over smoked oud.".to_owned(),
            category: "oriental".to_owned(),
            image: "nuit-de-velours.jpg".to_owned(),
            rating: Decimal::new(45, 1),
            reviews: 12,
            in_stock: true,
            size: "100ml".to_owned(),
            notes: FragranceNotes::default(),
            featured: false,
        }
    }

    #[test]
    fn test_matches_each_searched_field() {
        let p = product();
        assert!(matches_query(&p, "velours")); // name
        assert!(matches_query(&p, "maison")); // brand
        assert!(matches_query(&p, "smoked oud")); // description
        assert!(matches_query(&p, "oriental")); // category
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let p = product();
        assert!(matches_query(&p, "NUIT"));
        assert!(matches_query(&p, "AmBrE"));
    }

    #[test]
    fn test_substring_not_token_match() {
        let p = product();
        // A fragment inside a word still matches.
        assert!(matches_query(&p, "elour"));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert!(matches_query(&product(), ""));
    }

    #[test]
    fn test_no_match() {
        let p = product();
        assert!(!matches_query(&p, "citrus"));
        // Fields outside the documented four are not searched.
        assert!(!matches_query(&p, "100ml"));
    }
}
