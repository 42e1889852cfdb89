//! Cart state.
//!
//! The cart is client-owned: an ordered list of product snapshots with
//! quantities, plus the currently applied promo code. Persistence (the
//! local-storage blob) is the caller's concern - this module only holds the
//! state transitions, so it serializes as a single document.

use serde::{Deserialize, Serialize};

use crate::pricing::{self, LineAmount, PricingConfig, Quote};
use crate::types::{Product, ProductId};

/// One cart line: a product snapshot and how many of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product: Product,
    /// Invariant: >= 1. Lines never carry a zero quantity; setting one
    /// removes the line instead.
    pub quantity: u32,
}

/// The cart: ordered lines keyed by product identity, last applied promo.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    lines: Vec<CartLine>,
    promo_code: Option<String>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines: Vec::new(),
            promo_code: None,
        }
    }

    /// The cart lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The currently applied promo code, if any.
    #[must_use]
    pub fn promo_code(&self) -> Option<&str> {
        self.promo_code.as_deref()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total unit count across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Add a product to the cart.
    ///
    /// A line matching the product's identity absorbs the quantity; otherwise
    /// a new line is appended. Adding zero is a no-op.
    pub fn add(&mut self, product: Product, quantity: u32) {
        if quantity == 0 {
            return;
        }
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product.id == product.id)
        {
            line.quantity += quantity;
        } else {
            self.lines.push(CartLine { product, quantity });
        }
    }

    /// Remove the line for the given product, if present.
    pub fn remove(&mut self, product_id: ProductId) {
        self.lines.retain(|line| line.product.id != product_id);
    }

    /// Set a line's quantity. Anything below 1 removes the line.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
            return;
        }
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product.id == product_id)
        {
            line.quantity = quantity;
        }
    }

    /// Empty the cart. The applied promo survives - it belongs to the
    /// session, not the lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Apply a promo code.
    ///
    /// A recognized code is retained and `true` is returned. An unrecognized
    /// code RESETS any previously applied promo - invalid input never leaves
    /// stale discount state behind.
    pub fn apply_promo(&mut self, code: &str, config: &PricingConfig) -> bool {
        if config.is_valid_promo(code) {
            self.promo_code = Some(code.to_owned());
            true
        } else {
            self.promo_code = None;
            false
        }
    }

    /// Price the cart under the applied promo.
    #[must_use]
    pub fn quote(&self, config: &PricingConfig) -> Quote {
        let lines: Vec<LineAmount> = self
            .lines
            .iter()
            .map(|line| LineAmount {
                price: line.product.price,
                quantity: line.quantity,
            })
            .collect();
        pricing::quote(&lines, self.promo_code.as_deref(), config)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::types::FragranceNotes;

    fn product(name: &str, price: &str) -> Product {
        Product {
            id: ProductId::generate(),
            name: name.to_owned(),
            brand: "Maison Ambre".to_owned(),
            price: price.parse().unwrap(),
            original_price: None,
            description: String::new(),
            category: "floral".to_owned(),
            image: format!("{name}.jpg"),
            rating: Decimal::new(45, 1),
            reviews: 0,
            in_stock: true,
            size: "100ml".to_owned(),
            notes: FragranceNotes::default(),
            featured: false,
        }
    }

    #[test]
    fn test_adding_same_product_merges_quantity() {
        let mut cart = Cart::new();
        let rose = product("Rose Absolue", "75.00");

        cart.add(rose.clone(), 1);
        cart.add(rose, 2);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 3);
    }

    #[test]
    fn test_distinct_products_get_distinct_lines() {
        let mut cart = Cart::new();
        cart.add(product("Rose Absolue", "75.00"), 1);
        cart.add(product("Bois Fume", "90.00"), 1);
        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_remove_deletes_line() {
        let mut cart = Cart::new();
        let rose = product("Rose Absolue", "75.00");
        let id = rose.id;
        cart.add(rose, 1);

        cart.remove(id);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_below_one_removes() {
        let mut cart = Cart::new();
        let rose = product("Rose Absolue", "75.00");
        let id = rose.id;
        cart.add(rose, 2);

        cart.set_quantity(id, 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_updates() {
        let mut cart = Cart::new();
        let rose = product("Rose Absolue", "75.00");
        let id = rose.id;
        cart.add(rose, 2);

        cart.set_quantity(id, 5);
        assert_eq!(cart.lines()[0].quantity, 5);
    }

    #[test]
    fn test_clear_empties_lines() {
        let mut cart = Cart::new();
        cart.add(product("Rose Absolue", "75.00"), 1);
        cart.add(product("Bois Fume", "90.00"), 3);
        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_invalid_promo_resets_valid_one() {
        let config = PricingConfig::default();
        let mut cart = Cart::new();
        cart.add(product("Rose Absolue", "75.00"), 1);

        assert!(cart.apply_promo("SAVE10", &config));
        assert_eq!(cart.promo_code(), Some("SAVE10"));

        // Re-applying an invalid code after a valid one resets the discount.
        assert!(!cart.apply_promo("BOGUS", &config));
        assert_eq!(cart.promo_code(), None);
        assert_eq!(cart.quote(&config).discount, Decimal::ZERO);
    }

    #[test]
    fn test_quote_uses_applied_promo() {
        let config = PricingConfig::default();
        let mut cart = Cart::new();
        cart.add(product("Rose Absolue", "200.00"), 1);
        cart.apply_promo("SAVE10", &config);

        let q = cart.quote(&config);
        assert_eq!(q.discount, "20.00".parse::<Decimal>().unwrap());
        assert_eq!(q.shipping, Decimal::ZERO);
    }

    #[test]
    fn test_cart_serializes_as_one_blob() {
        let mut cart = Cart::new();
        cart.add(product("Rose Absolue", "75.00"), 2);
        cart.apply_promo("WELCOME", &PricingConfig::default());

        let blob = serde_json::to_string(&cart).unwrap();
        let restored: Cart = serde_json::from_str(&blob).unwrap();
        assert_eq!(restored.lines().len(), 1);
        assert_eq!(restored.lines()[0].quantity, 2);
        assert_eq!(restored.promo_code(), Some("WELCOME"));
    }
}
